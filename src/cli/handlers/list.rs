//! List command handler
//!
//! Shows the caller's view of the ticket pool, optionally narrowed by
//! status, priority, or assignee. These filters run on top of the
//! engine's visibility projection, never instead of it.

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::{Identity, Priority, Status, Ticket};
use crate::error::Result;

/// Display-level narrowing of the visible ticket list
#[derive(Debug, Default)]
pub struct TicketFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub assignee: Option<Identity>,
}

impl TicketFilter {
    /// Parse filter values from their command-line form
    pub fn parse(
        status: Option<&str>,
        priority: Option<&str>,
        assignee: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            status: status.map(str::parse).transpose()?,
            priority: priority.map(str::parse).transpose()?,
            assignee: assignee.map(Identity::from),
        })
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }
        if let Some(ref assignee) = self.assignee {
            if ticket.assigned_to.as_ref() != Some(assignee) {
                return false;
            }
        }
        true
    }

    /// Keep only the tickets matching every given criterion, preserving
    /// their order
    #[must_use]
    pub fn apply(&self, tickets: Vec<Ticket>) -> Vec<Ticket> {
        tickets.into_iter().filter(|t| self.matches(t)).collect()
    }
}

/// Handle the `list` command
pub fn handle_list_command(
    status: Option<String>,
    priority: Option<String>,
    assignee: Option<String>,
    workspace: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;
    let principal = ctx.principal()?;
    let store = ctx.load_store()?;

    let filter = TicketFilter::parse(
        status.as_deref(),
        priority.as_deref(),
        assignee.as_deref(),
    )?;
    let tickets = filter.apply(store.visible(&principal));

    if formatter.is_json() {
        let count = tickets.len();
        formatter.print_json(&serde_json::json!({
            "tickets": tickets,
            "count": count,
        }))?;
        return Ok(());
    }

    if tickets.is_empty() {
        formatter.info("No tickets found");
        return Ok(());
    }

    for ticket in &tickets {
        formatter.info(&format!(
            "{}  [{}] [{}] {}",
            ticket.id.short(),
            ticket.status,
            ticket.priority,
            ticket.title
        ));
        let assigned = ticket
            .assigned_to
            .as_ref()
            .map_or_else(|| "unassigned".to_string(), ToString::to_string);
        formatter.info(&format!(
            "          by {}, assigned to {}",
            ticket.created_by, assigned
        ));
    }
    formatter.info("");
    formatter.info(&format!("{} ticket(s)", tickets.len()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketPatch;
    use crate::test_utils::{agent, customer, draft, store_with_tickets};

    #[test]
    fn test_filter_by_status() {
        let store = store_with_tickets(&["One", "Two"]);
        let id = store.visible(&agent())[0].id.clone();
        store
            .update(&agent(), &id, TicketPatch {
                status: Some(Status::Closed),
                ..TicketPatch::default()
            })
            .unwrap();

        let filter = TicketFilter::parse(Some("closed"), None, None).unwrap();
        let filtered = filter.apply(store.visible(&agent()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "One");
    }

    #[test]
    fn test_filter_by_priority() {
        let store = store_with_tickets(&[]);
        store
            .create(&customer(), draft("Urgent").with_priority(Priority::High))
            .unwrap();
        store.create(&customer(), draft("Routine")).unwrap();

        let filter = TicketFilter::parse(None, Some("high"), None).unwrap();
        let filtered = filter.apply(store.visible(&agent()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Urgent");
    }

    #[test]
    fn test_filter_by_assignee() {
        let store = store_with_tickets(&["One", "Two"]);
        let id = store.visible(&agent())[1].id.clone();
        store
            .assign(&agent(), &id, Identity::from("agent@support.com"))
            .unwrap();

        let filter = TicketFilter::parse(None, None, Some("agent@support.com")).unwrap();
        let filtered = filter.apply(store.visible(&agent()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Two");
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let store = store_with_tickets(&["A", "B", "C"]);
        let filtered = TicketFilter::default().apply(store.visible(&agent()));
        let titles: Vec<&str> = filtered.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_invalid_filter_values_are_rejected() {
        assert!(TicketFilter::parse(Some("resolved"), None, None).is_err());
        assert!(TicketFilter::parse(None, Some("urgent"), None).is_err());
    }
}
