//! The ticket store: lifecycle and authorization engine
//!
//! [`TicketStore`] owns the authoritative, in-memory set of tickets and is
//! the only place ticket state changes. Every operation takes the resolved
//! caller as a [`Principal`] and either completes with its documented
//! effect or fails with one classifiable error and no effect at all.
//!
//! Permissions by role:
//!
//! | operation | agent | customer | none |
//! |-----------|-------|----------|------|
//! | create    | yes   | yes      | only unauthenticated callers are refused |
//! | view      | all tickets | own tickets | nothing |
//! | update    | any ticket, any field | own tickets, bounded fields | refused |
//! | assign    | yes   | refused  | refused |
//! | delete    | refused | own tickets | refused |
//!
//! The store is an explicitly owned object, not a global: tests and
//! integrations construct isolated instances and inject them where needed.

use crate::core::{Identity, Principal, Role, Status, Ticket, TicketDraft, TicketId, TicketPatch};
use crate::error::{HelpdeskError, Result};
use chrono::Utc;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// In-memory collection of tickets with role-scoped operations
///
/// Tickets are kept in insertion order, which is the order every view
/// presents them in. All operations lock the collection for their full
/// duration, so each mutation is atomic with respect to concurrent reads
/// and other mutations.
pub struct TicketStore {
    tickets: Mutex<Vec<Ticket>>,
}

impl TicketStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            tickets: Mutex::new(Vec::new()),
        }
    }

    /// Create a store from an existing ticket list, preserving its order
    #[must_use]
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: Mutex::new(tickets),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Ticket>> {
        // The vector is always consistent between operations, so a lock
        // poisoned by a panicking thread can be recovered as-is.
        self.tickets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a ticket from the draft, owned by the caller's identity
    ///
    /// Any authenticated identity may create a ticket, whatever its role.
    /// Fails with `Unauthenticated` when no identity is present and with
    /// `InvalidInput` when the title or description is blank.
    pub fn create(&self, principal: &Principal, draft: TicketDraft) -> Result<TicketId> {
        let Some(identity) = principal.identity() else {
            return Err(HelpdeskError::Unauthenticated);
        };
        if draft.title.trim().is_empty() {
            return Err(HelpdeskError::InvalidInput(
                "title must not be empty".to_string(),
            ));
        }
        if draft.description.trim().is_empty() {
            return Err(HelpdeskError::InvalidInput(
                "description must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let ticket = Ticket {
            id: TicketId::new(),
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: Status::Open,
            created_by: identity.clone(),
            assigned_to: None,
            created_at: now,
            updated_at: now,
        };
        let id = ticket.id.clone();

        self.lock().push(ticket);
        debug!(ticket_id = %id, created_by = %identity, "ticket created");
        Ok(id)
    }

    /// Apply a partial update to a ticket
    ///
    /// Agents may change any field of any ticket. Customers may change
    /// title, description, and priority on their own tickets; anything
    /// else in the patch is narrowed away silently. A patch that ends up
    /// carrying nothing is still a successful mutation and bumps
    /// `updated_at`.
    pub fn update(&self, principal: &Principal, id: &TicketId, patch: TicketPatch) -> Result<()> {
        if principal.role() == Role::None {
            return Err(HelpdeskError::unauthorized("you cannot update tickets"));
        }

        let mut tickets = self.lock();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| HelpdeskError::TicketNotFound { id: id.to_string() })?;

        let patch = match principal.role() {
            Role::Agent => patch,
            Role::Customer => {
                let Some(identity) = principal.identity() else {
                    return Err(HelpdeskError::Unauthenticated);
                };
                if !ticket.is_created_by(identity) {
                    return Err(HelpdeskError::unauthorized(
                        "you can only update your own tickets",
                    ));
                }
                patch.narrowed()
            },
            Role::None => unreachable!("rejected above"),
        };

        patch.apply_to(ticket);
        ticket.updated_at = Utc::now();
        debug!(ticket_id = %id, role = %principal.role(), "ticket updated");
        Ok(())
    }

    /// Permanently remove a ticket
    ///
    /// Only the customer who created a ticket may delete it; agents have
    /// no delete capability at all. Existence is checked before any
    /// authorization, so a missing ticket reports `NotFound` to every
    /// caller alike.
    pub fn delete(&self, principal: &Principal, id: &TicketId) -> Result<()> {
        let mut tickets = self.lock();
        let index = tickets
            .iter()
            .position(|t| t.id == *id)
            .ok_or_else(|| HelpdeskError::TicketNotFound { id: id.to_string() })?;

        if !principal.role().is_customer() {
            return Err(HelpdeskError::unauthorized(
                "only customers can delete their tickets",
            ));
        }
        let Some(identity) = principal.identity() else {
            return Err(HelpdeskError::Unauthenticated);
        };
        if !tickets[index].is_created_by(identity) {
            return Err(HelpdeskError::unauthorized(
                "you can only delete your own tickets",
            ));
        }

        tickets.remove(index);
        debug!(ticket_id = %id, deleted_by = %identity, "ticket deleted");
        Ok(())
    }

    /// Assign a ticket to an identity
    ///
    /// Agent-only. Re-assigning an already-assigned ticket is allowed.
    pub fn assign(&self, principal: &Principal, id: &TicketId, assignee: Identity) -> Result<()> {
        if !principal.role().is_agent() {
            return Err(HelpdeskError::unauthorized("only agents can assign tickets"));
        }

        let mut tickets = self.lock();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| HelpdeskError::TicketNotFound { id: id.to_string() })?;

        ticket.assigned_to = Some(assignee.clone());
        ticket.updated_at = Utc::now();
        debug!(ticket_id = %id, assigned_to = %assignee, "ticket assigned");
        Ok(())
    }

    /// The tickets the caller may see, in insertion order
    ///
    /// Agents see everything, customers see the tickets they created, and
    /// unauthenticated or unrecognized callers see nothing. Pure read.
    #[must_use]
    pub fn visible(&self, principal: &Principal) -> Vec<Ticket> {
        let tickets = self.lock();
        match principal.role() {
            Role::Agent => tickets.clone(),
            Role::Customer => match principal.identity() {
                Some(identity) => tickets
                    .iter()
                    .filter(|t| t.is_created_by(identity))
                    .cloned()
                    .collect(),
                None => Vec::new(),
            },
            Role::None => Vec::new(),
        }
    }

    /// Summary counts over the caller's visible tickets
    #[must_use]
    pub fn stats(&self, principal: &Principal) -> TicketStats {
        let visible = self.visible(principal);
        TicketStats {
            total: visible.len(),
            open: visible.iter().filter(|t| t.status == Status::Open).count(),
            in_progress: visible
                .iter()
                .filter(|t| t.status == Status::InProgress)
                .count(),
            closed: visible
                .iter()
                .filter(|t| t.status == Status::Closed)
                .count(),
            high_priority: visible
                .iter()
                .filter(|t| t.priority == crate::core::Priority::High)
                .count(),
        }
    }

    /// A copy of every ticket in insertion order, for persistence
    #[must_use]
    pub fn snapshot(&self) -> Vec<Ticket> {
        self.lock().clone()
    }

    /// Total number of tickets, regardless of viewer
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the store holds no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts displayed on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
    pub high_priority: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Priority;
    use crate::test_utils::{agent, anonymous, customer, draft, other_customer, unlisted_user};

    fn seeded() -> (TicketStore, TicketId) {
        let store = TicketStore::new();
        let id = store
            .create(&customer(), draft("Printer broken"))
            .expect("create should succeed");
        (store, id)
    }

    #[test]
    fn test_create_sets_initial_state() {
        let (store, id) = seeded();
        let tickets = store.visible(&agent());
        assert_eq!(tickets.len(), 1);

        let ticket = &tickets[0];
        assert_eq!(ticket.id, id);
        assert_eq!(ticket.status, Status::Open);
        assert_eq!(ticket.created_by, Identity::from("customer@support.com"));
        assert!(ticket.assigned_to.is_none());
        assert_eq!(ticket.created_at, ticket.updated_at);
    }

    #[test]
    fn test_create_ids_are_pairwise_distinct() {
        let store = TicketStore::new();
        let ids: Vec<TicketId> = (0..50)
            .map(|i| store.create(&customer(), draft(&format!("Ticket {i}"))).unwrap())
            .collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_create_requires_identity() {
        let store = TicketStore::new();
        let err = store.create(&anonymous(), draft("No one home")).unwrap_err();
        assert!(matches!(err, HelpdeskError::Unauthenticated));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let store = TicketStore::new();

        let blank_title = TicketDraft::new("   ", "some description");
        assert!(matches!(
            store.create(&customer(), blank_title),
            Err(HelpdeskError::InvalidInput(_))
        ));

        let blank_description = TicketDraft::new("A title", "");
        assert!(matches!(
            store.create(&customer(), blank_description),
            Err(HelpdeskError::InvalidInput(_))
        ));

        assert!(store.is_empty());
    }

    #[test]
    fn test_any_authenticated_identity_may_create() {
        // Creation is deliberately not role-gated: agents and identities
        // the directory does not know can file tickets too.
        let store = TicketStore::new();
        assert!(store.create(&agent(), draft("Filed by an agent")).is_ok());
        assert!(
            store
                .create(&unlisted_user(), draft("Filed by an unknown email"))
                .is_ok()
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_visibility_by_role() {
        let store = TicketStore::new();
        store.create(&customer(), draft("Mine")).unwrap();
        store.create(&other_customer(), draft("Theirs")).unwrap();

        let all = store.visible(&agent());
        assert_eq!(all.len(), 2);

        let mine = store.visible(&customer());
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Mine");

        assert!(store.visible(&anonymous()).is_empty());
        // An authenticated identity without a directory entry sees nothing.
        assert!(store.visible(&unlisted_user()).is_empty());
    }

    #[test]
    fn test_visibility_preserves_insertion_order() {
        let store = TicketStore::new();
        for i in 0..5 {
            store.create(&customer(), draft(&format!("Ticket {i}"))).unwrap();
        }

        let titles: Vec<String> = store
            .visible(&agent())
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Ticket 0", "Ticket 1", "Ticket 2", "Ticket 3", "Ticket 4"]
        );
    }

    #[test]
    fn test_visibility_is_idempotent() {
        let (store, _) = seeded();
        assert_eq!(store.visible(&agent()), store.visible(&agent()));
        assert_eq!(store.visible(&customer()), store.visible(&customer()));
    }

    #[test]
    fn test_agent_updates_any_field_of_any_ticket() {
        let (store, id) = seeded();
        let patch = TicketPatch {
            title: Some("Printer still broken".to_string()),
            status: Some(Status::InProgress),
            assigned_to: Some(Some(Identity::from("agent@support.com"))),
            ..TicketPatch::default()
        };
        store.update(&agent(), &id, patch).unwrap();

        let ticket = &store.visible(&agent())[0];
        assert_eq!(ticket.title, "Printer still broken");
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(
            ticket.assigned_to,
            Some(Identity::from("agent@support.com"))
        );
        assert!(ticket.updated_at >= ticket.created_at);
    }

    #[test]
    fn test_customer_update_is_narrowed_not_rejected() {
        // A customer patch smuggling status alongside title gets the title
        // applied and the status dropped, silently.
        let (store, id) = seeded();
        let patch = TicketPatch {
            title: Some("x".to_string()),
            status: Some(Status::Closed),
            ..TicketPatch::default()
        };
        store.update(&customer(), &id, patch).unwrap();

        let ticket = &store.visible(&agent())[0];
        assert_eq!(ticket.title, "x");
        assert_eq!(ticket.status, Status::Open);
    }

    #[test]
    fn test_customer_cannot_update_others_tickets() {
        let (store, id) = seeded();
        let patch = TicketPatch {
            title: Some("hijacked".to_string()),
            ..TicketPatch::default()
        };
        let err = store.update(&other_customer(), &id, patch).unwrap_err();
        assert!(matches!(err, HelpdeskError::Unauthorized { .. }));
        assert_eq!(store.visible(&agent())[0].title, "Printer broken");
    }

    #[test]
    fn test_update_by_unrecognized_caller_is_unauthorized() {
        let (store, id) = seeded();
        for principal in [anonymous(), unlisted_user()] {
            let err = store
                .update(&principal, &id, TicketPatch::default())
                .unwrap_err();
            assert!(matches!(err, HelpdeskError::Unauthorized { .. }));
        }
    }

    #[test]
    fn test_update_missing_ticket_is_not_found() {
        let (store, _) = seeded();
        let missing = TicketId::new();
        let err = store
            .update(&agent(), &missing, TicketPatch::default())
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::TicketNotFound { .. }));
    }

    #[test]
    fn test_empty_patch_still_bumps_updated_at() {
        let (store, id) = seeded();
        let before = store.visible(&agent())[0].clone();
        store.update(&customer(), &id, TicketPatch::default()).unwrap();
        let after = &store.visible(&agent())[0];

        assert!(after.updated_at >= before.updated_at);
        assert_eq!(after.title, before.title);
        assert_eq!(after.status, before.status);
    }

    #[test]
    fn test_created_by_survives_every_mutation() {
        let (store, id) = seeded();
        let creator = Identity::from("customer@support.com");

        let patch = TicketPatch {
            title: Some("renamed".to_string()),
            status: Some(Status::Closed),
            ..TicketPatch::default()
        };
        store.update(&agent(), &id, patch).unwrap();
        store
            .assign(&agent(), &id, Identity::from("agent@support.com"))
            .unwrap();
        // A failed delete must not touch the ticket either.
        store.delete(&agent(), &id).unwrap_err();

        assert_eq!(store.visible(&agent())[0].created_by, creator);
    }

    #[test]
    fn test_customer_deletes_own_ticket() {
        let (store, id) = seeded();
        store.delete(&customer(), &id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_agents_have_no_delete_capability() {
        let (store, id) = seeded();
        let err = store.delete(&agent(), &id).unwrap_err();
        assert!(matches!(err, HelpdeskError::Unauthorized { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_customer_cannot_delete_others_tickets() {
        let (store, id) = seeded();
        let err = store.delete(&other_customer(), &id).unwrap_err();
        assert!(matches!(err, HelpdeskError::Unauthorized { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_reports_missing_before_authorization() {
        // Existence is checked first, so even a caller who could never
        // delete anything gets NotFound for a missing id.
        let (store, _) = seeded();
        let missing = TicketId::new();
        for principal in [agent(), customer(), anonymous()] {
            let err = store.delete(&principal, &missing).unwrap_err();
            assert!(matches!(err, HelpdeskError::TicketNotFound { .. }));
        }
    }

    #[test]
    fn test_only_agents_assign() {
        let (store, id) = seeded();
        for principal in [customer(), other_customer(), anonymous(), unlisted_user()] {
            let err = store
                .assign(&principal, &id, Identity::from("agent@support.com"))
                .unwrap_err();
            assert!(matches!(err, HelpdeskError::Unauthorized { .. }));
        }
        assert!(store.visible(&agent())[0].assigned_to.is_none());
    }

    #[test]
    fn test_assign_and_reassign() {
        let (store, id) = seeded();
        store
            .assign(&agent(), &id, Identity::from("agent@support.com"))
            .unwrap();
        assert_eq!(
            store.visible(&agent())[0].assigned_to,
            Some(Identity::from("agent@support.com"))
        );

        // Re-assignment of an already-assigned ticket is allowed.
        store
            .assign(&agent(), &id, Identity::from("second-agent@support.com"))
            .unwrap();
        assert_eq!(
            store.visible(&agent())[0].assigned_to,
            Some(Identity::from("second-agent@support.com"))
        );
    }

    #[test]
    fn test_assign_missing_ticket_is_not_found() {
        let store = TicketStore::new();
        let err = store
            .assign(&agent(), &TicketId::new(), Identity::from("agent@support.com"))
            .unwrap_err();
        assert!(matches!(err, HelpdeskError::TicketNotFound { .. }));
    }

    #[test]
    fn test_stats_count_visible_tickets() {
        let store = TicketStore::new();
        let first = store
            .create(
                &customer(),
                draft("Broken printer").with_priority(Priority::High),
            )
            .unwrap();
        store.create(&customer(), draft("Slow laptop")).unwrap();
        store.create(&other_customer(), draft("Lost password")).unwrap();

        let patch = TicketPatch {
            status: Some(Status::Closed),
            ..TicketPatch::default()
        };
        store.update(&agent(), &first, patch).unwrap();

        let all = store.stats(&agent());
        assert_eq!(all.total, 3);
        assert_eq!(all.open, 2);
        assert_eq!(all.closed, 1);
        assert_eq!(all.high_priority, 1);

        let own = store.stats(&customer());
        assert_eq!(own.total, 2);

        assert_eq!(store.stats(&anonymous()).total, 0);
    }

    #[test]
    fn test_lifecycle_scenario() {
        // Customer files a ticket, an agent claims it, the customer
        // deletes it; the pool ends up empty for everyone.
        let store = TicketStore::new();
        let id = store
            .create(
                &customer(),
                TicketDraft::new("Printer broken", "It eats every page")
                    .with_priority(Priority::Medium),
            )
            .unwrap();

        let ticket = &store.visible(&agent())[0];
        assert_eq!(ticket.status, Status::Open);
        assert_eq!(ticket.created_by, Identity::from("customer@support.com"));
        assert!(ticket.assigned_to.is_none());

        store
            .assign(&agent(), &id, Identity::from("agent@support.com"))
            .unwrap();
        assert_eq!(
            store.visible(&agent())[0].assigned_to,
            Some(Identity::from("agent@support.com"))
        );

        store.delete(&customer(), &id).unwrap();
        assert!(store.visible(&agent()).is_empty());
    }

    #[test]
    fn test_failed_operations_leave_store_unchanged() {
        let (store, id) = seeded();
        let before = store.snapshot();

        store.create(&anonymous(), draft("nope")).unwrap_err();
        store
            .update(&other_customer(), &id, TicketPatch {
                title: Some("nope".to_string()),
                ..TicketPatch::default()
            })
            .unwrap_err();
        store.delete(&agent(), &id).unwrap_err();
        store
            .assign(&customer(), &id, Identity::from("x@support.com"))
            .unwrap_err();

        assert_eq!(store.snapshot(), before);
    }
}
