//! Edit command handler
//!
//! Builds a partial update from the provided flags and hands it to the
//! engine. Which of the fields actually apply depends on the caller's
//! role; the engine narrows customer patches silently.

use crate::cli::handlers::common::{HandlerContext, resolve_ticket_ref};
use crate::cli::output::OutputFormatter;
use crate::core::{Identity, Priority, Status, TicketPatch};
use crate::error::Result;

/// Parameters for editing a ticket
pub struct EditParams {
    pub ticket: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assign: Option<String>,
    pub unassign: bool,
    pub workspace: Option<String>,
}

/// Handle the `edit` command
pub fn handle_edit_command(params: EditParams, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(params.workspace.as_deref())?;
    let principal = ctx.principal()?;
    let store = ctx.load_store()?;
    let id = resolve_ticket_ref(&store, &principal, &params.ticket)?;

    let assigned_to = if params.unassign {
        Some(None)
    } else {
        params.assign.map(|email| Some(Identity::from(email)))
    };
    let patch = TicketPatch {
        title: params.title,
        description: params.description,
        priority: params
            .priority
            .as_deref()
            .map(|s| s.parse::<Priority>())
            .transpose()?,
        status: params
            .status
            .as_deref()
            .map(|s| s.parse::<Status>())
            .transpose()?,
        assigned_to,
    };

    store.update(&principal, &id, patch)?;
    ctx.persist(&store)?;

    if formatter.is_json() {
        let ticket = store.snapshot().into_iter().find(|t| t.id == id);
        formatter.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        formatter.success(&format!("Updated ticket {}", id.short()));
    }

    Ok(())
}
