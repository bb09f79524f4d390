//! Assign command handler
//!
//! Without `--to`, assigns the ticket to the logged-in agent themselves.

use crate::cli::handlers::common::{HandlerContext, resolve_ticket_ref};
use crate::cli::output::OutputFormatter;
use crate::core::Identity;
use crate::error::{HelpdeskError, Result};

/// Handle the `assign` command
pub fn handle_assign_command(
    ticket: &str,
    to: Option<String>,
    workspace: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;
    let principal = ctx.principal()?;
    let store = ctx.load_store()?;
    let id = resolve_ticket_ref(&store, &principal, ticket)?;

    let assignee = match to {
        Some(email) => Identity::from(email),
        None => principal
            .identity()
            .cloned()
            .ok_or(HelpdeskError::Unauthenticated)?,
    };

    store.assign(&principal, &id, assignee.clone())?;
    ctx.persist(&store)?;

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({
            "status": "success",
            "ticket_id": id,
            "assigned_to": assignee,
        }))?;
    } else {
        formatter.success(&format!("Assigned ticket {} to {assignee}", id.short()));
    }

    Ok(())
}
