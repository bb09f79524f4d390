//! Delete command handler
//!
//! Deletion is permanent, so the command asks for confirmation unless
//! `--force` is given.

use crate::cli::handlers::common::{HandlerContext, resolve_ticket_ref};
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use dialoguer::{Confirm, theme::ColorfulTheme};

/// Handle the `delete` command
pub fn handle_delete_command(
    ticket: &str,
    force: bool,
    workspace: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;
    let principal = ctx.principal()?;
    let store = ctx.load_store()?;
    let id = resolve_ticket_ref(&store, &principal, ticket)?;

    if !force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Delete this ticket permanently?")
            .default(false)
            .interact()?;
        if !confirmed {
            formatter.info("Aborted");
            return Ok(());
        }
    }

    store.delete(&principal, &id)?;
    ctx.persist(&store)?;

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({
            "status": "success",
            "deleted": id,
        }))?;
    } else {
        formatter.success(&format!("Deleted ticket {}", id.short()));
    }

    Ok(())
}
