//! Create command handler
//!
//! Files a new ticket for the logged-in identity. Missing fields are
//! collected interactively; the engine enforces that both title and
//! description end up non-empty.

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::{Priority, TicketDraft};
use crate::error::Result;
use dialoguer::{Input, theme::ColorfulTheme};

/// Parameters for creating a ticket
pub struct NewParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: String,
    pub workspace: Option<String>,
}

/// Handle the `new` command
pub fn handle_new_command(params: NewParams, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(params.workspace.as_deref())?;
    let principal = ctx.principal()?;

    let theme = ColorfulTheme::default();
    let title = match params.title {
        Some(title) => title,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Title")
            .interact_text()?,
    };
    let description = match params.description {
        Some(description) => description,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Description")
            .interact_text()?,
    };
    let priority: Priority = params.priority.parse()?;

    let store = ctx.load_store()?;
    let draft = TicketDraft {
        title,
        description,
        priority,
    };
    let id = store.create(&principal, draft)?;
    ctx.persist(&store)?;

    if formatter.is_json() {
        let ticket = store.snapshot().into_iter().find(|t| t.id == id);
        formatter.print_json(&serde_json::json!({
            "status": "success",
            "ticket": ticket,
        }))?;
    } else {
        formatter.success(&format!("Created ticket {}", id.short()));
        formatter.info(&format!("Full ID: {id}"));
    }

    Ok(())
}
