//! Stats command handler
//!
//! Dashboard-style counts over the caller's visible tickets.

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// Handle the `stats` command
pub fn handle_stats_command(workspace: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;
    let principal = ctx.principal()?;
    let store = ctx.load_store()?;
    let stats = store.stats(&principal);

    if formatter.is_json() {
        formatter.print_json(&stats)?;
        return Ok(());
    }

    formatter.info(&format!("Total tickets:  {}", stats.total));
    formatter.info(&format!("Open:           {}", stats.open));
    formatter.info(&format!("In progress:    {}", stats.in_progress));
    formatter.info(&format!("Closed:         {}", stats.closed));
    formatter.info(&format!("High priority:  {}", stats.high_priority));

    Ok(())
}
