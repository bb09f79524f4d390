//! Init command handler

use crate::cli::output::OutputFormatter;
use crate::cli::utils;
use crate::config::Config;
use crate::error::{HelpdeskError, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Handle the `init` command
///
/// Creates the `.helpdesk` state directory and writes the default
/// configuration, which registers the stock agent and customer emails.
pub fn handle_init(force: bool, workspace: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let root = match workspace {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };
    let workspace_dir = utils::workspace_dir(&root);

    if workspace_dir.exists() && !force {
        return Err(HelpdeskError::AlreadyInitialized {
            path: workspace_dir.display().to_string(),
        });
    }

    fs::create_dir_all(&workspace_dir)?;
    Config::default().save(&workspace_dir)?;

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({
            "status": "success",
            "workspace": workspace_dir.display().to_string(),
        }))?;
    } else {
        formatter.success("Initialized helpdesk workspace");
        formatter.info(&format!(
            "Configuration written to {}",
            workspace_dir.join("config.yaml").display()
        ));
        formatter.info("Edit it to register your agent and customer email addresses");
    }

    Ok(())
}
