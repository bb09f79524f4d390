//! Session command handlers: login, logout, whoami
//!
//! The session layer stands in for a real identity provider: it records
//! which email the caller claims to be and derives the role from the
//! workspace's role directory. There is no credential verification here by
//! design; the engine treats identity as an input.

use crate::cli::handlers::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::{Identity, Role};
use crate::error::{HelpdeskError, Result};
use tracing::info;

/// Handle the `login` command
pub fn handle_login(email: &str, workspace: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;

    if !email.contains('@') {
        return Err(HelpdeskError::InvalidInput(format!(
            "'{email}' does not look like an email address"
        )));
    }

    let identity = Identity::from(email);
    let role = ctx.config.role_directory().resolve(&identity);
    ctx.storage.write_session(&identity)?;
    info!(%identity, %role, "session started");

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({
            "status": "success",
            "identity": identity,
            "role": role,
        }))?;
    } else {
        formatter.success(&format!("Logged in as {identity} ({role})"));
        if role == Role::None {
            formatter.warning(
                "this email has no role in config.yaml, so no tickets will be visible",
            );
        }
    }

    Ok(())
}

/// Handle the `logout` command
pub fn handle_logout(workspace: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;
    ctx.storage.clear_session()?;
    info!("session ended");

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({ "status": "success" }))?;
    } else {
        formatter.success("Logged out");
    }

    Ok(())
}

/// Handle the `whoami` command
pub fn handle_whoami(workspace: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let ctx = HandlerContext::new(workspace)?;
    let identity = ctx.storage.read_session()?;
    let role = identity
        .as_ref()
        .map(|id| ctx.config.role_directory().resolve(id));

    if formatter.is_json() {
        formatter.print_json(&serde_json::json!({
            "identity": identity,
            "role": role,
        }))?;
    } else {
        match (identity, role) {
            (Some(identity), Some(role)) => {
                formatter.info(&format!("{identity} ({role})"));
            },
            _ => formatter.info("Not logged in"),
        }
    }

    Ok(())
}
