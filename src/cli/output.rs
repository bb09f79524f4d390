//! Output formatting for the CLI
//!
//! Handlers branch on [`OutputFormatter::is_json`] and either print plain
//! human-readable lines or a single JSON document. Errors always go to
//! stderr.

use crate::error::{HelpdeskError, Result};
use colored::Colorize;
use serde::Serialize;

/// Formats CLI output as colored text or JSON
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning
    pub fn warning(&self, message: &str) {
        if self.no_color {
            eprintln!("Warning: {message}");
        } else {
            eprintln!("{} {message}", "Warning:".yellow());
        }
    }

    /// Print an error message to stderr
    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| HelpdeskError::custom(format!("Failed to render JSON output: {e}")))?;
        println!("{rendered}");
        Ok(())
    }
}
