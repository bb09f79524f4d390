//! Command-line interface for helpdesk
//!
//! The CLI is the presentation collaborator: it resolves the caller's
//! session into a [`crate::core::Principal`], invokes the engine, and
//! renders results or error kinds. It holds no authorization logic of its
//! own.

pub mod handlers;
pub mod output;
pub mod utils;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// A role-aware support ticket tracker
#[derive(Debug, Parser)]
#[command(name = "helpdesk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the workspace (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All helpdesk subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a helpdesk workspace in the current directory
    Init {
        /// Overwrite an existing workspace configuration
        #[arg(long)]
        force: bool,
    },

    /// Start a session as the given email address
    Login {
        /// Email address to log in as
        email: String,
    },

    /// End the current session
    Logout,

    /// Show the current session identity and role
    Whoami,

    /// File a new ticket
    New {
        /// Ticket title; prompted for when omitted
        title: Option<String>,

        /// Full description of the issue; prompted for when omitted
        #[arg(short, long)]
        description: Option<String>,

        /// Priority: low, medium, or high
        #[arg(short, long, default_value = "medium")]
        priority: String,
    },

    /// List the tickets you can see
    List {
        /// Only tickets with this status (open, in-progress, closed)
        #[arg(long)]
        status: Option<String>,

        /// Only tickets with this priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// Only tickets assigned to this email address
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Edit a ticket
    Edit {
        /// Ticket ID (a unique prefix is enough)
        ticket: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority: low, medium, or high
        #[arg(long)]
        priority: Option<String>,

        /// New status: open, in-progress, or closed (agents only)
        #[arg(long)]
        status: Option<String>,

        /// Assign the ticket to this email address (agents only)
        #[arg(long)]
        assign: Option<String>,

        /// Clear the ticket's assignment (agents only)
        #[arg(long, conflicts_with = "assign")]
        unassign: bool,
    },

    /// Assign a ticket to an agent
    Assign {
        /// Ticket ID (a unique prefix is enough)
        ticket: String,

        /// Assignee email; defaults to the logged-in identity
        #[arg(long)]
        to: Option<String>,
    },

    /// Delete one of your tickets
    Delete {
        /// Ticket ID (a unique prefix is enough)
        ticket: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },

    /// Show ticket counts for your view of the pool
    Stats,
}
