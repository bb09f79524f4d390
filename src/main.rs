//! helpdesk - role-aware support ticket tracker
//!
//! This is the main entry point for the helpdesk CLI application. It
//! parses command-line arguments, dispatches to the command handlers, and
//! turns errors into readable output and a non-zero exit code.

use clap::Parser;
use helpdesk::cli::{Cli, Commands, OutputFormatter, handlers};
use helpdesk::error::Result;
use std::process;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let workspace = cli.workspace.as_deref();

    match cli.command {
        Commands::Init { force } => handlers::handle_init(force, workspace, formatter),
        Commands::Login { email } => handlers::handle_login(&email, workspace, formatter),
        Commands::Logout => handlers::handle_logout(workspace, formatter),
        Commands::Whoami => handlers::handle_whoami(workspace, formatter),
        Commands::New {
            title,
            description,
            priority,
        } => handlers::handle_new_command(
            handlers::NewParams {
                title,
                description,
                priority,
                workspace: cli.workspace.clone(),
            },
            formatter,
        ),
        Commands::List {
            status,
            priority,
            assignee,
        } => handlers::handle_list_command(status, priority, assignee, workspace, formatter),
        Commands::Edit {
            ticket,
            title,
            description,
            priority,
            status,
            assign,
            unassign,
        } => handlers::handle_edit_command(
            handlers::EditParams {
                ticket,
                title,
                description,
                priority,
                status,
                assign,
                unassign,
                workspace: cli.workspace.clone(),
            },
            formatter,
        ),
        Commands::Assign { ticket, to } => {
            handlers::handle_assign_command(&ticket, to, workspace, formatter)
        },
        Commands::Delete { ticket, force } => {
            handlers::handle_delete_command(&ticket, force, workspace, formatter)
        },
        Commands::Stats => handlers::handle_stats_command(workspace, formatter),
    }
}

/// Handle errors and display them to the user
///
/// Prints the main error message, any suggestions for fixing it, and a
/// JSON error document when JSON output was requested.
fn handle_error(error: &helpdesk::error::HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        for suggestion in &suggestions {
            eprintln!("  hint: {suggestion}");
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }
}
