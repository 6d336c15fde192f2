//! desk-ticket - helpdesk ticket tracker CLI
//!
//! This is the main entry point. It parses command-line arguments and
//! dispatches to the appropriate command handler.

use clap::Parser;
use desk_ticket::cli::{Cli, Commands, OutputFormatter, handlers};
use desk_ticket::error::Result;
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

    let data_dir = cli.data_dir;

    match cli.command {
        Commands::New {
            title,
            requester,
            email,
            category,
            priority,
            description,
            assignee,
            interactive,
        } => handlers::handle_new_command(
            handlers::NewTicketArgs {
                title,
                requester,
                email,
                category,
                priority,
                description,
                assignee,
                interactive,
                data_dir,
            },
            formatter,
        ),
        Commands::List {
            search,
            status,
            priority,
            sort,
            reverse,
            limit,
        } => handlers::handle_list_command(
            handlers::ListArgs {
                search,
                status,
                priority,
                sort,
                reverse,
                limit,
                data_dir,
            },
            formatter,
        ),
        Commands::Status { ticket, status } => {
            handlers::handle_status_command(&ticket, &status, data_dir.as_deref(), formatter)
        },
        Commands::Delete { ticket, force } => {
            handlers::handle_delete_command(&ticket, force, data_dir.as_deref(), formatter)
        },
        Commands::Show { ticket } => {
            handlers::handle_show_command(&ticket, data_dir.as_deref(), formatter)
        },
        Commands::Stats => handlers::handle_stats_command(data_dir.as_deref(), formatter),
        Commands::Export { format, output } => {
            handlers::handle_export_command(&format, output, data_dir.as_deref(), formatter)
        },
        Commands::Import {
            file,
            format,
            dry_run,
        } => handlers::handle_import_command(
            &file,
            format.as_deref(),
            dry_run,
            data_dir.as_deref(),
            formatter,
        ),
    }
}

/// Display an error to the user, with suggestions where we have them
fn handle_error(error: &desk_ticket::error::DeskTicketError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  - {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "recoverable": error.is_recoverable(),
            "suggestions": suggestions,
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
