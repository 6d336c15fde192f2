//! Command-line interface
//!
//! This module defines the argument surface and the output formatting,
//! and hosts the per-command handlers. The CLI is the rendering
//! collaborator of the system: it captures user intents (create,
//! set-status, delete, change-filter) and renders the filtered list and
//! summary counts; the business logic lives in [`crate::store`] and
//! [`crate::core`].

pub mod handlers;
pub mod output;
pub mod utils;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A local-first helpdesk ticket tracker for the terminal
#[derive(Parser)]
#[command(name = "desk-ticket", version, about, long_about = None)]
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

    /// Directory holding the ticket data (defaults to the per-user data dir)
    #[arg(long, global = true, env = "DESK_TICKET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new ticket
    New {
        /// Short summary of the request
        #[arg(short, long)]
        title: Option<String>,

        /// Who is asking for help
        #[arg(short, long)]
        requester: Option<String>,

        /// Contact email (optional)
        #[arg(short, long)]
        email: Option<String>,

        /// Category: hardware, software, network, access, other
        #[arg(short, long)]
        category: Option<String>,

        /// Priority: low, medium, high, urgent
        #[arg(short, long)]
        priority: Option<String>,

        /// Full description of the problem
        #[arg(short, long)]
        description: Option<String>,

        /// Who should work on it (optional)
        #[arg(short, long)]
        assignee: Option<String>,

        /// Walk through the ticket form interactively
        #[arg(short, long)]
        interactive: bool,
    },

    /// List tickets, filtered and searched
    List {
        /// Show only tickets whose title or requester contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by status (open, in-progress, resolved, or "all")
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority (low, medium, high, urgent, or "all")
        #[arg(long)]
        priority: Option<String>,

        /// Sort by: created, priority, title
        #[arg(long, default_value = "created")]
        sort: String,

        /// Reverse the sort order
        #[arg(long)]
        reverse: bool,

        /// Show at most this many tickets
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Change the status of a ticket
    Status {
        /// Ticket id (or unique prefix)
        ticket: String,

        /// New status: open, in-progress, resolved
        status: String,
    },

    /// Delete a ticket
    Delete {
        /// Ticket id (or unique prefix)
        ticket: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show a single ticket in full
    Show {
        /// Ticket id (or unique prefix)
        ticket: String,
    },

    /// Show summary counts over all tickets
    Stats,

    /// Export all tickets to a file or stdout
    Export {
        /// Output format: json, yaml, csv
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import tickets from a file
    Import {
        /// File to read
        file: PathBuf,

        /// Input format: json, yaml, csv (detected from content if omitted)
        #[arg(short, long)]
        format: Option<String>,

        /// Validate only; do not admit anything
        #[arg(long)]
        dry_run: bool,
    },
}
