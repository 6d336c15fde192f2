//! Handler for the `list` command
//!
//! This is the change-filter intent: search text plus status/priority
//! selections narrow the visible subset, which renders as cards in the
//! stored (most-recent-first) order unless a sort is requested.

use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::{format_datetime, parse_filter_arg, short_id};
use crate::core::{Ticket, TicketFilter};
use crate::error::{DeskTicketError, Result};
use std::path::PathBuf;

/// Arguments for the list command
pub struct ListArgs {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub sort: String,
    pub reverse: bool,
    pub limit: Option<usize>,
    pub data_dir: Option<PathBuf>,
}

/// View ordering for the list command
#[derive(Debug, Clone, Copy)]
enum SortBy {
    /// Stored order: most recent first
    Created,
    Priority,
    Title,
}

impl SortBy {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "created" => Ok(Self::Created),
            "priority" => Ok(Self::Priority),
            "title" => Ok(Self::Title),
            other => Err(DeskTicketError::custom(format!(
                "invalid sort key: '{other}' (expected: created, priority, title)"
            ))),
        }
    }
}

/// Handle the `list` command
pub fn handle_list_command(args: ListArgs, output: &OutputFormatter) -> Result<()> {
    let sort_by = SortBy::parse(&args.sort)?;
    let filter = TicketFilter {
        search: args.search.clone(),
        status: parse_filter_arg(args.status.as_deref())?,
        priority: parse_filter_arg(args.priority.as_deref())?,
    };

    let context = HandlerContext::new(args.data_dir.as_deref())?;
    let mut visible: Vec<&Ticket> = filter.apply(context.store.all());

    match sort_by {
        // Store order already is newest-first
        SortBy::Created => {},
        SortBy::Priority => visible.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortBy::Title => visible.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    if args.reverse {
        visible.reverse();
    }
    if let Some(limit) = args.limit {
        visible.truncate(limit);
    }

    if output.is_json() {
        return output.print_json(&serde_json::json!({
            "count": visible.len(),
            "tickets": visible,
        }));
    }

    if visible.is_empty() {
        output.info("No tickets match the current filters.");
        return Ok(());
    }

    for ticket in &visible {
        render_card(ticket, output);
    }
    output.info(&format!("{} ticket(s)", visible.len()));

    Ok(())
}

/// Render one ticket as a card
fn render_card(ticket: &Ticket, output: &OutputFormatter) {
    output.info(&format!(
        "[{}] {} ({})",
        short_id(ticket.id),
        ticket.title,
        ticket.status
    ));
    output.info(&format!(
        "    {} | {} | from {} | assigned to {}",
        ticket.category,
        ticket.priority,
        ticket.requester,
        ticket.assignee_label()
    ));
    output.info(&format!(
        "    created {}",
        format_datetime(ticket.created_at)
    ));
    output.info("");
}
