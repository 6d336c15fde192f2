//! Handler for the `show` command

use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::{format_datetime, resolve_ticket_ref};
use crate::core::Ticket;
use crate::error::{DeskTicketError, Result};
use std::path::Path;

/// Handle the `show` command
pub fn handle_show_command(
    ticket_ref: &str,
    data_dir: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let context = HandlerContext::new(data_dir)?;
    let id = resolve_ticket_ref(context.store.all(), ticket_ref)?;
    let ticket = context
        .store
        .get(id)
        .ok_or_else(|| DeskTicketError::TicketNotFound {
            reference: ticket_ref.to_string(),
        })?;

    if output.is_json() {
        return output.print_json(ticket);
    }

    display_ticket(ticket, output);
    Ok(())
}

/// Display a full ticket record
fn display_ticket(ticket: &Ticket, output: &OutputFormatter) {
    output.info(&format!("Ticket: {}", ticket.title));
    output.info(&format!("  ID: {}", ticket.id));
    output.info(&format!("  Status: {}", ticket.status));
    output.info(&format!("  Priority: {}", ticket.priority));
    output.info(&format!("  Category: {}", ticket.category));
    output.info(&format!("  Requester: {}", ticket.requester));
    if let Some(email) = &ticket.email {
        output.info(&format!("  Email: {email}"));
    }
    output.info(&format!("  Assigned to: {}", ticket.assignee_label()));
    output.info(&format!(
        "  Created: {}",
        format_datetime(ticket.created_at)
    ));
    output.info("");
    output.info(&ticket.description);
}
