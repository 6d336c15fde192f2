//! Handler for the `status` command
//!
//! The set-status intent: overwrite a ticket's status with one of the
//! three closed-set values. A reference that resolves to no ticket is a
//! lookup error; a resolved id that has since vanished is reported as a
//! no-op, matching the store's contract.

use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::{resolve_ticket_ref, short_id};
use crate::core::Status;
use crate::error::Result;
use std::path::Path;

/// Handle the `status` command
///
/// # Errors
///
/// Returns an error if the status string is outside the closed set, if
/// the reference doesn't resolve, or if persistence fails.
pub fn handle_status_command(
    ticket_ref: &str,
    new_status: &str,
    data_dir: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    // Parse before touching the store: an invalid status never mutates
    let status: Status = new_status.parse()?;

    let mut context = HandlerContext::new(data_dir)?;
    let id = resolve_ticket_ref(context.store.all(), ticket_ref)?;

    let changed = context.store.set_status(id, status)?;
    if !changed {
        output.warning(&format!("Ticket {} no longer exists", short_id(id)));
        return Ok(());
    }

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "ticket": id.to_string(),
            "new_status": status,
        }))?;
    } else {
        output.success(&format!("Ticket {} is now {}", short_id(id), status));
    }

    Ok(())
}
