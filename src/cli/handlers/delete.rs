//! Handler for the `delete` command

use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::{resolve_ticket_ref, short_id};
use crate::error::Result;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::path::Path;

/// Handle the `delete` command
///
/// Asks for confirmation unless `--force` is given. Deleting is
/// idempotent at the store level; at the CLI level a reference that no
/// longer resolves is a lookup error, so the user learns the id was
/// wrong rather than silently succeeding.
pub fn handle_delete_command(
    ticket_ref: &str,
    force: bool,
    data_dir: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let mut context = HandlerContext::new(data_dir)?;
    let id = resolve_ticket_ref(context.store.all(), ticket_ref)?;

    // resolve_ticket_ref only returns ids present in the collection
    let title = context
        .store
        .get(id)
        .map(|t| t.title.clone())
        .unwrap_or_default();

    if !force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete ticket '{title}'?"))
            .default(false)
            .interact()?;
        if !confirmed {
            output.info("Aborted.");
            return Ok(());
        }
    }

    let removed = context.store.remove(id)?;
    if !removed {
        output.warning(&format!("Ticket {} was already gone", short_id(id)));
        return Ok(());
    }

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "deleted": id.to_string(),
        }))?;
    } else {
        output.success(&format!("Deleted ticket '{title}' ({})", short_id(id)));
    }

    Ok(())
}
