//! Handler for the `stats` command
//!
//! Renders the summary counts over the full, unfiltered collection.

use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::Statistics;
use crate::error::Result;
use std::path::Path;

/// Handle the `stats` command
pub fn handle_stats_command(data_dir: Option<&Path>, output: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::new(data_dir)?;
    let stats = Statistics::of(context.store.all());

    if output.is_json() {
        return output.print_json(&stats);
    }

    output.info("Ticket summary:");
    output.info(&format!("  Total: {}", stats.total));
    output.info(&format!("  Open: {}", stats.open));
    output.info(&format!("  In Progress: {}", stats.in_progress));
    output.info(&format!("  Resolved: {}", stats.resolved));

    Ok(())
}
