//! Handler for the `import` command

use super::HandlerContext;
use super::interchange::{DataFormat, validate_batch};
use crate::cli::output::OutputFormatter;
use crate::error::{DeskTicketError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle the `import` command
///
/// Reads a batch of tickets, validates it in full (required fields,
/// unique ids) and admits it to the store. `--dry-run` stops after
/// validation and reports what would happen.
pub fn handle_import_command(
    file: &PathBuf,
    format: Option<&str>,
    dry_run: bool,
    data_dir: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let content = fs::read_to_string(file).map_err(|e| DeskTicketError::FileError {
        path: file.clone(),
        source: e,
    })?;

    let format = match format {
        Some(name) => DataFormat::parse(name)?,
        None => DataFormat::detect(&content)?,
    };

    let batch = format.parse_tickets(&content)?;
    validate_batch(&batch)?;

    if dry_run {
        output.info(&format!(
            "Dry run: {} ticket(s) would be imported from {}",
            batch.len(),
            file.display()
        ));
        return Ok(());
    }

    let mut context = HandlerContext::new(data_dir)?;
    let count = context.store.import(batch)?;

    if output.is_json() {
        output.print_json(&serde_json::json!({
            "status": "success",
            "imported": count,
        }))?;
    } else {
        output.success(&format!("Imported {count} ticket(s)"));
    }

    Ok(())
}
