//! Handler for the `export` command

use super::HandlerContext;
use super::interchange::DataFormat;
use crate::cli::output::OutputFormatter;
use crate::error::{DeskTicketError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle the `export` command
///
/// Writes the full collection in the requested format to a file, or to
/// stdout when no output path is given.
pub fn handle_export_command(
    format: &str,
    output_path: Option<PathBuf>,
    data_dir: Option<&Path>,
    output: &OutputFormatter,
) -> Result<()> {
    let format = DataFormat::parse(format)?;
    let context = HandlerContext::new(data_dir)?;

    let content = format.export_tickets(context.store.all())?;
    let count = context.store.len();

    match output_path {
        Some(path) => {
            fs::write(&path, content).map_err(|e| DeskTicketError::FileError {
                path: path.clone(),
                source: e,
            })?;
            output.success(&format!(
                "Exported {count} ticket(s) to {}",
                path.display()
            ));
        },
        None => {
            // Raw payload on stdout, even in --json mode
            println!("{content}");
        },
    }

    Ok(())
}
