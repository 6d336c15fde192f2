//! File-backed ticket storage
//!
//! Tickets live in a single JSON file, `tickets.json`, inside the data
//! directory. The whole collection is rewritten on every save and read
//! once at startup, mirroring the one-key/one-blob model the store
//! expects.

use super::TicketRepository;
use crate::core::Ticket;
use crate::error::{DeskTicketError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the snapshot file inside the data directory
const TICKETS_FILE: &str = "tickets.json";

/// Stores the ticket collection as one JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at the given data directory
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path to the data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the snapshot file
    #[must_use]
    pub fn tickets_path(&self) -> PathBuf {
        self.root.join(TICKETS_FILE)
    }

    fn write_snapshot(&self, tickets: &[Ticket]) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| DeskTicketError::FileError {
            path: self.root.clone(),
            source: e,
        })?;

        let json = serde_json::to_string_pretty(tickets)
            .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;

        let path = self.tickets_path();
        fs::write(&path, json).map_err(|e| DeskTicketError::FileError { path, source: e })?;

        tracing::debug!(count = tickets.len(), "persisted ticket snapshot");
        Ok(())
    }

    fn read_snapshot(&self) -> Result<Vec<Ticket>> {
        let path = self.tickets_path();
        if !path.exists() {
            // First run: nothing stored yet
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| DeskTicketError::FileError { path, source: e })?;
        serde_json::from_str(&content)
            .map_err(|e| DeskTicketError::ParseError(format!("stored tickets unreadable: {e}")))
    }
}

impl TicketRepository for FileStorage {
    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        self.write_snapshot(tickets)
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.read_snapshot()
    }
}
