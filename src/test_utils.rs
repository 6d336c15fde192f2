//! Test utilities for desk-ticket
//!
//! Common fixtures shared by unit tests across the crate.

#![cfg(test)]

use crate::core::{Category, Priority, Status, Ticket, TicketBuilder, TicketDraft};
use crate::storage::FileStorage;
use crate::store::TicketStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture wrapping a temporary data directory
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
}

impl TestWorkspace {
    /// Create a workspace with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("desk-ticket");
        Self { temp_dir, data_dir }
    }

    /// Open a store over this workspace's data directory
    pub fn open_store(&self) -> TicketStore<FileStorage> {
        TicketStore::open(FileStorage::new(&self.data_dir))
    }

    /// Create a workspace whose store already holds sample tickets
    pub fn with_sample_tickets() -> Self {
        let workspace = Self::new();
        let mut store = workspace.open_store();

        let drafts = [
            ("Printer down", "Alice", Priority::High),
            ("VPN flaky", "Bob", Priority::Medium),
            ("Password reset", "Carol", Priority::Low),
        ];
        for (title, requester, priority) in drafts {
            let mut draft = sample_draft();
            draft.title = title.to_string();
            draft.requester = requester.to_string();
            draft.priority = Some(priority);
            store.create(draft).expect("Failed to create ticket");
        }

        workspace
    }
}

/// A draft that passes validation
pub fn sample_draft() -> TicketDraft {
    TicketDraft {
        title: "Printer down".to_string(),
        requester: "Alice".to_string(),
        email: Some("alice@example.com".to_string()),
        category: Some(Category::Hardware),
        priority: Some(Priority::High),
        description: "The 3rd floor printer is jammed".to_string(),
        assignee: None,
    }
}

/// Create a test ticket with the given display fields
pub fn create_test_ticket(
    title: &str,
    requester: &str,
    priority: Priority,
    status: Status,
) -> Ticket {
    TicketBuilder::new()
        .title(title)
        .requester(requester)
        .email(format!(
            "{}@example.com",
            requester.to_lowercase().replace(' ', ".")
        ))
        .category(Category::Software)
        .priority(priority)
        .description(format!("Description for {title}"))
        .status(status)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_store_starts_empty() {
        let workspace = TestWorkspace::new();
        assert!(workspace.open_store().is_empty());
    }

    #[test]
    fn sample_tickets_survive_reopen() {
        let workspace = TestWorkspace::with_sample_tickets();
        let store = workspace.open_store();
        assert_eq!(store.len(), 3);
        // Creation prepends, so the last draft comes first
        assert_eq!(store.all()[0].title, "Password reset");
    }
}
