//! The ticket store
//!
//! [`TicketStore`] owns the authoritative, ordered ticket collection and
//! the persistence collaborator it writes through. All mutation goes
//! through the store; readers get immutable views. The collection is
//! persisted in full after every mutation and loaded once at startup.

use crate::core::{Status, Ticket, TicketDraft, TicketId};
use crate::error::{DeskTicketError, Result};
use crate::storage::TicketRepository;
use std::collections::HashSet;

/// Owns the ticket collection, most recent first
pub struct TicketStore<R: TicketRepository> {
    repository: R,
    tickets: Vec<Ticket>,
}

impl<R: TicketRepository> TicketStore<R> {
    /// Open the store, loading any persisted collection
    ///
    /// An absent snapshot starts the store empty. A snapshot that exists
    /// but cannot be parsed also starts the store empty: corruption is
    /// logged and recovered from, never fatal.
    pub fn open(repository: R) -> Self {
        let tickets = match repository.load_all() {
            Ok(tickets) => tickets,
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored tickets, starting empty");
                Vec::new()
            },
        };

        Self {
            repository,
            tickets,
        }
    }

    /// Validate a draft and admit it as a new ticket
    ///
    /// The new ticket gets a fresh id and timestamp and goes to the
    /// front of the collection (most-recent-first). The collection is
    /// persisted before the record is returned. On validation failure
    /// the collection is unchanged.
    pub fn create(&mut self, draft: TicketDraft) -> Result<Ticket> {
        draft.validate()?;

        let ticket = draft.into_ticket();
        self.tickets.insert(0, ticket.clone());
        self.persist()?;

        tracing::debug!(id = %ticket.id, title = %ticket.title, "created ticket");
        Ok(ticket)
    }

    /// Overwrite the status of the ticket with the given id
    ///
    /// Returns `Ok(true)` when a ticket was updated and persisted,
    /// `Ok(false)` when no ticket has that id (nothing is mutated or
    /// persisted).
    pub fn set_status(&mut self, id: TicketId, status: Status) -> Result<bool> {
        let Some(ticket) = self.tickets.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };

        ticket.status = status;
        self.persist()?;

        tracing::debug!(id = %id, status = %status, "updated ticket status");
        Ok(true)
    }

    /// Remove the ticket with the given id
    ///
    /// Idempotent: returns `Ok(true)` when a ticket was removed,
    /// `Ok(false)` when no ticket has that id.
    pub fn remove(&mut self, id: TicketId) -> Result<bool> {
        let before = self.tickets.len();
        self.tickets.retain(|t| t.id != id);

        if self.tickets.len() == before {
            return Ok(false);
        }

        self.persist()?;
        tracing::debug!(id = %id, "deleted ticket");
        Ok(true)
    }

    /// Admit a batch of already-built tickets (the import path)
    ///
    /// Rejects the whole batch if any id duplicates another batch entry
    /// or an existing ticket. Batch order is preserved, ahead of the
    /// existing collection, and persisted once.
    pub fn import(&mut self, batch: Vec<Ticket>) -> Result<usize> {
        let mut seen: HashSet<TicketId> = self.tickets.iter().map(|t| t.id).collect();
        for ticket in &batch {
            if !seen.insert(ticket.id) {
                return Err(DeskTicketError::DuplicateTicket {
                    id: ticket.id.to_string(),
                });
            }
        }

        let count = batch.len();
        self.tickets.splice(0..0, batch);
        self.persist()?;

        tracing::debug!(count, "imported tickets");
        Ok(count)
    }

    /// Read-only snapshot of the collection, insertion order preserved
    #[must_use]
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Look up a single ticket by id
    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Number of tickets in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.repository.save_all(&self.tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, TicketBuilder};
    use crate::storage::FileStorage;
    use crate::test_utils::{create_test_ticket, sample_draft};
    use mockall::mock;
    use mockall::predicate::always;
    use tempfile::TempDir;

    mock! {
        Repo {}

        impl TicketRepository for Repo {
            fn save_all(&self, tickets: &[Ticket]) -> Result<()>;
            fn load_all(&self) -> Result<Vec<Ticket>>;
        }
    }

    fn empty_store_with_saves(expected_saves: usize) -> TicketStore<MockRepo> {
        let mut repo = MockRepo::new();
        repo.expect_load_all().times(1).returning(|| Ok(Vec::new()));
        repo.expect_save_all()
            .with(always())
            .times(expected_saves)
            .returning(|_| Ok(()));
        TicketStore::open(repo)
    }

    #[test]
    fn create_prepends_and_persists() {
        let mut store = empty_store_with_saves(2);

        let first = store.create(sample_draft()).unwrap();
        let mut second_draft = sample_draft();
        second_draft.title = "VPN flaky".to_string();
        let second = store.create(second_draft).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.all()[0].id, second.id);
        assert_eq!(store.all()[1].id, first.id);
    }

    #[test]
    fn invalid_draft_leaves_collection_unchanged_and_unsaved() {
        // Zero expected saves: validation failure must not persist.
        let mut store = empty_store_with_saves(0);

        let draft = TicketDraft {
            requester: "Alice".to_string(),
            ..TicketDraft::default()
        };
        assert!(store.create(draft).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn set_status_overwrites_and_persists() {
        // One save for the create plus one per status change
        let mut store = empty_store_with_saves(1 + Status::ALL.len());
        let ticket = store.create(sample_draft()).unwrap();

        for status in Status::ALL {
            assert!(store.set_status(ticket.id, status).unwrap());
            assert_eq!(store.get(ticket.id).unwrap().status, status);
        }
    }

    #[test]
    fn set_status_on_missing_id_is_a_reported_noop() {
        let mut store = empty_store_with_saves(1);
        let ticket = store.create(sample_draft()).unwrap();

        let missing = TicketId::new();
        assert!(!store.set_status(missing, Status::Resolved).unwrap());
        assert_eq!(store.get(ticket.id).unwrap().status, Status::Open);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = empty_store_with_saves(2);
        let ticket = store.create(sample_draft()).unwrap();

        assert!(store.remove(ticket.id).unwrap());
        assert!(store.is_empty());
        // Second delete of the same id: no-op, no extra persist
        assert!(!store.remove(ticket.id).unwrap());
    }

    #[test]
    fn import_rejects_duplicate_ids() {
        let mut store = empty_store_with_saves(1);
        let existing = store.create(sample_draft()).unwrap();

        let clash = TicketBuilder::new()
            .id(existing.id)
            .title("Impostor")
            .requester("Mallory")
            .description("same id")
            .build();

        assert!(matches!(
            store.import(vec![clash]),
            Err(DeskTicketError::DuplicateTicket { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn import_admits_batch_in_order() {
        let mut store = empty_store_with_saves(1);

        let a = create_test_ticket("First", "Alice", Priority::Low, Status::Open);
        let b = create_test_ticket("Second", "Bob", Priority::High, Status::Resolved);
        let count = store.import(vec![a.clone(), b.clone()]).unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.all()[0].id, a.id);
        assert_eq!(store.all()[1].id, b.id);
    }

    #[test]
    fn open_recovers_from_corrupt_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        std::fs::create_dir_all(storage.root()).unwrap();
        std::fs::write(storage.tickets_path(), "[{broken").unwrap();

        let store = TicketStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn reopen_reads_back_what_was_written() {
        let temp_dir = TempDir::new().unwrap();

        let created = {
            let mut store = TicketStore::open(FileStorage::new(temp_dir.path()));
            store.create(sample_draft()).unwrap()
        };

        let reopened = TicketStore::open(FileStorage::new(temp_dir.path()));
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.all()[0], created);
    }
}
