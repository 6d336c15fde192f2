//! desk-ticket - A local-first helpdesk ticket tracker for the terminal
//!
//! This crate provides a small ticket tracking system:
//! - A validated ticket model with closed status/priority/category sets
//! - A store owning the ordered collection, persisting after every change
//! - Pure filtering and summary statistics over the collection
//! - A CLI front end with an interactive form and JSON/YAML/CSV interchange
//!
//! # Example
//!
//! ```rust,ignore
//! use desk_ticket::core::{Category, Priority, TicketDraft};
//! use desk_ticket::storage::FileStorage;
//! use desk_ticket::store::TicketStore;
//!
//! let mut store = TicketStore::open(FileStorage::new(".desk-ticket"));
//! let ticket = store.create(TicketDraft {
//!     title: "Printer down".into(),
//!     requester: "Alice".into(),
//!     category: Some(Category::Hardware),
//!     priority: Some(Priority::High),
//!     description: "Paper jam on floor 3".into(),
//!     ..TicketDraft::default()
//! })?;
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod storage;
pub mod store;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{DeskTicketError, Result};
