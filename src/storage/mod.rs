//! Persistence layer
//!
//! The collection is persisted as a single serialized blob: every
//! mutation rewrites the whole thing, and startup reads it back once.
//! [`TicketRepository`] is the seam the store talks through;
//! [`FileStorage`] is the on-disk implementation.

mod file;
mod repository;

pub use file::FileStorage;
pub use repository::TicketRepository;
