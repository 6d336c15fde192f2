use crate::core::Ticket;
use crate::error::Result;

/// Repository trait for ticket persistence
///
/// This trait defines the interface the store persists through, allowing
/// for different storage implementations. The whole collection travels
/// as one unit: `save_all` replaces the stored snapshot, `load_all`
/// reads it back.
pub trait TicketRepository: Send + Sync {
    /// Persist the full collection, replacing any previous snapshot
    fn save_all(&self, tickets: &[Ticket]) -> Result<()>;

    /// Load the full collection
    ///
    /// An absent snapshot is not an error and yields an empty
    /// collection; a snapshot that exists but cannot be parsed is.
    fn load_all(&self) -> Result<Vec<Ticket>>;
}
