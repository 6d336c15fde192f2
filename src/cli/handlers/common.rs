use crate::cli::utils::{config_path, resolve_data_dir};
use crate::config::Config;
use crate::error::Result;
use crate::storage::FileStorage;
use crate::store::TicketStore;
use std::path::Path;

/// Common context for all handler operations
///
/// Loads the config, resolves the data directory and opens the store.
/// One context per command invocation; the store it owns is the single
/// writer for the lifetime of the process, and each command runs to
/// completion before the process exits.
pub struct HandlerContext {
    pub store: TicketStore<FileStorage>,
    pub config: Config,
}

impl HandlerContext {
    /// Create a new handler context
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        // No resolvable config dir (e.g. stripped-down CI) just means
        // no config file; the explicit --data-dir still works.
        let config = match config_path() {
            Ok(path) => Config::load_or_default(&path)?,
            Err(_) => Config::default(),
        };
        let data_dir = resolve_data_dir(data_dir, &config)?;
        let store = TicketStore::open(FileStorage::new(data_dir));

        Ok(Self { store, config })
    }
}
