//! User configuration
//!
//! A small optional `config.yaml` holding form defaults and a storage
//! location override. Absence is the normal case; anything missing
//! falls back to defaults and nothing here is ever fatal.

use crate::core::Priority;
use crate::error::{DeskTicketError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for desk-ticket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Assignee applied to new tickets when the form leaves it blank
    pub default_assignee: Option<String>,
    /// Priority preselected in the interactive form
    pub default_priority: Option<Priority>,
    /// Overrides the per-user data directory
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the given file, or defaults if absent
    ///
    /// A file that exists but cannot be parsed is an error: silently
    /// ignoring a config the user wrote would be worse than stopping.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DeskTicketError::FileError {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| DeskTicketError::ParseError(format!("invalid config file: {e}")))
    }

    /// Write configuration to the given file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DeskTicketError::FileError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;
        fs::write(path, content).map_err(|e| DeskTicketError::FileError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absent_config_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&temp_dir.path().join("config.yaml")).unwrap();
        assert!(config.default_assignee.is_none());
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn config_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let config = Config {
            default_assignee: Some("it-team".to_string()),
            default_priority: Some(Priority::High),
            data_dir: Some(temp_dir.path().join("tickets")),
        };
        config.save(&path).unwrap();

        let loaded = Config::load_or_default(&path).unwrap();
        assert_eq!(loaded.default_assignee.as_deref(), Some("it-team"));
        assert_eq!(loaded.default_priority, Some(Priority::High));
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, ": not yaml : [").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }
}
