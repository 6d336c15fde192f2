//! Error types for desk-ticket
//!
//! All fallible operations in the crate return [`Result`], which wraps
//! [`DeskTicketError`]. Errors carry enough context to build the
//! user-facing message and recovery suggestions shown by the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, DeskTicketError>;

/// All errors that can occur in desk-ticket
#[derive(Debug, Error)]
pub enum DeskTicketError {
    /// A ticket draft failed validation
    #[error("validation failed: missing required field(s): {}", fields.join(", "))]
    ValidationFailed {
        /// Names of the required fields that were blank after trimming
        fields: Vec<String>,
    },

    /// No ticket matched the given reference
    #[error("ticket not found: '{reference}'")]
    TicketNotFound { reference: String },

    /// More than one ticket matched an id prefix
    #[error("ambiguous ticket reference: '{reference}' matches multiple tickets")]
    AmbiguousTicketRef { reference: String },

    /// A status value outside the closed set was given
    #[error("invalid status: '{value}' (expected: open, in-progress, resolved)")]
    InvalidStatus { value: String },

    /// A priority value outside the closed set was given
    #[error("invalid priority: '{value}' (expected: low, medium, high, urgent)")]
    InvalidPriority { value: String },

    /// A category value outside the closed set was given
    #[error("invalid category: '{value}' (expected: hardware, software, network, access, other)")]
    InvalidCategory { value: String },

    /// An unsupported import/export format was requested
    #[error("invalid format: '{value}' (expected: json, yaml, csv)")]
    InvalidFormat { value: String },

    /// An import batch contained a ticket id that already exists
    #[error("duplicate ticket id: {id}")]
    DuplicateTicket { id: String },

    /// Stored or imported data could not be parsed
    #[error("failed to parse data: {0}")]
    ParseError(String),

    /// Data could not be serialized for persistence or export
    #[error("failed to serialize data: {0}")]
    SerializationError(String),

    /// The data directory could not be determined
    #[error("could not determine a data directory for ticket storage")]
    NoDataDir,

    /// A file could not be read or written
    #[error("file operation failed on {}: {source}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("prompt error: {0}")]
    Dialog(#[from] dialoguer::Error),

    /// Invalid user input that doesn't fit a more specific variant
    #[error("{0}")]
    InvalidInput(String),
}

impl DeskTicketError {
    /// Create an `InvalidInput` error from any displayable message
    pub fn custom(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// The message shown to the user for this error
    ///
    /// Kept separate from the `Display` impl so the CLI can show a
    /// friendlier phrasing than what ends up in logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::ValidationFailed { fields } => {
                format!(
                    "Please fill in all required fields. Missing: {}",
                    fields.join(", ")
                )
            },
            Self::TicketNotFound { reference } => {
                format!("No ticket matches '{reference}'")
            },
            Self::AmbiguousTicketRef { reference } => {
                format!("'{reference}' matches more than one ticket")
            },
            _ => self.to_string(),
        }
    }

    /// Suggestions for resolving this error, shown under the message
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { .. } => vec![
                "Pass the missing fields as flags, e.g. --title, --requester, --description"
                    .to_string(),
                "Run `desk-ticket new --interactive` to be prompted for every field".to_string(),
            ],
            Self::TicketNotFound { .. } => vec![
                "Run `desk-ticket list` to see ticket ids".to_string(),
                "A unique prefix of the id is enough".to_string(),
            ],
            Self::AmbiguousTicketRef { .. } => {
                vec!["Use more characters of the id to disambiguate".to_string()]
            },
            Self::InvalidStatus { .. } => {
                vec!["Valid statuses: open, in-progress, resolved".to_string()]
            },
            Self::InvalidPriority { .. } => {
                vec!["Valid priorities: low, medium, high, urgent".to_string()]
            },
            Self::InvalidCategory { .. } => {
                vec!["Valid categories: hardware, software, network, access, other".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether the user can recover by adjusting their input and retrying
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed { .. }
                | Self::TicketNotFound { .. }
                | Self::AmbiguousTicketRef { .. }
                | Self::InvalidStatus { .. }
                | Self::InvalidPriority { .. }
                | Self::InvalidCategory { .. }
                | Self::InvalidFormat { .. }
                | Self::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_missing_fields() {
        let err = DeskTicketError::ValidationFailed {
            fields: vec!["title".to_string(), "requester".to_string()],
        };
        let msg = err.user_message();
        assert!(msg.contains("title"));
        assert!(msg.contains("requester"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn io_errors_are_not_recoverable() {
        let err = DeskTicketError::Io(std::io::Error::other("disk on fire"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn not_found_suggests_listing() {
        let err = DeskTicketError::TicketNotFound {
            reference: "abc".to_string(),
        };
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("desk-ticket list"))
        );
    }
}
