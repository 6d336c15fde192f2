//! Ticket status
//!
//! Status is a closed set: a ticket is always in exactly one of the
//! three states below, and no other value can be represented. Parsing
//! rejects anything outside the set rather than carrying it along.

use crate::error::DeskTicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a ticket
///
/// Transitions are unrestricted: any status may move directly to any
/// other, driven solely by explicit user action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Newly created, nobody working on it yet
    #[default]
    Open,
    /// Someone is actively working on it
    #[serde(rename = "In Progress")]
    InProgress,
    /// The request has been dealt with
    Resolved,
}

impl Status {
    /// All statuses, in display order
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Resolved];

    /// Stable machine-friendly name (used for CLI arguments)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Status {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in-progress" | "in_progress" | "in progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(DeskTicketError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_spellings_of_in_progress() {
        for spelling in ["in-progress", "In Progress", "IN_PROGRESS", "inprogress"] {
            assert_eq!(spelling.parse::<Status>().unwrap(), Status::InProgress);
        }
    }

    #[test]
    fn rejects_values_outside_the_set() {
        assert!("closed".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
        assert!("Open;DROP".parse::<Status>().is_err());
    }

    #[test]
    fn default_is_open() {
        assert_eq!(Status::default(), Status::Open);
    }

    #[test]
    fn serde_uses_display_spellings() {
        // The stored form must match the display spelling, so an
        // existing collection reads back verbatim.
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::from_str::<Status>("\"Resolved\"").unwrap(),
            Status::Resolved
        );
    }
}
