//! Ticket category

use crate::error::DeskTicketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of help a ticket asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hardware,
    Software,
    Network,
    Access,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Self; 5] = [
        Self::Hardware,
        Self::Software,
        Self::Network,
        Self::Access,
        Self::Other,
    ];

    /// Stable machine-friendly name (used for CLI arguments)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hardware => "hardware",
            Self::Software => "software",
            Self::Network => "network",
            Self::Access => "access",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Hardware => "Hardware",
            Self::Software => "Software",
            Self::Network => "Network",
            Self::Access => "Access",
            Self::Other => "Other",
        };
        write!(f, "{label}")
    }
}

impl FromStr for Category {
    type Err = DeskTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hardware" => Ok(Self::Hardware),
            "software" => Ok(Self::Software),
            "network" => Ok(Self::Network),
            "access" => Ok(Self::Access),
            "other" => Ok(Self::Other),
            _ => Err(DeskTicketError::InvalidCategory {
                value: s.to_string(),
            }),
        }
    }
}
