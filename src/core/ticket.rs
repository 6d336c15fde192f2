//! The ticket record and its draft form

use super::{Category, Priority, Status};
use crate::error::{DeskTicketError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a ticket
///
/// Assigned once at creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a fresh unique id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an id from its string form
    pub fn parse_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DeskTicketError::ParseError(format!("invalid ticket id: {e}")))
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single help request record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, immutable
    pub id: TicketId,
    /// Short summary of the request
    pub title: String,
    /// Who asked for help
    pub requester: String,
    /// Contact address, if the requester left one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// What kind of request this is
    pub category: Category,
    /// How urgent the request is
    pub priority: Priority,
    /// Full description of the problem
    pub description: String,
    /// Who is working on it; `None` renders as "Unassigned"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Current lifecycle state
    pub status: Status,
    /// When the ticket was created, immutable
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Display name for the assignee column
    #[must_use]
    pub fn assignee_label(&self) -> &str {
        self.assignee.as_deref().unwrap_or("Unassigned")
    }
}

/// Form-shaped input for creating a ticket
///
/// Free-text fields arrive as typed by the user; the two selects arrive
/// already parsed (or absent). [`TicketDraft::validate`] is the single
/// gate a draft must pass before the store admits it.
#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub title: String,
    pub requester: String,
    pub email: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub description: String,
    pub assignee: Option<String>,
}

impl TicketDraft {
    /// Check that every required field is present and non-blank
    ///
    /// Returns a single [`DeskTicketError::ValidationFailed`] naming all
    /// missing fields at once, so the user fixes the form in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();

        if self.title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if self.requester.trim().is_empty() {
            missing.push("requester".to_string());
        }
        if self.category.is_none() {
            missing.push("category".to_string());
        }
        if self.priority.is_none() {
            missing.push("priority".to_string());
        }
        if self.description.trim().is_empty() {
            missing.push("description".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DeskTicketError::ValidationFailed { fields: missing })
        }
    }

    /// Turn a validated draft into a ticket with a fresh id and timestamp
    ///
    /// Text fields are trimmed; blank optional fields collapse to `None`.
    /// Callers must run [`validate`](Self::validate) first — the
    /// unwrapped selects rely on it.
    pub(crate) fn into_ticket(self) -> Ticket {
        Ticket {
            id: TicketId::new(),
            title: self.title.trim().to_string(),
            requester: self.requester.trim().to_string(),
            email: normalize_optional(self.email),
            category: self.category.unwrap_or(Category::Other),
            priority: self.priority.unwrap_or_default(),
            description: self.description.trim().to_string(),
            assignee: normalize_optional(self.assignee),
            status: Status::Open,
            created_at: Utc::now(),
        }
    }
}

/// Collapse blank or absent optional text to `None`
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
