//! Shared helpers for the CLI handlers

use crate::config::Config;
use crate::core::{Ticket, TicketId};
use crate::error::{DeskTicketError, Result};
use chrono::{DateTime, Local, Utc};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Path to the user's config file
pub fn config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "desk-ticket").ok_or(DeskTicketError::NoDataDir)?;
    Ok(dirs.config_dir().join("config.yaml"))
}

/// Resolve the data directory for this invocation
///
/// Precedence: `--data-dir` flag, then the config file override, then
/// the per-user data directory.
pub fn resolve_data_dir(cli_override: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = cli_override {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &config.data_dir {
        return Ok(dir.clone());
    }

    let dirs = ProjectDirs::from("", "", "desk-ticket").ok_or(DeskTicketError::NoDataDir)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve a user-typed ticket reference to an id
///
/// Accepts a full UUID or a unique prefix of one. A prefix matching
/// more than one ticket is an error rather than a guess.
pub fn resolve_ticket_ref(tickets: &[Ticket], reference: &str) -> Result<TicketId> {
    let reference = reference.trim();

    if let Ok(uuid) = Uuid::parse_str(reference) {
        let id = TicketId::from_uuid(uuid);
        if tickets.iter().any(|t| t.id == id) {
            return Ok(id);
        }
        return Err(DeskTicketError::TicketNotFound {
            reference: reference.to_string(),
        });
    }

    let reference_lower = reference.to_lowercase();
    let matches: Vec<TicketId> = tickets
        .iter()
        .filter(|t| t.id.to_string().starts_with(&reference_lower))
        .map(|t| t.id)
        .collect();

    match matches.as_slice() {
        [] => Err(DeskTicketError::TicketNotFound {
            reference: reference.to_string(),
        }),
        [id] => Ok(*id),
        _ => Err(DeskTicketError::AmbiguousTicketRef {
            reference: reference.to_string(),
        }),
    }
}

/// Parse an optional status/priority-style filter argument
///
/// `None` and the literal `all` both mean "no filter".
pub fn parse_filter_arg<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = DeskTicketError>,
{
    match value {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

/// Short display form of a ticket id
#[must_use]
pub fn short_id(id: TicketId) -> String {
    let full = id.to_string();
    full.chars().take(8).collect()
}

/// Format a timestamp for display in the local timezone
#[must_use]
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, Status};
    use crate::test_utils::create_test_ticket;

    #[test]
    fn resolves_full_uuid_and_prefix() {
        let tickets = vec![
            create_test_ticket("Printer down", "Alice", Priority::High, Status::Open),
            create_test_ticket("VPN flaky", "Bob", Priority::Low, Status::Open),
        ];
        let id = tickets[0].id;

        assert_eq!(resolve_ticket_ref(&tickets, &id.to_string()).unwrap(), id);
        assert_eq!(resolve_ticket_ref(&tickets, &short_id(id)).unwrap(), id);
    }

    #[test]
    fn unknown_reference_is_not_found() {
        let tickets = vec![create_test_ticket(
            "Printer down",
            "Alice",
            Priority::High,
            Status::Open,
        )];
        assert!(matches!(
            resolve_ticket_ref(&tickets, "zzzzzz"),
            Err(DeskTicketError::TicketNotFound { .. })
        ));
    }

    #[test]
    fn empty_prefix_on_multiple_tickets_is_ambiguous() {
        let tickets = vec![
            create_test_ticket("A", "a", Priority::Low, Status::Open),
            create_test_ticket("B", "b", Priority::Low, Status::Open),
        ];
        assert!(matches!(
            resolve_ticket_ref(&tickets, ""),
            Err(DeskTicketError::AmbiguousTicketRef { .. })
        ));
    }

    #[test]
    fn all_is_the_wildcard_filter() {
        assert_eq!(parse_filter_arg::<Status>(None).unwrap(), None);
        assert_eq!(parse_filter_arg::<Status>(Some("All")).unwrap(), None);
        assert_eq!(
            parse_filter_arg::<Status>(Some("resolved")).unwrap(),
            Some(Status::Resolved)
        );
        assert!(parse_filter_arg::<Status>(Some("bogus")).is_err());
    }
}
