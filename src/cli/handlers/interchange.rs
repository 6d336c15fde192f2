//! Format detection and conversion for import/export

use crate::core::{Ticket, TicketBuilder, TicketId};
use crate::error::{DeskTicketError, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashSet;

/// Supported data formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Csv,
}

impl DataFormat {
    /// Parse a format name from the CLI
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(DeskTicketError::InvalidFormat {
                value: name.to_string(),
            }),
        }
    }

    /// Detect format from content
    pub fn detect(content: &str) -> Result<Self> {
        let trimmed = content.trim();

        if (trimmed.starts_with('{') || trimmed.starts_with('['))
            && serde_json::from_str::<Value>(trimmed).is_ok()
        {
            return Ok(Self::Json);
        }

        // CSV before YAML: a header line is also valid YAML scalar soup
        if trimmed.lines().next().is_some_and(|l| l.contains(',')) {
            return Ok(Self::Csv);
        }

        if serde_yaml::from_str::<Value>(trimmed).is_ok() {
            return Ok(Self::Yaml);
        }

        Err(DeskTicketError::InvalidInput(
            "unable to detect format; content must be valid JSON, YAML, or CSV".to_string(),
        ))
    }

    /// Parse content into tickets
    pub fn parse_tickets(self, content: &str) -> Result<Vec<Ticket>> {
        match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| DeskTicketError::ParseError(format!("invalid JSON: {e}"))),
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| DeskTicketError::ParseError(format!("invalid YAML: {e}"))),
            Self::Csv => parse_csv(content),
        }
    }

    /// Serialize tickets for export
    pub fn export_tickets(self, tickets: &[Ticket]) -> Result<String> {
        match self {
            Self::Json => serde_json::to_string_pretty(tickets)
                .map_err(|e| DeskTicketError::SerializationError(e.to_string())),
            Self::Yaml => serde_yaml::to_string(tickets)
                .map_err(|e| DeskTicketError::SerializationError(e.to_string())),
            Self::Csv => export_csv(tickets),
        }
    }
}

const CSV_HEADER: [&str; 10] = [
    "id",
    "title",
    "requester",
    "email",
    "category",
    "priority",
    "description",
    "assignee",
    "status",
    "created_at",
];

/// Parse CSV content into tickets
fn parse_csv(content: &str) -> Result<Vec<Ticket>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let mut tickets = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| DeskTicketError::ParseError(format!("CSV error: {e}")))?;
        if record.len() < CSV_HEADER.len() {
            return Err(DeskTicketError::ParseError(format!(
                "CSV row has {} columns, expected {}",
                record.len(),
                CSV_HEADER.len()
            )));
        }

        let id = TicketId::parse_str(&record[0])?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&record[9])
            .map_err(|e| DeskTicketError::ParseError(format!("invalid created_at: {e}")))?
            .with_timezone(&Utc);

        let mut builder = TicketBuilder::new()
            .id(id)
            .title(&record[1])
            .requester(&record[2])
            .category(record[4].parse()?)
            .priority(record[5].parse()?)
            .description(&record[6])
            .status(record[8].parse()?)
            .created_at(created_at);

        if !record[3].is_empty() {
            builder = builder.email(&record[3]);
        }
        if !record[7].is_empty() {
            builder = builder.assignee(&record[7]);
        }

        tickets.push(builder.build());
    }

    Ok(tickets)
}

/// Export tickets to CSV
fn export_csv(tickets: &[Ticket]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| DeskTicketError::SerializationError(format!("CSV header: {e}")))?;

    for ticket in tickets {
        writer
            .write_record(&[
                ticket.id.to_string(),
                ticket.title.clone(),
                ticket.requester.clone(),
                ticket.email.clone().unwrap_or_default(),
                ticket.category.to_string(),
                ticket.priority.to_string(),
                ticket.description.clone(),
                ticket.assignee.clone().unwrap_or_default(),
                ticket.status.to_string(),
                ticket.created_at.to_rfc3339(),
            ])
            .map_err(|e| DeskTicketError::SerializationError(format!("CSV record: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| DeskTicketError::SerializationError(format!("CSV flush: {e}")))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| DeskTicketError::SerializationError(format!("CSV buffer: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| DeskTicketError::SerializationError(format!("CSV not UTF-8: {e}")))
}

/// Validate an import batch before it reaches the store
///
/// Checks the same invariants the store enforces (unique ids) plus the
/// creation-time field requirements, so a dry run reports everything
/// the real run would reject.
pub fn validate_batch(tickets: &[Ticket]) -> Result<()> {
    if tickets.is_empty() {
        return Err(DeskTicketError::InvalidInput(
            "no tickets found in import data".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for ticket in tickets {
        if !seen.insert(ticket.id) {
            return Err(DeskTicketError::DuplicateTicket {
                id: ticket.id.to_string(),
            });
        }

        let mut missing = Vec::new();
        if ticket.title.trim().is_empty() {
            missing.push("title".to_string());
        }
        if ticket.requester.trim().is_empty() {
            missing.push("requester".to_string());
        }
        if ticket.description.trim().is_empty() {
            missing.push("description".to_string());
        }
        if !missing.is_empty() {
            return Err(DeskTicketError::ValidationFailed { fields: missing });
        }
    }

    Ok(())
}
