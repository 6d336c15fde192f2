//! Pure filtering and statistics over the ticket collection
//!
//! Nothing here mutates anything: the filter computes the visible subset
//! for the current search/status/priority selection, and the statistics
//! summarize the full, unfiltered collection.

use super::{Priority, Status, Ticket};
use serde::Serialize;

/// The visible-subset predicate
///
/// All three criteria are ANDed. `None` for status or priority is the
/// "all" wildcard; an empty or absent search term matches everything.
/// Applying the filter preserves the input order.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    /// Case-insensitive substring matched against title or requester
    pub search: Option<String>,
    /// Exact status to keep, or `None` for all
    pub status: Option<Status>,
    /// Exact priority to keep, or `None` for all
    pub priority: Option<Priority>,
}

impl TicketFilter {
    /// Filter that matches every ticket
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Compute the visible subset of `tickets`, preserving order
    #[must_use]
    pub fn apply<'a>(&self, tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
        tickets.iter().filter(|t| self.matches(t)).collect()
    }

    /// Check whether a single ticket passes all three predicates
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                ticket.title.to_lowercase().contains(&term)
                    || ticket.requester.to_lowercase().contains(&term)
            },
        }
    }
}

/// Aggregate counts over the full collection
///
/// Always computed over the unfiltered collection, so the summary stays
/// stable while the user narrows the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl Statistics {
    /// Count tickets per status
    #[must_use]
    pub fn of(tickets: &[Ticket]) -> Self {
        let mut stats = Self {
            total: tickets.len(),
            open: 0,
            in_progress: 0,
            resolved: 0,
        };

        for ticket in tickets {
            match ticket.status {
                Status::Open => stats.open += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Resolved => stats.resolved += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;
    use crate::test_utils::create_test_ticket;

    fn sample_collection() -> Vec<Ticket> {
        vec![
            create_test_ticket("Printer down", "Alice", Priority::High, Status::Open),
            create_test_ticket("VPN flaky", "Bob", Priority::Medium, Status::InProgress),
            create_test_ticket("Password reset", "alice b", Priority::Low, Status::Resolved),
        ]
    }

    #[test]
    fn identity_filter_returns_everything_in_order() {
        let tickets = sample_collection();
        let visible = TicketFilter::all().apply(&tickets);
        assert_eq!(visible.len(), tickets.len());
        for (seen, expected) in visible.iter().zip(&tickets) {
            assert_eq!(seen.id, expected.id);
        }
    }

    #[test]
    fn search_matches_title_or_requester_case_insensitively() {
        let tickets = sample_collection();

        let by_requester = TicketFilter {
            search: Some("ALICE".to_string()),
            ..TicketFilter::default()
        };
        assert_eq!(by_requester.apply(&tickets).len(), 2);

        let by_title = TicketFilter {
            search: Some("printer".to_string()),
            ..TicketFilter::default()
        };
        let visible = by_title.apply(&tickets);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Printer down");
    }

    #[test]
    fn predicates_are_anded() {
        let tickets = sample_collection();
        let filter = TicketFilter {
            search: Some("printer".to_string()),
            status: Some(Status::Resolved),
            priority: None,
        };
        assert!(filter.apply(&tickets).is_empty());
    }

    #[test]
    fn status_and_priority_filter_exactly() {
        let tickets = sample_collection();
        let filter = TicketFilter {
            search: None,
            status: Some(Status::InProgress),
            priority: Some(Priority::Medium),
        };
        let visible = filter.apply(&tickets);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].requester, "Bob");
    }

    #[test]
    fn blank_search_matches_everything() {
        let tickets = sample_collection();
        let filter = TicketFilter {
            search: Some("   ".to_string()),
            ..TicketFilter::default()
        };
        assert_eq!(filter.apply(&tickets).len(), tickets.len());
    }

    #[test]
    fn statistics_partition_the_collection() {
        let tickets = sample_collection();
        let stats = Statistics::of(&tickets);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.open + stats.in_progress + stats.resolved, stats.total);
    }

    #[test]
    fn statistics_of_empty_collection() {
        let stats = Statistics::of(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.open + stats.in_progress + stats.resolved, 0);
    }

    #[test]
    fn search_and_status_compose_on_a_single_ticket() {
        let mut ticket =
            create_test_ticket("Printer down", "Alice", Priority::High, Status::Open);
        ticket.category = Category::Hardware;
        let tickets = vec![ticket];

        let by_name = TicketFilter {
            search: Some("alice".to_string()),
            ..TicketFilter::default()
        };
        assert_eq!(by_name.apply(&tickets).len(), 1);

        let resolved_printers = TicketFilter {
            search: Some("printer".to_string()),
            status: Some(Status::Resolved),
            priority: None,
        };
        assert!(resolved_printers.apply(&tickets).is_empty());
    }
}
