use super::{Category, Priority, Status, Ticket, TicketId};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
///
/// Used by tests and the import path, where records arrive with their
/// ids and timestamps already decided. Interactive creation goes through
/// [`TicketDraft`](super::TicketDraft) instead, which validates input.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    title: Option<String>,
    requester: Option<String>,
    email: Option<String>,
    category: Option<Category>,
    priority: Option<Priority>,
    description: Option<String>,
    assignee: Option<String>,
    status: Option<Status>,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the requester
    #[must_use]
    pub fn requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = Some(requester.into());
        self
    }

    /// Set the contact email
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the category
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the assignee
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            requester: self.requester.unwrap_or_default(),
            email: self.email,
            category: self.category.unwrap_or(Category::Other),
            priority: self.priority.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            assignee: self.assignee,
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .title("Printer down")
            .requester("Alice")
            .category(Category::Hardware)
            .priority(Priority::High)
            .description("The 3rd floor printer is jammed")
            .build();

        assert_eq!(ticket.title, "Printer down");
        assert_eq!(ticket.requester, "Alice");
        assert_eq!(ticket.category, Category::Hardware);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.status, Status::Open);
        assert!(ticket.assignee.is_none());
    }

    #[test]
    fn test_builder_defaults() {
        let ticket = TicketBuilder::new().build();
        assert_eq!(ticket.priority, Priority::Medium);
        assert_eq!(ticket.category, Category::Other);
        assert_eq!(ticket.status, Status::Open);
    }
}
