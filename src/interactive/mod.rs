//! Interactive ticket form
//!
//! Walks the user through the same fields the ticket form asks for:
//! title, requester, email, category, priority, description, assignee.
//! Selects only offer values from the closed sets, so what comes out of
//! the form never fails the enum side of validation.

use crate::config::Config;
use crate::core::{Category, Priority, TicketDraft};
use crate::error::Result;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Guided prompt sequence producing a ticket draft
pub struct TicketForm {
    theme: ColorfulTheme,
    default_priority: Priority,
}

impl TicketForm {
    /// Create a form, preselecting defaults from the config
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            default_priority: config.default_priority.unwrap_or_default(),
        }
    }

    /// Run every prompt and assemble the draft
    ///
    /// Required text prompts re-ask until non-empty; optional ones
    /// accept a blank answer. The draft still goes through
    /// [`TicketDraft::validate`] in the store.
    pub fn fill(&self) -> Result<TicketDraft> {
        println!("New helpdesk ticket\n");

        let title = self.text("Title", true)?;
        let requester = self.text("Requester", true)?;
        let email = self.text("Email (optional)", false)?;
        let category = self.select_category()?;
        let priority = self.select_priority()?;
        let description = self.text("Description", true)?;
        let assignee = self.text("Assignee (optional)", false)?;

        Ok(TicketDraft {
            title,
            requester,
            email: non_blank(email),
            category: Some(category),
            priority: Some(priority),
            description,
            assignee: non_blank(assignee),
        })
    }

    fn text(&self, prompt: &str, required: bool) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        let value = if required {
            input.interact()?
        } else {
            input.allow_empty(true).interact()?
        };
        Ok(value)
    }

    fn select_category(&self) -> Result<Category> {
        let labels: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Category::ALL[selection])
    }

    fn select_priority(&self) -> Result<Priority> {
        let labels: Vec<String> = Priority::ALL.iter().map(ToString::to_string).collect();
        let default = Priority::ALL
            .iter()
            .position(|p| *p == self.default_priority)
            .unwrap_or(1);
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Priority")
            .items(&labels)
            .default(default)
            .interact()?;
        Ok(Priority::ALL[selection])
    }
}

/// Collapse a blank answer to `None`
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_optional_answers_become_none() {
        assert_eq!(non_blank(String::new()), None);
        assert_eq!(non_blank("  ".to_string()), None);
        assert_eq!(non_blank(" bob ".to_string()), Some("bob".to_string()));
    }
}
