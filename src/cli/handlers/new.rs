//! Handler for the `new` command
//!
//! Creates a ticket from command-line flags, or walks the full ticket
//! form interactively with `--interactive`. Validation is the store's
//! job; this handler only assembles the draft.

use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::cli::utils::short_id;
use crate::core::TicketDraft;
use crate::error::Result;
use crate::interactive::TicketForm;
use std::path::PathBuf;

/// Arguments for the new command
pub struct NewTicketArgs {
    pub title: Option<String>,
    pub requester: Option<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub interactive: bool,
    pub data_dir: Option<PathBuf>,
}

/// Handle the `new` command
///
/// # Errors
///
/// Returns an error if a category or priority flag is outside its
/// closed set, if required fields are missing, or if persistence fails.
pub fn handle_new_command(args: NewTicketArgs, output: &OutputFormatter) -> Result<()> {
    let mut context = HandlerContext::new(args.data_dir.as_deref())?;

    let mut draft = if args.interactive {
        TicketForm::new(&context.config).fill()?
    } else {
        draft_from_args(&args)?
    };

    // Config default applies only when the form left assignee blank
    if draft.assignee.is_none() {
        draft.assignee = context.config.default_assignee.clone();
    }

    let ticket = context.store.create(draft)?;

    if output.is_json() {
        output.print_json(&ticket)?;
    } else {
        output.success(&format!(
            "Created ticket '{}' ({})",
            ticket.title,
            short_id(ticket.id)
        ));
        output.info(&format!(
            "  {} | {} | requested by {}",
            ticket.category, ticket.priority, ticket.requester
        ));
    }

    Ok(())
}

/// Assemble a draft from command-line flags
fn draft_from_args(args: &NewTicketArgs) -> Result<TicketDraft> {
    Ok(TicketDraft {
        title: args.title.clone().unwrap_or_default(),
        requester: args.requester.clone().unwrap_or_default(),
        email: args.email.clone(),
        category: args.category.as_deref().map(str::parse).transpose()?,
        priority: args.priority.as_deref().map(str::parse).transpose()?,
        description: args.description.clone().unwrap_or_default(),
        assignee: args.assignee.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Priority};

    fn base_args() -> NewTicketArgs {
        NewTicketArgs {
            title: Some("Printer down".to_string()),
            requester: Some("Alice".to_string()),
            email: None,
            category: Some("hardware".to_string()),
            priority: Some("high".to_string()),
            description: Some("Paper jam on floor 3".to_string()),
            assignee: None,
            interactive: false,
            data_dir: None,
        }
    }

    #[test]
    fn flags_map_onto_the_draft() {
        let draft = draft_from_args(&base_args()).unwrap();
        assert_eq!(draft.title, "Printer down");
        assert_eq!(draft.category, Some(Category::Hardware));
        assert_eq!(draft.priority, Some(Priority::High));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn bad_category_flag_fails_at_parse() {
        let mut args = base_args();
        args.category = Some("printers".to_string());
        assert!(draft_from_args(&args).is_err());
    }

    #[test]
    fn omitted_flags_become_blank_draft_fields() {
        let mut args = base_args();
        args.title = None;
        args.priority = None;
        let draft = draft_from_args(&args).unwrap();
        assert!(draft.title.is_empty());
        assert_eq!(draft.priority, None);
        assert!(draft.validate().is_err());
    }
}
