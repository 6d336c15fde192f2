//! Command handlers
//!
//! One module per command. Every handler follows the same shape: build
//! a [`HandlerContext`](common::HandlerContext), run the operation
//! against the store or filter, render via the formatter.

mod common;
mod delete;
mod export;
mod import;
mod interchange;
mod list;
mod new;
mod show;
mod stats;
mod status;

pub use delete::handle_delete_command;
pub use export::handle_export_command;
pub use import::handle_import_command;
pub use interchange::DataFormat;
pub use list::{ListArgs, handle_list_command};
pub use new::{NewTicketArgs, handle_new_command};
pub use show::handle_show_command;
pub use stats::handle_stats_command;
pub use status::handle_status_command;

pub(crate) use common::HandlerContext;
