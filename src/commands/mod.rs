//! Command layer: parsing a line and dispatching it to a handler.
//!
//! Handlers return typed results; [`execute`] is the single place where a
//! failure is turned into the text shown to the user, so no error ever
//! reaches the command loop.

pub mod handlers;
pub mod parser;

pub use handlers::{GOODBYE, GREETING, HELP, INVALID_COMMAND};
pub use parser::{parse_input, Command, ParsedInput};

use crate::error::CommandResult;
use crate::matching::SearchSettings;
use crate::models::AddressBook;
use chrono::NaiveDate;

/// Everything a handler may need, passed explicitly for each command.
#[derive(Debug)]
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub today: NaiveDate,
    pub search: SearchSettings,
}

/// Run the handler for `input` and return its typed result.
pub fn dispatch(input: &ParsedInput, ctx: &mut CommandContext<'_>) -> CommandResult<String> {
    let args = input.args.as_slice();

    match input.command {
        Command::Hello => Ok(GREETING.to_string()),
        Command::Add => handlers::add_contact(args, ctx.book),
        Command::Change => handlers::change_contact(args, ctx.book),
        Command::Phone => handlers::show_phones(args, ctx.book),
        Command::All => handlers::show_all(ctx.book),
        Command::AddBirthday => handlers::add_birthday(args, ctx.book),
        Command::ShowBirthday => handlers::show_birthday(args, ctx.book),
        Command::Birthdays => handlers::birthdays(ctx.book, ctx.today),
        Command::Delete => handlers::delete_contact(args, ctx.book),
        Command::RemovePhone => handlers::remove_phone(args, ctx.book),
        Command::Search => handlers::search_contacts(args, ctx.book, ctx.search),
        Command::Help => Ok(HELP.to_string()),
        Command::Exit => Ok(GOODBYE.to_string()),
        Command::Unknown => Ok(INVALID_COMMAND.to_string()),
    }
}

/// Run the handler for `input` and render the outcome as display text.
pub fn execute(input: &ParsedInput, ctx: &mut CommandContext<'_>) -> String {
    match dispatch(input, ctx) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(command = ?input.command, error = ?e, "Command failed");
            e.to_string()
        }
    }
}
