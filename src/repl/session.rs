//! Command loop state.
//!
//! A session owns the address book for the lifetime of the process, loads it
//! from the repository on start and writes it back on exit.

use crate::clock::Clock;
use crate::commands::{self, Command, CommandContext, GOODBYE};
use crate::error::StorageResult;
use crate::matching::SearchSettings;
use crate::models::AddressBook;
use crate::repositories::BookRepository;

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line
    Continue(String),

    /// Print the message and stop; the book has been saved
    Exit(String),
}

/// The single-threaded command loop state.
pub struct Session {
    book: AddressBook,
    repository: Box<dyn BookRepository>,
    clock: Box<dyn Clock>,
    search: SearchSettings,
}

impl Session {
    /// Load the book from `repository` and start a session.
    ///
    /// # Errors
    ///
    /// Fails if the stored book exists but cannot be read or parsed. A
    /// missing book is not an error.
    pub fn start(
        repository: Box<dyn BookRepository>,
        clock: Box<dyn Clock>,
        search: SearchSettings,
    ) -> StorageResult<Self> {
        let book = repository.load()?;
        tracing::debug!(contacts = book.len(), "Session started");

        Ok(Self {
            book,
            repository,
            clock,
            search,
        })
    }

    /// Handle one line of input.
    ///
    /// Command failures are part of the returned text; the only error is a
    /// failed save on `close`/`exit`.
    pub fn handle_line(&mut self, line: &str) -> StorageResult<Reply> {
        let input = commands::parse_input(line);

        if input.command == Command::Exit {
            return self.shutdown().map(Reply::Exit);
        }

        let mut ctx = CommandContext {
            book: &mut self.book,
            today: self.clock.today(),
            search: self.search,
        };

        Ok(Reply::Continue(commands::execute(&input, &mut ctx)))
    }

    /// Save the book and return the farewell message.
    pub fn shutdown(&mut self) -> StorageResult<String> {
        self.repository.save(&self.book)?;
        Ok(GOODBYE.to_string())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}
