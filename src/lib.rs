//! Contact Assistant - a command-line assistant bot for a personal address book.
//!
//! Users type short commands to add contacts, attach phone numbers and
//! birthdays, and ask who should be congratulated in the coming week. The
//! book is kept in memory and saved to a JSON file on exit.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birthday, name)
//! - **models**: `Record` and `AddressBook`, including upcoming-birthday logic
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **clock**: Source of today's date
//! - **matching**: Fuzzy contact search
//! - **repositories**: Loading and saving the address book
//! - **commands**: Command parsing, handlers, and dispatch
//! - **repl**: Session state and the interactive loop

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repl;
pub mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use matching::{ContactMatcher, MatchResult, SearchSettings};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repl::{Reply, Session};
pub use repositories::{BookRepository, JsonFileBookRepository};
