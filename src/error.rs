//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live in [`crate::domain::ValidationError`] and are
//! wrapped by the types here.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No stored phone equals the requested value
    #[error("Phone number not found in record.")]
    PhoneNotFound(String),
}

/// Errors a command handler can report back to the user.
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments; carries the description of what is missing
    #[error("Not enough arguments. Please provide {0}.")]
    NotEnoughArguments(&'static str),

    /// The named contact does not exist
    #[error("Record not found.")]
    RecordNotFound,

    /// The named contact does not exist (message names the contact)
    #[error("Record for {0} not found.")]
    NamedRecordNotFound(String),

    /// The contact has no phone that could be changed
    #[error("{0} has no phone numbers to change.")]
    NoPhones(String),

    /// The contact already has a birthday
    #[error("Birthday already exists for {0}.")]
    BirthdayExists(String),

    /// The supplied phone could not be added
    #[error("Error adding phone: {0}")]
    InvalidPhone(ValidationError),

    /// The supplied birthday could not be added
    #[error("Error adding birthday: {0}")]
    InvalidBirthday(ValidationError),

    /// A record-level operation failed
    #[error("Error: {0}")]
    Record(#[from] RecordError),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid address book
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
