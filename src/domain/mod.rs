//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers, and birthday. Each value object validates at
//! construction time so that an invalid phone or date can never be stored
//! in a record.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
