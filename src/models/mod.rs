//! Data models for the address book.
//!
//! This module contains the contact record and the book that owns all
//! records, along with the upcoming-birthday computation.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{Record, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
