//! The address book: every record, keyed by contact name.

use super::record::{Record, UpcomingBirthday};
use chrono::NaiveDate;

/// An insertion-ordered collection of records keyed by name.
///
/// Keys are exact, case-sensitive names and always equal the stored
/// record's name. Records are kept in a `Vec` so listing and persistence
/// follow the order contacts were first added; lookups are linear, which
/// is fine at personal address book sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records in order, applying [`AddressBook::add_record`]
    /// to each so that repeated names collapse with last-write-wins.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// A replaced record keeps its original position.
    pub fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(contact = %record.name(), "Replacing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(contact = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove and return the named record. `None` means it was not there.
    pub fn delete_record(&mut self, name: &str) -> Option<Record> {
        let index = self.position_of(name)?;
        tracing::debug!(contact = %name, "Deleting record");
        Some(self.records.remove(index))
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// All `(name, record)` pairs in insertion order.
    pub fn list_all(&self) -> Vec<(&str, &Record)> {
        self.records
            .iter()
            .map(|r| (r.name().as_str(), r))
            .collect()
    }

    /// Congratulation entries for every contact whose birthday falls in the
    /// upcoming window, in book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|r| r.upcoming_birthday(today))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl IntoIterator for AddressBook {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
