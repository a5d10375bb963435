//! Record model representing one contact in the address book.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many days ahead the upcoming-birthday window reaches (inclusive).
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A single contact: name, phones in the order they were added, and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    /// Duplicates are allowed; lookups always act on the first match.
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

/// A contact whose (weekend-adjusted) birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The day to congratulate on, never a Saturday or Sunday
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date rendered as `DD.MM.YYYY`.
    pub fn congratulation_date_display(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.congratulation_date_display())
    }
}

impl Record {
    /// Create a record with a name and nothing else.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record from a raw name string.
    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are not checked.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose stored value equals `phone`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` when nothing matches.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        let index = self.position_of(phone)?;
        let removed = self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone = %removed, "Removed phone");
        Ok(())
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`.
    ///
    /// The lookup happens before validation, so an unknown `old_phone` is
    /// reported as not found even if `new_phone` is also invalid.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> RecordResult<()> {
        let index = self.position_of(old_phone)?;
        let replacement = PhoneNumber::new(new_phone)?;
        tracing::debug!(
            contact = %self.name,
            old = %self.phones[index],
            new = %replacement,
            "Editing phone"
        );
        self.phones[index] = replacement;
        Ok(())
    }

    /// First stored phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday, replacing any existing one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        tracing::debug!(contact = %self.name, birthday = %birthday, "Birthday set");
        Ok(())
    }

    /// The congratulation entry for this contact, if its next birthday is
    /// within [`UPCOMING_WINDOW_DAYS`] of `today`.
    ///
    /// The birthday is projected onto this year (or next year if it already
    /// passed), then moved off a weekend onto the following Monday. A Feb 29
    /// birthday is celebrated on Feb 28 in non-leap years.
    pub fn upcoming_birthday(&self, today: NaiveDate) -> Option<UpcomingBirthday> {
        let birthday = self.birthday.as_ref()?.date();

        let mut next = anniversary_in(birthday, today.year())?;
        if next < today {
            next = anniversary_in(birthday, today.year() + 1)?;
        }

        while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
            next = next.succ_opt()?;
        }

        let days_until = (next - today).num_days();
        if (0..=UPCOMING_WINDOW_DAYS).contains(&days_until) {
            Some(UpcomingBirthday {
                name: self.name.to_string(),
                congratulation_date: next,
            })
        } else {
            None
        }
    }

    fn position_of(&self, phone: &str) -> RecordResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))
    }
}

/// The birthday's month and day in `year`.
fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    // Only Feb 29 can fail to exist in the target year.
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = self.birthday.as_ref().map_or("None", Birthday::as_str);

        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::with_name(name).unwrap();
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::with_name("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::with_name("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0501234567").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::with_name("Alice").unwrap();
        assert!(record.add_phone("123").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = Record::with_name("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();
        record.add_phone("0501234567").unwrap();

        record.remove_phone("0501234567").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0679876543", "0501234567"]);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = Record::with_name("Alice").unwrap();
        record.add_phone("0501234567").unwrap();

        let err = record.remove_phone("0000000000").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("0000000000".to_string()));
        assert_eq!(err.to_string(), "Phone number not found in record.");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_changes_first_match_only() {
        let mut record = Record::with_name("Alice").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0501234567").unwrap();

        record.edit_phone("0501234567", "0991112233").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0991112233", "0501234567"]);
    }

    #[test]
    fn test_edit_phone_errors() {
        let mut record = Record::with_name("Alice").unwrap();
        record.add_phone("0501234567").unwrap();

        assert!(matches!(
            record.edit_phone("1111111111", "0991112233"),
            Err(RecordError::PhoneNotFound(_))
        ));
        assert!(matches!(
            record.edit_phone("0501234567", "bad"),
            Err(RecordError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(record.phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::with_name("Alice").unwrap();
        record.add_phone("0501234567").unwrap();

        assert_eq!(
            record.find_phone("0501234567").map(|p| p.as_str()),
            Some("0501234567")
        );
        assert!(record.find_phone("0679876543").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = record_with_birthday("Alice", "05.01.1990");
        record.add_birthday("06.02.1991").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "06.02.1991");

        assert!(record.add_birthday("1991-02-06").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "06.02.1991");
    }

    #[test]
    fn test_display() {
        let mut record = Record::with_name("Alice").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: , birthday: None"
        );

        record.add_phone("0501234567").unwrap();
        record.add_phone("0679876543").unwrap();
        record.add_birthday("05.01.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 0501234567, 0679876543, birthday: 05.01.1990"
        );
    }

    #[test]
    fn test_upcoming_without_birthday() {
        let record = Record::with_name("Alice").unwrap();
        assert!(record.upcoming_birthday(date(1, 1, 2024)).is_none());
    }

    #[test]
    fn test_upcoming_weekday_birthday() {
        // 01.01.2024 is a Monday
        let record = record_with_birthday("Alice", "03.01.1990");
        let upcoming = record.upcoming_birthday(date(1, 1, 2024)).unwrap();
        assert_eq!(upcoming.name, "Alice");
        assert_eq!(upcoming.congratulation_date_display(), "03.01.2024");
    }

    #[test]
    fn test_upcoming_birthday_today() {
        let record = record_with_birthday("Alice", "01.01.1990");
        let upcoming = record.upcoming_birthday(date(1, 1, 2024)).unwrap();
        assert_eq!(upcoming.congratulation_date, date(1, 1, 2024));
    }

    #[test]
    fn test_upcoming_saturday_rolls_to_monday() {
        // 06.01.2024 is a Saturday; Monday 08.01 is exactly 7 days out
        let record = record_with_birthday("Bob", "06.01.1985");
        let upcoming = record.upcoming_birthday(date(1, 1, 2024)).unwrap();
        assert_eq!(upcoming.congratulation_date_display(), "08.01.2024");
    }

    #[test]
    fn test_upcoming_weekend_roll_pushes_out_of_window() {
        // From Sunday 31.12.2023 the Monday after 06.01.2024 is 8 days away
        let record = record_with_birthday("Bob", "06.01.1985");
        assert!(record.upcoming_birthday(date(31, 12, 2023)).is_none());
    }

    #[test]
    fn test_upcoming_sunday_birthday_on_sunday() {
        // 07.01.2024 is a Sunday
        let record = record_with_birthday("Bob", "07.01.1985");
        let upcoming = record.upcoming_birthday(date(7, 1, 2024)).unwrap();
        assert_eq!(upcoming.congratulation_date, date(8, 1, 2024));
    }

    #[test]
    fn test_upcoming_beyond_window() {
        let record = record_with_birthday("Carol", "09.01.1990");
        assert!(record.upcoming_birthday(date(1, 1, 2024)).is_none());
    }

    #[test]
    fn test_upcoming_passed_birthday_wraps_to_next_year() {
        let record = record_with_birthday("Dave", "02.01.1990");
        // 02.01.2025 is a Thursday
        let upcoming = record.upcoming_birthday(date(29, 12, 2024)).unwrap();
        assert_eq!(upcoming.congratulation_date_display(), "02.01.2025");
    }

    #[test]
    fn test_upcoming_weekend_roll_crosses_year_end() {
        // 30.12.2023 is a Saturday, rolled to Monday 01.01.2024
        let record = record_with_birthday("Eve", "30.12.1970");
        let upcoming = record.upcoming_birthday(date(28, 12, 2023)).unwrap();
        assert_eq!(upcoming.congratulation_date_display(), "01.01.2024");
    }

    #[test]
    fn test_upcoming_leap_day_in_non_leap_year() {
        // 28.02.2023 is a Tuesday
        let record = record_with_birthday("Leap", "29.02.2000");
        let upcoming = record.upcoming_birthday(date(25, 2, 2023)).unwrap();
        assert_eq!(upcoming.congratulation_date_display(), "28.02.2023");
    }

    #[test]
    fn test_upcoming_leap_day_in_leap_year() {
        // 29.02.2024 is a Thursday
        let record = record_with_birthday("Leap", "29.02.2000");
        let upcoming = record.upcoming_birthday(date(26, 2, 2024)).unwrap();
        assert_eq!(upcoming.congratulation_date_display(), "29.02.2024");
    }

    #[test]
    fn test_upcoming_display() {
        let upcoming = UpcomingBirthday {
            name: "Alice".to_string(),
            congratulation_date: date(3, 1, 2024),
        };
        assert_eq!(upcoming.to_string(), "Alice - 03.01.2024");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = record_with_birthday("Alice", "05.01.1990");
        record.add_phone("0501234567").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_defaults() {
        let record: Record = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }
}
