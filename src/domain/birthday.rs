//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// chrono format used for parsing and rendering birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday shape regex")
});

/// A birthday in `DD.MM.YYYY` form.
///
/// Keeps the string the user typed for display and the parsed date for
/// computation. The two always agree because the only constructor parses
/// the string.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("05.01.1990").unwrap();
/// assert_eq!(birthday.as_str(), "05.01.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// Day and month must be exactly two digits and the year exactly four;
    /// the date itself must exist in the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on any shape or range failure.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !DATE_SHAPE_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// The birthday exactly as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
