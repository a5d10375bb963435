//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of characters a phone number must keep after filtering.
pub const PHONE_LENGTH: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Construction filters the raw input down to ASCII digits and the
/// punctuation characters `+ - ( )`, and the filtered string must be
/// exactly [`PHONE_LENGTH`] characters long. The filtered string is what
/// gets stored, compared, and displayed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("050 123 4567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from raw user input.
    ///
    /// # Validation Rules
    ///
    /// - Every character other than a digit or one of `+ - ( )` is dropped
    /// - The remaining string must be exactly 10 characters long
    ///
    /// Punctuation counts toward the length, so `+38050123456` (12 kept
    /// characters) is rejected even though it is mostly digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the filtered length is not 10.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let filtered = Self::filter(raw);

        if filtered.chars().count() != PHONE_LENGTH {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(filtered))
    }

    /// Keep only digits and the allowed punctuation characters.
    fn filter(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')'))
            .collect()
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
