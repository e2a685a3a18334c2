//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// The raw input must be a `DD.MM.YYYY` string with a zero-padded two-digit
/// day and month and a four-digit year, and it must name a real calendar date
/// (`31.02.2000` fails). The year is retained, but recurring-birthday queries
/// only consult the month and day.
///
/// # Example
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::parse("15.03.1984").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1984");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not
    /// strictly `DD.MM.YYYY` or does not name a valid calendar date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !Self::is_well_formed(raw) {
            return Err(ValidationError::InvalidBirthday);
        }

        NaiveDate::parse_from_str(raw, "%d.%m.%Y")
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday)
    }

    /// Check the `DD.MM.YYYY` shape before handing off to chrono.
    ///
    /// chrono's `%d`/`%m` accept unpadded single digits, which the input
    /// format does not allow, so the shape is checked byte by byte.
    fn is_well_formed(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 10
            && bytes[2] == b'.'
            && bytes[5] == b'.'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit())
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month component (1-12), used for recurring-birthday queries.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day-of-month component (1-31), used for recurring-birthday queries.
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - renders back to DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}
