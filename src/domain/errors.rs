//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// Raised synchronously by value object construction whenever a raw phone or
/// birthday string fails its format rule. Construction is all-or-nothing, so a
/// `ValidationError` always leaves prior state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly ten ASCII digits.
    InvalidPhone,

    /// The provided birthday is not a valid DD.MM.YYYY calendar date.
    InvalidBirthday,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone => write!(f, "Phone number must be 10 digits."),
            Self::InvalidBirthday => write!(f, "Birthday must be in DD.MM.YYYY format"),
        }
    }
}

impl std::error::Error for ValidationError {}
