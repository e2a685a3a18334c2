//! Record model representing a single contact in the address book.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record: one name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is free text stored as-is and serves as the unique key inside an
/// [`AddressBook`](crate::book::AddressBook). Phones keep insertion order and
/// may contain duplicates; queries never depend on their order. Every phone
/// and the birthday are validated value objects, so a constructed record can
/// only hold well-formed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// The empty phone list is built fresh per call; records never share a
    /// default container.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a record with an initial phone list and optional birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any phone or the birthday is malformed;
    /// nothing is constructed in that case.
    pub fn with_details<I, S>(
        name: impl Into<String>,
        phones: I,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phones = phones
            .into_iter()
            .map(|raw| PhoneNumber::new(raw.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = birthday.map(Birthday::parse).transpose()?;

        Ok(Self {
            name: name.into(),
            phones,
            birthday,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` on a malformed number; the
    /// phone list is left unchanged.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose stored value equals `raw` exactly.
    ///
    /// Silent no-op when nothing matches.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Replace the first phone equal to `old` with a freshly validated `new`.
    ///
    /// Returns `Ok(true)` on replacement and `Ok(false)` when `old` is not
    /// present. `new` is validated before the list is searched, so a
    /// malformed `new` can never leave a partial edit behind.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter().position(|phone| phone.as_str() == old) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Validate and set the birthday, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on a malformed date; an
    /// existing birthday is left in place.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

// Display support - the canonical one-line rendering used by the `all` command
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => "Not provided".to_string(),
        };
        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name, phones, birthday
        )
    }
}
