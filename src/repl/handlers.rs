//! Command handlers: map parsed commands onto address book operations.
//!
//! Every handler is all-or-nothing: a `ValidationError` coming back from the
//! core becomes the reply text and leaves the book exactly as it was.

use super::Command;
use crate::book::{AddressBook, BirthdayBuckets};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::fmt::Write as _;

/// The outcome of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print for the user (possibly multiple lines).
    pub text: String,

    /// Whether the loop should terminate after printing.
    pub exit: bool,
}

impl Reply {
    fn msg(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

/// Execute a parsed command against the book and produce a reply.
///
/// The weekly birthday query is anchored at the local calendar date; see
/// [`birthdays_reply`] for the date-injected form used by tests.
pub fn execute(book: &mut AddressBook, command: Command) -> Reply {
    match command {
        Command::Hello => Reply::msg("Hello! How can I help you?"),
        Command::Add { name, phone } => Reply::msg(add(book, &name, &phone)),
        Command::Change { name, phone } => Reply::msg(change(book, &name, &phone)),
        Command::Phone { name } => Reply::msg(phone_of(book, &name)),
        Command::All => Reply::msg(all(book)),
        Command::AddBirthday { name, birthday } => {
            Reply::msg(add_birthday(book, &name, &birthday))
        }
        Command::ShowBirthday { name } => Reply::msg(show_birthday(book, &name)),
        Command::Birthdays => Reply::msg(birthdays_reply(book, Local::now().date_naive())),
        Command::Exit => Reply {
            text: "Goodbye!".to_string(),
            exit: true,
        },
        Command::Invalid { usage } => Reply::msg(usage),
        Command::Unknown => Reply::msg("Unknown command."),
    }
}

/// `add <name> <phone>`: append the phone to an existing record, or insert a
/// fresh single-phone record under a new name.
fn add(book: &mut AddressBook, name: &str, phone: &str) -> String {
    let result = match book.find_mut(name) {
        Some(record) => record.add_phone(phone),
        None => Record::with_details(name, [phone], None).map(|record| {
            book.add_record(record);
        }),
    };

    match result {
        Ok(()) => format!("Contact {name} added."),
        Err(e) => e.to_string(),
    }
}

/// `change <name> <phone>`: replace the record's first phone, or set the
/// phone when the record has none yet.
fn change(book: &mut AddressBook, name: &str, phone: &str) -> String {
    let Some(record) = book.find_mut(name) else {
        return "Contact not found.".to_string();
    };

    let result = match record.phones().first().map(|p| p.as_str().to_string()) {
        Some(first) => record.edit_phone(&first, phone).map(|_| ()),
        None => record.add_phone(phone),
    };

    match result {
        Ok(()) => format!("Contact {name}'s phone changed."),
        Err(e) => e.to_string(),
    }
}

/// `phone <name>`: show the record's phone numbers.
fn phone_of(book: &AddressBook, name: &str) -> String {
    match book.find(name) {
        Some(record) => {
            let phones = record
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{name}'s phone: {phones}")
        }
        None => "Contact not found.".to_string(),
    }
}

/// `all`: list every record, one per line, in book iteration order.
fn all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set the record's birthday.
fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> String {
    let Some(record) = book.find_mut(name) else {
        return "Contact not found.".to_string();
    };

    match record.set_birthday(birthday) {
        Ok(()) => format!("{name}'s birthday added."),
        Err(e) => e.to_string(),
    }
}

/// `show-birthday <name>`: show the record's birthday if one is set.
fn show_birthday(book: &AddressBook, name: &str) -> String {
    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => format!("{name}'s birthday: {birthday}"),
        None => "Birthday not found.".to_string(),
    }
}

/// `birthdays`: render the weekly birthday buckets for the given `today`.
pub fn birthdays_reply(book: &AddressBook, today: NaiveDate) -> String {
    let buckets: BirthdayBuckets = book.birthdays_in_next_week(today);

    if buckets.is_empty() {
        return "No birthdays next week.".to_string();
    }

    let mut text = String::new();
    for (i, (weekday, names)) in buckets.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        let _ = write!(text, "{}: {}", weekday, names.join(", "));
    }
    text
}
