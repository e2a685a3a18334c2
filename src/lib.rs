//! rolo - a command-line address book with weekly birthday reminders.
//!
//! Contacts live in memory for the lifetime of the process: each record holds
//! a free-text name (the unique key), validated ten-digit phone numbers, and
//! an optional validated DD.MM.YYYY birthday. The book answers exact-name
//! lookups and a "birthdays in the next 7 days" query grouped by weekday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for phone numbers and birthdays
//! - **models**: the `Record` aggregate (name, phones, birthday)
//! - **book**: the name-keyed `AddressBook` with CRUD and the weekly
//!   birthday query
//! - **repl**: the interactive command loop that drives the book
//! - **config**: configuration management from environment variables
//! - **error**: non-domain error types

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, BirthdayBuckets};
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::ConfigError;
pub use models::Record;
