//! The address book: a name-keyed collection of contact records.
//!
//! `AddressBook` wraps its internal map instead of exposing one; callers only
//! get the operations below, so every entry keeps the "at most one record per
//! name" invariant. Iteration order is name order, which keeps `all` listings
//! and birthday buckets deterministic between calls.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::debug;

/// Weekly birthday buckets: `(full weekday name, contact names)` pairs in
/// first-encounter order of the weekday, names in book iteration order.
pub type BirthdayBuckets = Vec<(String, Vec<String>)>;

/// An in-memory address book keyed by contact name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// Last write wins: inserting under an existing name replaces the prior
    /// record wholesale (no merge) and returns it.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        debug!(name = record.name(), "adding record");
        self.records.insert(record.name().to_string(), record)
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-match lookup by name, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry for `name`, returning the record if it was present.
    ///
    /// Silent no-op (returns `None`) when the name is unknown.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name);
        if removed.is_some() {
            debug!(name, "deleted record");
        }
        removed
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Compute which contacts have a birthday in the next 7 calendar days.
    ///
    /// For each record with a birthday, its (month, day) is re-anchored to
    /// `today`'s year; when that candidate date falls inside the inclusive
    /// window `[today, today + 6]`, the contact's name lands in the bucket
    /// for the candidate's full weekday name ("Monday" ... "Sunday").
    ///
    /// A Feb 29 birthday has no candidate date in a non-leap year; such
    /// records are skipped rather than failing the whole query. Birthdays
    /// whose re-anchored date falls before `today` (early-January birthdays
    /// queried in late December) are not reported; the window does not wrap
    /// across the year boundary.
    pub fn birthdays_in_next_week(&self, today: NaiveDate) -> BirthdayBuckets {
        let window_end = today + Duration::days(6);
        let mut buckets: BirthdayBuckets = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let candidate =
                match NaiveDate::from_ymd_opt(today.year(), birthday.month(), birthday.day()) {
                    Some(date) => date,
                    None => {
                        // Feb 29 in a non-leap year
                        debug!(name = record.name(), "birthday has no date this year, skipping");
                        continue;
                    }
                };

            if candidate < today || candidate > window_end {
                continue;
            }

            let weekday = candidate.format("%A").to_string();
            match buckets.iter_mut().find(|(day, _)| *day == weekday) {
                Some((_, names)) => names.push(record.name().to_string()),
                None => buckets.push((weekday, vec![record.name().to_string()])),
            }
        }

        buckets
    }
}
