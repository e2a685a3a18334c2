//! End-to-end tests for the weekly birthday query.

use chrono::NaiveDate;
use rolo::{AddressBook, Record};

fn book_with(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_record(Record::with_details(*name, ["1234567890"], Some(*birthday)).unwrap());
    }
    book
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_birthday_three_days_out_lands_on_friday() {
    // today = 2024-03-12 (Tuesday); 2024-03-15 is a Friday
    let book = book_with(&[("John", "15.03.1984")]);
    let buckets = book.birthdays_in_next_week(day(2024, 3, 12));

    assert_eq!(buckets, vec![("Friday".to_string(), vec!["John".to_string()])]);
}

#[test]
fn test_window_is_inclusive_of_today_and_day_six() {
    let book = book_with(&[
        ("OnToday", "12.03.1980"),
        ("OnLastDay", "18.03.1980"),
        ("PastWindow", "19.03.1980"),
        ("BeforeToday", "11.03.1980"),
    ]);
    let buckets = book.birthdays_in_next_week(day(2024, 3, 12));

    let names: Vec<&str> = buckets
        .iter()
        .flat_map(|(_, names)| names.iter().map(String::as_str))
        .collect();
    assert!(names.contains(&"OnToday"));
    assert!(names.contains(&"OnLastDay"));
    assert!(!names.contains(&"PastWindow"));
    assert!(!names.contains(&"BeforeToday"));
}

#[test]
fn test_weekday_buckets_in_first_encounter_order() {
    // Book iterates in name order: Alice (Thu 14th), Bob (Wed 13th),
    // Carol (Thu 14th). Thursday is encountered before Wednesday.
    let book = book_with(&[
        ("Alice", "14.03.1970"),
        ("Bob", "13.03.1985"),
        ("Carol", "14.03.1992"),
    ]);
    let buckets = book.birthdays_in_next_week(day(2024, 3, 12));

    assert_eq!(
        buckets,
        vec![
            (
                "Thursday".to_string(),
                vec!["Alice".to_string(), "Carol".to_string()]
            ),
            ("Wednesday".to_string(), vec!["Bob".to_string()]),
        ]
    );
}

#[test]
fn test_feb29_does_not_break_query_in_non_leap_year() {
    let book = book_with(&[("Leap", "29.02.2000"), ("March", "02.03.1990")]);

    // 2025 is not a leap year; Leap is skipped, March still reported
    let buckets = book.birthdays_in_next_week(day(2025, 2, 26));
    let names: Vec<&str> = buckets
        .iter()
        .flat_map(|(_, names)| names.iter().map(String::as_str))
        .collect();
    assert_eq!(names, ["March"]);
}

#[test]
fn test_records_without_birthday_are_ignored() {
    let mut book = AddressBook::new();
    book.add_record(Record::with_details("NoBirthday", ["1234567890"], None).unwrap());

    assert!(book.birthdays_in_next_week(day(2024, 3, 12)).is_empty());
}

#[test]
fn test_query_is_idempotent_and_non_mutating() {
    let book = book_with(&[("John", "15.03.1984"), ("Jane", "16.03.1990")]);
    let today = day(2024, 3, 12);

    let snapshot = book.clone();
    let first = book.birthdays_in_next_week(today);
    let second = book.birthdays_in_next_week(today);

    assert_eq!(first, second);
    assert_eq!(book, snapshot);
}
