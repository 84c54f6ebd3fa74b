//! Birth date validation functions

use chrono::{DateTime, Datelike, NaiveDate};

/// Extracts the calendar year from a birth date
///
/// Accepts the `YYYY-MM-DD` value a date input submits, or a full RFC 3339
/// timestamp. Anything else, including an empty string, gives `None`.
pub fn parse_birth_year(input: &str) -> Option<i32> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.year());
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|timestamp| timestamp.year())
}

/// Checks that the birth year agrees with the stated age
///
/// Only calendar years are compared: someone born in December of
/// `current_year - 25` is 25 for this check all year long. A missing year or
/// a missing age never matches.
pub fn birth_year_matches_age(birth_year: Option<i32>, age: Option<i64>, current_year: i32) -> bool {
    match (birth_year, age) {
        (Some(year), Some(age)) => i64::from(current_year) - i64::from(year) == age,
        _ => false,
    }
}
