//! Numeric validation functions

use std::fmt::Display;

/// Youngest accepted age
pub const MIN_AGE: i64 = 18;

/// Oldest accepted age
pub const MAX_AGE: i64 = 99;

/// Validates value is within range (both ends inclusive)
pub fn validate_range<T: PartialOrd + Display>(value: T, min: T, max: T) -> Result<(), String> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {}", min, max))
    }
}

/// Parses the age field
///
/// Lenient in the way browsers read number inputs: leading whitespace is
/// skipped, an optional sign is accepted, then the longest run of decimal
/// digits is taken and anything after it is ignored. `"25"`, `" 25"`,
/// `"25.9"` and `"25 lat"` all give 25. No digits at all gives `None`.
///
/// Values too large for `i64` saturate, which keeps them out of range.
pub fn parse_age(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Age must fall between [`MIN_AGE`] and [`MAX_AGE`]
pub fn is_age_in_range(age: i64) -> bool {
    validate_range(age, MIN_AGE, MAX_AGE).is_ok()
}
