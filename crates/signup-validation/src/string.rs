//! Text field validators: names, country selection, equality

use once_cell::sync::Lazy;
use regex::Regex;

// Two or more ASCII letters, nothing else
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z]{2,}$").expect("name pattern is valid"));

/// Validates a first or last name
///
/// The whole value must be at least two ASCII letters. Digits, spaces,
/// hyphens and accented letters are all rejected.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// A country counts as selected when the identifier is non-empty.
pub fn is_country_selected(country: &str) -> bool {
    !country.is_empty()
}

/// Exact, case-sensitive comparison of a password and its confirmation
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
