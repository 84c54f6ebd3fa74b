//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld where no part holds whitespace or a second '@'
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validates basic email format
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - A '.' somewhere after the '@' with content on both sides of it
/// - No whitespace anywhere
///
/// This is deliberately loose: `a@b.c` passes, as does `a.b@c.d.e`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
