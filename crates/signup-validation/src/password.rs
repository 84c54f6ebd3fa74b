//! Password validation functions

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Minimum number of ASCII digits
pub const MIN_PASSWORD_DIGITS: usize = 2;

/// Minimum number of characters drawn from [`PASSWORD_SYMBOLS`]
pub const MIN_PASSWORD_SYMBOLS: usize = 3;

/// Characters that count towards the symbol requirement
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Outcome of each password clause, for hosts that want to show a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordReport {
    pub long_enough: bool,
    pub enough_digits: bool,
    pub enough_symbols: bool,
}

impl PasswordReport {
    /// All clauses hold
    pub fn is_satisfied(&self) -> bool {
        self.long_enough && self.enough_digits && self.enough_symbols
    }
}

fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(&c)
}

/// Checks each password clause independently
///
/// Digits and symbols may appear anywhere and need not be adjacent.
pub fn password_requirements(password: &str) -> PasswordReport {
    let (chars, digits, symbols) =
        password
            .chars()
            .fold((0usize, 0usize, 0usize), |(chars, digits, symbols), c| {
                (
                    chars + 1,
                    digits + usize::from(c.is_ascii_digit()),
                    symbols + usize::from(is_password_symbol(c)),
                )
            });

    PasswordReport {
        long_enough: chars >= MIN_PASSWORD_CHARS,
        enough_digits: digits >= MIN_PASSWORD_DIGITS,
        enough_symbols: symbols >= MIN_PASSWORD_SYMBOLS,
    }
}

/// Validates a password: 8+ characters, 2+ digits, 3+ of `!@#$%^&*`
pub fn is_valid_password(password: &str) -> bool {
    password_requirements(password).is_satisfied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ab12!@#1", true)]
    #[case("12!@#abc", true)]
    #[case("!a1b@c2d#", true)]
    #[case("99****zz", true)]
    #[case("short1!", false)] // 7 characters
    #[case("abcdef1!@#", false)] // one digit
    #[case("abcd12!@", false)] // two symbols
    #[case("abcdefgh", false)]
    #[case("12345678", false)]
    #[case("ab12!?#1", false)] // '?' is not a counted symbol
    #[case("", false)]
    fn test_password_validation(#[case] password: &str, #[case] expected: bool) {
        assert_eq!(is_valid_password(password), expected, "password: {:?}", password);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 9 characters, 12 bytes
        assert!(is_valid_password("żółw12!@#"));
        // 7 characters but more than 8 bytes
        let report = password_requirements("ż1!@#2ó");
        assert!(!report.long_enough);
        assert!(report.enough_digits);
        assert!(report.enough_symbols);
    }

    #[test]
    fn test_report_clauses() {
        let report = password_requirements("abcdefgh");
        assert_eq!(
            report,
            PasswordReport {
                long_enough: true,
                enough_digits: false,
                enough_symbols: false,
            }
        );
        assert!(!report.is_satisfied());

        assert!(password_requirements("ab12!@#1").is_satisfied());
    }

    #[test]
    fn test_non_ascii_digits_do_not_count() {
        // Arabic-Indic digits
        assert!(!password_requirements("abc٣٤!@#x").enough_digits);
    }
}
