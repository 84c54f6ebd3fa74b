// File: src/engine.rs
// Purpose: Runs every field rule over a record and collects the failures

use chrono::{Datelike, Local};
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use tracing::debug;

use crate::date::{birth_year_matches_age, parse_birth_year};
use crate::email::is_valid_email;
use crate::messages::message_for;
use crate::numeric::{is_age_in_range, parse_age};
use crate::password::is_valid_password;
use crate::record::{Field, RegistrationRecord};
use crate::string::{is_country_selected, is_valid_name, passwords_match};

/// Per-field error messages from one validation run
///
/// A field without an entry passed. The record is valid exactly when the map
/// is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self::default()
    }

    /// No field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if a specific field failed
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get the error message for a specific field
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`ValidationResult::is_valid`]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Failing fields with their messages, in form order
    pub fn iter(&self) -> btree_map::Iter<'_, Field, String> {
        self.errors.iter()
    }

    /// Take the underlying field to message map
    pub fn into_map(self) -> BTreeMap<Field, String> {
        self.errors
    }

    fn reject(&mut self, field: Field) {
        if let Some(message) = message_for(field) {
            self.errors.insert(field, message.to_string());
        }
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = (&'a Field, &'a String);
    type IntoIter = btree_map::Iter<'a, Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Validate a record against the current local calendar year
pub fn validate(record: &RegistrationRecord) -> ValidationResult {
    validate_as_of(record, Local::now().year())
}

/// Validate a record, taking the calendar year used for the age check
///
/// Every rule runs, so the result lists every failing field at once. An age
/// that does not parse fails both the age and the birth date rule.
pub fn validate_as_of(record: &RegistrationRecord, current_year: i32) -> ValidationResult {
    let age = parse_age(&record.age);
    let birth_year = parse_birth_year(&record.birth_date);

    let checks = [
        (Field::FirstName, is_valid_name(&record.first_name)),
        (Field::LastName, is_valid_name(&record.last_name)),
        (Field::Email, is_valid_email(&record.email)),
        (Field::Password, is_valid_password(&record.password)),
        (
            Field::ConfirmPassword,
            passwords_match(&record.password, &record.confirm_password),
        ),
        (Field::Age, age.is_some_and(is_age_in_range)),
        (
            Field::BirthDate,
            birth_year_matches_age(birth_year, age, current_year),
        ),
        (Field::Country, is_country_selected(&record.country)),
        (Field::TermsConsent, record.terms_consent),
    ];

    let mut result = ValidationResult::success();
    for (field, passed) in checks {
        if !passed {
            debug!(field = %field, "field failed validation");
            result.reject(field);
        }
    }

    debug!(
        failing = result.len(),
        current_year,
        "validated registration record"
    );
    result
}
