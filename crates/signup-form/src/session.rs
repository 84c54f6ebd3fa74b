// File: src/session.rs
// Purpose: One user's pass through the registration form

use anyhow::Result;
use signup_countries::{load_countries, CountryDirectory, CountryEntry};
use signup_validation::{
    validate, validate_as_of, FieldValue, RecordError, RegistrationRecord, ValidationResult,
};
use tracing::{debug, info};

use crate::sink::SubmissionSink;

/// Choices for the optional gender field as `(value, label)`
///
/// The empty value means no answer.
pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("male", "Mężczyzna"),
    ("female", "Kobieta"),
    ("other", "Inne"),
];

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record passed validation and the sink took it
    Accepted,
    /// At least one field failed; see [`FormSession::errors`]
    Rejected,
}

impl SubmitOutcome {
    pub fn is_accepted(self) -> bool {
        self == SubmitOutcome::Accepted
    }
}

/// Form state owned by the caller
///
/// Holds the record being edited, the country choices loaded when the form
/// was opened, and the errors from the most recent submission.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    record: RegistrationRecord,
    countries: Vec<CountryEntry>,
    errors: ValidationResult,
}

impl FormSession {
    /// Create an empty session with no country choices
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already filled record
    pub fn with_record(record: RegistrationRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// Open the form: load the country choices once
    ///
    /// Never fails. If the directory cannot be reached the choice list is
    /// simply empty.
    pub async fn initialize(self, directory: &dyn CountryDirectory) -> Self {
        let countries = load_countries(directory).await;
        Self { countries, ..self }
    }

    /// Apply a change event from a form control
    pub fn change(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        let value = value.into();
        debug!(field = name, "form field changed");
        self.record.update(name, value)
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn countries(&self) -> &[CountryEntry] {
        &self.countries
    }

    /// Errors from the most recent submission; empty before the first one
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Whether `name` is one of the loaded country choices
    ///
    /// Submission does not depend on this.
    pub fn is_known_country(&self, name: &str) -> bool {
        self.countries.iter().any(|c| c.display_name == name)
    }

    /// Validate against the current year and, if valid, hand the record to `sink`
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<SubmitOutcome> {
        let result = validate(&self.record);
        self.finish_submit(result, sink)
    }

    /// Like [`FormSession::submit`] with an explicit calendar year
    pub fn submit_as_of(&mut self, current_year: i32, sink: &dyn SubmissionSink) -> Result<SubmitOutcome> {
        let result = validate_as_of(&self.record, current_year);
        self.finish_submit(result, sink)
    }

    fn finish_submit(&mut self, result: ValidationResult, sink: &dyn SubmissionSink) -> Result<SubmitOutcome> {
        self.errors = result;

        if !self.errors.is_valid() {
            info!(failing = self.errors.len(), "registration rejected");
            return Ok(SubmitOutcome::Rejected);
        }

        sink.accept(&self.record)?;
        Ok(SubmitOutcome::Accepted)
    }
}
