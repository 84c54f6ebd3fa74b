//! Signup Form
//!
//! The state behind the registration form: the record being edited, the
//! country choices, and the errors from the last submission attempt.

pub mod config;
pub mod session;
pub mod sink;

pub use config::Config;
pub use session::{FormSession, SubmitOutcome, GENDER_OPTIONS};
pub use sink::{LogSink, SubmissionSink};

pub use signup_countries::CountryEntry;
pub use signup_validation::{Field, FieldValue, RegistrationRecord, ValidationResult};
