//! Signup Validation
//!
//! Field rules and the validation engine for the registration form.
//! Everything here is pure: a record goes in, a per-field error map comes out.
//!
//! ```
//! use signup_validation::{validate_as_of, Field, RegistrationRecord};
//!
//! let record = RegistrationRecord {
//!     first_name: "Jo".to_string(),
//!     last_name: "Doe".to_string(),
//!     email: "jo@doe.com".to_string(),
//!     password: "ab12!@#1".to_string(),
//!     confirm_password: "ab12!@#1".to_string(),
//!     age: "25".to_string(),
//!     birth_date: "2001-04-12".to_string(),
//!     country: "Polska".to_string(),
//!     terms_consent: true,
//!     ..Default::default()
//! };
//!
//! let result = validate_as_of(&record, 2026);
//! assert!(result.is_valid());
//!
//! let result = validate_as_of(&RegistrationRecord::default(), 2026);
//! assert!(result.has_error(Field::TermsConsent));
//! ```

pub mod date;
pub mod email;
pub mod engine;
pub mod messages;
pub mod numeric;
pub mod password;
pub mod record;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;

pub use engine::{validate, validate_as_of, ValidationResult};
pub use record::{Field, FieldValue, RecordError, RegistrationRecord};
