// File: src/record.rs
// Purpose: The registration record, its field names, and by-name updates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A field of the registration form
///
/// Variants are declared in form order, which is also the order errors are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Age,
    BirthDate,
    Country,
    Gender,
    MarketingConsent,
    TermsConsent,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Age,
        Field::BirthDate,
        Field::Country,
        Field::Gender,
        Field::MarketingConsent,
        Field::TermsConsent,
    ];

    /// The field's name as submitted by the form
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Age => "age",
            Field::BirthDate => "birthDate",
            Field::Country => "country",
            Field::Gender => "gender",
            Field::MarketingConsent => "marketingConsent",
            Field::TermsConsent => "termsConsent",
        }
    }

    /// Checkbox fields carry a flag, everything else carries text
    pub fn is_checkbox(self) -> bool {
        matches!(self, Field::MarketingConsent | Field::TermsConsent)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = RecordError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| RecordError::UnknownField(name.to_string()))
    }
}

/// A value coming from a form control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Text inputs and selects
    Text(String),
    /// Checkboxes
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Errors from updating a record by field name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("field {field} expects {expected}")]
    TypeMismatch {
        field: Field,
        expected: &'static str,
    },
}

/// Everything the user has entered into the registration form
///
/// Age and birth date stay as the raw text the user typed; the engine parses
/// them when validating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub birth_date: String,
    pub country: String,
    pub gender: String,
    pub marketing_consent: bool,
    pub terms_consent: bool,
}

impl RegistrationRecord {
    /// Create an empty record, as the form starts out
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a single field
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::MarketingConsent => FieldValue::Flag(self.marketing_consent),
            Field::TermsConsent => FieldValue::Flag(self.terms_consent),
            text => FieldValue::Text(self.text_slot(text).cloned().unwrap_or_default()),
        }
    }

    /// Replace a single field, rejecting a value of the wrong kind
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        match (field, value.into()) {
            (Field::MarketingConsent, FieldValue::Flag(flag)) => self.marketing_consent = flag,
            (Field::TermsConsent, FieldValue::Flag(flag)) => self.terms_consent = flag,
            (field, FieldValue::Text(_)) if field.is_checkbox() => {
                return Err(RecordError::TypeMismatch {
                    field,
                    expected: "a checkbox flag",
                });
            }
            (field, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_slot_mut(field) {
                    *slot = text;
                }
            }
            (field, FieldValue::Flag(_)) => {
                return Err(RecordError::TypeMismatch {
                    field,
                    expected: "text",
                });
            }
        }
        Ok(())
    }

    /// Replace a field looked up by its form name (`"firstName"`, `"termsConsent"`, ...)
    pub fn update(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), RecordError> {
        let field: Field = name.parse()?;
        self.set(field, value)
    }

    fn text_slot(&self, field: Field) -> Option<&String> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            Field::Age => Some(&self.age),
            Field::BirthDate => Some(&self.birth_date),
            Field::Country => Some(&self.country),
            Field::Gender => Some(&self.gender),
            Field::MarketingConsent | Field::TermsConsent => None,
        }
    }

    fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Age => Some(&mut self.age),
            Field::BirthDate => Some(&mut self.birth_date),
            Field::Country => Some(&mut self.country),
            Field::Gender => Some(&mut self.gender),
            Field::MarketingConsent | Field::TermsConsent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(RecordError::UnknownField("nickname".to_string()))
        );
        // Names are case-sensitive
        assert!("FirstName".parse::<Field>().is_err());
    }

    #[test]
    fn test_update_text_and_flags() {
        let mut record = RegistrationRecord::new();
        record.update("firstName", "Jo").unwrap();
        record.update("termsConsent", true).unwrap();
        record.update("gender", "other").unwrap();

        assert_eq!(record.first_name, "Jo");
        assert!(record.terms_consent);
        assert!(!record.marketing_consent);
        assert_eq!(record.get(Field::Gender), FieldValue::Text("other".to_string()));
        assert_eq!(record.get(Field::TermsConsent), FieldValue::Flag(true));
    }

    #[test]
    fn test_update_leaves_other_fields_untouched() {
        let mut record = RegistrationRecord {
            email: "jo@doe.com".to_string(),
            ..Default::default()
        };
        record.update("lastName", "Doe").unwrap();
        assert_eq!(record.email, "jo@doe.com");
        assert_eq!(record.last_name, "Doe");
    }

    #[test]
    fn test_update_rejects_wrong_kind() {
        let mut record = RegistrationRecord::new();
        assert_eq!(
            record.update("termsConsent", "yes"),
            Err(RecordError::TypeMismatch {
                field: Field::TermsConsent,
                expected: "a checkbox flag",
            })
        );
        assert_eq!(
            record.update("age", true),
            Err(RecordError::TypeMismatch {
                field: Field::Age,
                expected: "text",
            })
        );
        assert_eq!(record, RegistrationRecord::new());
    }

    #[test]
    fn test_update_unknown_field() {
        let mut record = RegistrationRecord::new();
        let err = record.update("nickname", "jo").unwrap_err();
        assert_eq!(err.to_string(), "unknown form field: nickname");
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let record: RegistrationRecord = serde_json::from_str(
            r#"{"firstName": "Jo", "confirmPassword": "x", "termsConsent": true}"#,
        )
        .unwrap();
        assert_eq!(record.first_name, "Jo");
        assert_eq!(record.confirm_password, "x");
        assert!(record.terms_consent);
        assert_eq!(record.country, "");
    }
}
