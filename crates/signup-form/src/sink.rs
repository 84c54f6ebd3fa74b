//! Where accepted registrations go

use anyhow::{Context, Result};
use signup_validation::RegistrationRecord;
use tracing::info;

const REDACTED: &str = "[redacted]";

/// Receives a record once it has passed validation
pub trait SubmissionSink {
    fn accept(&self, record: &RegistrationRecord) -> Result<()>;
}

/// Sink that writes the accepted record to the log
///
/// Password fields are replaced before the record is serialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// The record as it appears in the log
    pub fn render(record: &RegistrationRecord) -> Result<String> {
        let redacted = RegistrationRecord {
            password: REDACTED.to_string(),
            confirm_password: REDACTED.to_string(),
            ..record.clone()
        };
        serde_json::to_string(&redacted).context("Failed to serialize registration record")
    }
}

impl SubmissionSink for LogSink {
    fn accept(&self, record: &RegistrationRecord) -> Result<()> {
        let rendered = Self::render(record)?;
        info!(record = %rendered, "registration accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_redacts_passwords() {
        let record = RegistrationRecord {
            first_name: "Jo".to_string(),
            password: "ab12!@#1".to_string(),
            confirm_password: "ab12!@#1".to_string(),
            ..Default::default()
        };

        let rendered = LogSink::render(&record).unwrap();
        assert!(!rendered.contains("ab12!@#1"));
        assert!(rendered.contains(r#""password":"[redacted]""#));
        assert!(rendered.contains(r#""confirmPassword":"[redacted]""#));
        assert!(rendered.contains(r#""firstName":"Jo""#));
    }

    #[test]
    fn test_accept_succeeds() {
        assert!(LogSink.accept(&RegistrationRecord::new()).is_ok());
    }
}
