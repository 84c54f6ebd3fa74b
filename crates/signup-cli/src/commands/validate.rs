use anyhow::{Context, Result};
use colored::Colorize;
use signup_form::{Config, FormSession, LogSink, RegistrationRecord, SubmitOutcome};
use std::fs;
use std::path::Path;

/// Returns whether the record was accepted
pub async fn execute(config: &Config, path: &Path, offline: bool, as_of: Option<i32>) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {:?}", path))?;
    let record: RegistrationRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record file: {:?}", path))?;

    let directory = super::directory(config, offline);
    let mut session = FormSession::with_record(record)
        .initialize(directory.as_ref())
        .await;

    if !session.countries().is_empty() && !session.is_known_country(&session.record().country) {
        println!(
            "{} country {:?} is not in the directory",
            "note:".cyan(),
            session.record().country
        );
    }

    let outcome = match as_of {
        Some(year) => session.submit_as_of(year, &LogSink)?,
        None => session.submit(&LogSink)?,
    };

    match outcome {
        SubmitOutcome::Accepted => {
            println!("{}", "Registration accepted".green().bold());
            Ok(true)
        }
        SubmitOutcome::Rejected => {
            println!("{}", "Registration rejected".red().bold());
            for (field, message) in session.errors() {
                println!("  {} {}", format!("{}:", field).yellow(), message);
            }
            Ok(false)
        }
    }
}
