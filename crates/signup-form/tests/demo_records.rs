/// The sample records shipped under demos/

use pretty_assertions::assert_eq;
use signup_form::{Field, FormSession, LogSink, RegistrationRecord, SubmitOutcome};

const DEMO_YEAR: i32 = 2026;

fn load(json: &str) -> RegistrationRecord {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_valid_demo_is_accepted_in_its_year() {
    let record = load(include_str!("../../../demos/valid_record.json"));
    let mut session = FormSession::with_record(record);

    assert_eq!(
        session.submit_as_of(DEMO_YEAR, &LogSink).unwrap(),
        SubmitOutcome::Accepted
    );
}

#[test]
fn test_valid_demo_only_fails_birth_date_in_other_years() {
    let record = load(include_str!("../../../demos/valid_record.json"));
    let mut session = FormSession::with_record(record);

    assert_eq!(
        session.submit_as_of(DEMO_YEAR + 1, &LogSink).unwrap(),
        SubmitOutcome::Rejected
    );
    assert_eq!(
        session.errors().fields().collect::<Vec<_>>(),
        vec![Field::BirthDate]
    );
}

#[test]
fn test_invalid_demo_is_rejected() {
    let record = load(include_str!("../../../demos/invalid_record.json"));
    let mut session = FormSession::with_record(record);

    assert_eq!(
        session.submit_as_of(DEMO_YEAR, &LogSink).unwrap(),
        SubmitOutcome::Rejected
    );
    assert_eq!(
        session.errors().fields().collect::<Vec<_>>(),
        vec![
            Field::FirstName,
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
            Field::Age,
            Field::BirthDate,
            Field::Country,
            Field::TermsConsent,
        ]
    );
}
