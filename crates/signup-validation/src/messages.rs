//! Error messages shown next to each failing field

use crate::record::Field;

pub const FIRST_NAME: &str = "Imię musi zawierać co najmniej 2 litery.";
pub const LAST_NAME: &str = "Nazwisko musi zawierać co najmniej 2 litery.";
pub const EMAIL: &str = "Podaj poprawny adres email.";
pub const PASSWORD: &str = "Hasło musi mieć co najmniej 8 znaków, 2 cyfry i 3 znaki specjalne.";
pub const CONFIRM_PASSWORD: &str = "Hasła muszą się zgadzać.";
pub const AGE: &str = "Wiek musi być liczbą od 18 do 99.";
pub const BIRTH_DATE: &str = "Data urodzenia musi być zgodna z wiekiem.";
pub const COUNTRY: &str = "Musisz wybrać kraj.";
pub const TERMS_CONSENT: &str = "Musisz zaakceptować regulamin.";

/// The message for a field, or `None` for fields that carry no rule
pub fn message_for(field: Field) -> Option<&'static str> {
    match field {
        Field::FirstName => Some(FIRST_NAME),
        Field::LastName => Some(LAST_NAME),
        Field::Email => Some(EMAIL),
        Field::Password => Some(PASSWORD),
        Field::ConfirmPassword => Some(CONFIRM_PASSWORD),
        Field::Age => Some(AGE),
        Field::BirthDate => Some(BIRTH_DATE),
        Field::Country => Some(COUNTRY),
        Field::TermsConsent => Some(TERMS_CONSENT),
        Field::Gender | Field::MarketingConsent => None,
    }
}
