use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::fields::{Field, FormFields};

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));
static PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("separator pattern is valid"));

/// The rule a single field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    InvalidFormat,
}

impl FieldError {
    /// Text shown next to the offending input.
    pub fn message(self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, f) => format!("{} is required", f.label()),
            (FieldError::TooShort { min }, f) => {
                format!("{} must be at least {} characters", f.label(), min)
            }
            (FieldError::InvalidFormat, Field::Email) => {
                "Please enter a valid email address".to_string()
            }
            (FieldError::InvalidFormat, Field::Phone) => {
                "Please enter a valid phone number".to_string()
            }
            (FieldError::InvalidFormat, f) => format!("{} is invalid", f.label()),
        }
    }
}

/// Per-field validation failures. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.message(field))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Drops the entry for `field` only; returns whether one existed.
    pub fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

/// Runs every field rule and collects the failures.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let checks = [
        (Field::Name, check_name(&fields.name)),
        (Field::Email, check_email(&fields.email)),
        (Field::Phone, check_phone(&fields.phone)),
        (Field::Message, check_message(&fields.message)),
    ];
    for (field, res) in checks {
        if let Err(e) = res {
            errors.insert(field, e);
        }
    }
    errors
}

fn check_min_len(value: &str, min: usize) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required)
    } else if value.chars().count() < min {
        Err(FieldError::TooShort { min })
    } else {
        Ok(())
    }
}

fn check_name(value: &str) -> Result<(), FieldError> {
    check_min_len(value, MIN_NAME_LEN)
}

fn check_message(value: &str) -> Result<(), FieldError> {
    check_min_len(value, MIN_MESSAGE_LEN)
}

fn check_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required)
    } else if !EMAIL_RE.is_match(value) {
        Err(FieldError::InvalidFormat)
    } else {
        Ok(())
    }
}

fn check_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    let digits = PHONE_SEPARATORS.replace_all(value, "");
    if PHONE_RE.is_match(&digits) {
        Ok(())
    } else {
        Err(FieldError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, phone: &str, message: &str) -> FormFields {
        FormFields {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    fn valid() -> FormFields {
        fields(
            "Victor Mulinge",
            "victor@example.com",
            "+254 722 253 660",
            "I'd like to talk about a project.",
        )
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid()).is_empty());
        // minimum lengths are inclusive
        assert!(validate(&fields("Jo", "a@b.co", "1", "0123456789")).is_empty());
    }

    #[test]
    fn test_blank_fields_are_all_reported() {
        let errors = validate(&fields("", "  ", "\t", ""));
        assert_eq!(errors.len(), 4);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(FieldError::Required));
        }
        assert_eq!(errors.message(Field::Phone).unwrap(), "Phone number is required");
        assert_eq!(errors.message(Field::Message).unwrap(), "Message is required");
    }

    #[test]
    fn test_missing_name_only() {
        let errors = validate(&fields("", "a@b.com", "+254722253660", "hello there friend"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::Name).unwrap(), "Name is required");
    }

    #[test]
    fn test_malformed_email_and_short_message() {
        let errors = validate(&fields("Jo", "not-an-email", "123", "short"));
        assert_eq!(errors.len(), 2);
        assert!(!errors.contains(Field::Name));
        assert!(!errors.contains(Field::Phone));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(
            errors.message(Field::Email).unwrap(),
            "Please enter a valid email address"
        );
        assert_eq!(
            errors.get(Field::Message),
            Some(FieldError::TooShort { min: MIN_MESSAGE_LEN })
        );
        assert_eq!(
            errors.message(Field::Message).unwrap(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_name_length_uses_trimmed_chars() {
        assert_eq!(
            check_name("  J  "),
            Err(FieldError::TooShort { min: MIN_NAME_LEN })
        );
        assert_eq!(check_name("Jö"), Ok(()));
        assert_eq!(
            FieldError::TooShort { min: 2 }.message(Field::Name),
            "Name must be at least 2 characters"
        );
    }

    #[test]
    fn test_email_patterns() {
        for ok in ["a@b.c", "first.last@sub.example.org", " padded@example.com "] {
            assert_eq!(check_email(ok), Ok(()), "{ok}");
        }
        for bad in [
            "plain",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "user@example.",
            "us er@example.com",
            "a@b@c.com",
        ] {
            assert_eq!(check_email(bad), Err(FieldError::InvalidFormat), "{bad}");
        }
    }

    #[test]
    fn test_phone_boundaries() {
        for ok in [
            "123",
            "1",
            "+1",
            "+254722253660",
            "(254) 722-253 660",
            "1234567890123456", // leading digit + 15 more
        ] {
            assert_eq!(check_phone(ok), Ok(()), "{ok}");
        }
        for bad in [
            "0123",
            "+0722253660",
            "12345678901234567", // 17 digits
            "+",
            "12a3",
            "++123",
            "---",
            "1٢٣٤٥",  // Arabic-Indic digits
            "+1２３４", // full-width digits
        ] {
            assert_eq!(check_phone(bad), Err(FieldError::InvalidFormat), "{bad}");
        }
    }

    #[test]
    fn test_clear_field_leaves_others() {
        let mut errors = validate(&FormFields::default());
        assert!(errors.clear_field(Field::Email));
        assert!(!errors.clear_field(Field::Email));
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(Field::Name));
        assert!(errors.contains(Field::Phone));
        assert!(errors.contains(Field::Message));
    }
}
