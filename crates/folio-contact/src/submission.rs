//! Contact submission payload and field validation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rough email shape check: something@something.tld, no whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Field-level validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A contact form submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validate all fields, collecting every failure.
    ///
    /// Length rules count characters, not bytes. An `Err` carries one
    /// message list per failing field; nothing may be persisted when any
    /// field fails.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.chars().count() < 2 {
            errors
                .entry("name".to_string())
                .or_default()
                .push("Name must be at least 2 characters".to_string());
        }

        if !EMAIL_RE.is_match(&self.email) {
            errors
                .entry("email".to_string())
                .or_default()
                .push("Please enter a valid email address".to_string());
        }

        if self.subject.chars().count() < 5 {
            errors
                .entry("subject".to_string())
                .or_default()
                .push("Subject must be at least 5 characters".to_string());
        }

        if self.message.chars().count() < 10 {
            errors
                .entry("message".to_string())
                .or_default()
                .push("Message must be at least 10 characters".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "I would like to discuss a project.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut s = valid_submission();
        s.name = "A".to_string();
        let errors = s.validate().unwrap_err();
        assert_eq!(
            errors["name"],
            vec!["Name must be at least 2 characters".to_string()]
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        for bad in ["not-an-email", "a@b", "a b@c.com", "@example.com", ""] {
            let mut s = valid_submission();
            s.email = bad.to_string();
            let errors = s.validate().unwrap_err();
            assert!(errors.contains_key("email"), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_short_subject_rejected() {
        let mut s = valid_submission();
        s.subject = "Hey".to_string();
        let errors = s.validate().unwrap_err();
        assert!(errors.contains_key("subject"));
    }

    #[test]
    fn test_short_message_rejected() {
        let mut s = valid_submission();
        s.message = "Too short".to_string();
        let errors = s.validate().unwrap_err();
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn test_all_failures_collected() {
        let s = ContactSubmission {
            name: "".to_string(),
            email: "nope".to_string(),
            subject: "".to_string(),
            message: "".to_string(),
        };
        let errors = s.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_length_rules_count_chars_not_bytes() {
        let mut s = valid_submission();
        // Two characters, more than two bytes.
        s.name = "éé".to_string();
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_boundary_lengths() {
        let mut s = valid_submission();
        s.name = "Al".to_string();
        s.subject = "12345".to_string();
        s.message = "1234567890".to_string();
        assert!(s.validate().is_ok());
    }
}
