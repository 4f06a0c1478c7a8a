//! Contact form validation

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domains::contact::models::{ContactForm, ContactMessage};

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// First failing rule of a submission. The display text is shown to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name, email, and message are required")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Simple `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// Validate a submitted form. Presence is checked before email format.
pub fn validate_contact_form(form: ContactForm) -> Result<ContactMessage, ValidationError> {
    let (Some(name), Some(email), Some(message)) = (
        present(form.name),
        present(form.email),
        present(form.message),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(ContactMessage {
        name,
        email,
        subject: present(form.subject),
        message,
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
