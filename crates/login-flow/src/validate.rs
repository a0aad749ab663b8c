//! Field validators shared by the login and sign-up forms.
//!
//! Every function here is pure: the same input always gives the same answer,
//! and a valid value yields `None`.

use crate::message::MessageId;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Passwords shorter than this many characters are rejected.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern")
});

/// Why a field value was rejected.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("Name is required")]
    NameRequired,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// The translated message shown under the field.
    pub fn message_id(self) -> MessageId {
        match self {
            ValidationError::EmailRequired => MessageId::EmailRequired,
            ValidationError::InvalidEmail => MessageId::InvalidEmail,
            ValidationError::PasswordRequired => MessageId::PasswordRequired,
            ValidationError::PasswordTooShort => MessageId::PasswordMinLength,
            ValidationError::NameRequired => MessageId::NameRequired,
            ValidationError::ConfirmPasswordRequired => MessageId::ConfirmPasswordRequired,
            ValidationError::PasswordMismatch => MessageId::PasswordMismatch,
        }
    }
}

pub fn validate_email(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(ValidationError::InvalidEmail);
    }
    None
}

pub fn validate_password(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Some(ValidationError::PasswordTooShort);
    }
    None
}

pub fn validate_name(value: &str) -> Option<ValidationError> {
    value
        .trim()
        .is_empty()
        .then_some(ValidationError::NameRequired)
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Option<ValidationError> {
    if confirmation.is_empty() {
        return Some(ValidationError::ConfirmPasswordRequired);
    }
    if password != confirmation {
        return Some(ValidationError::PasswordMismatch);
    }
    None
}
