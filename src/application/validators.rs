use serde_json::Value;
use validator::ValidateEmail;

use crate::{
    app_error::{AppError, AppResult},
    entities::email::Email,
};

/// Validates that the input looks like a valid email address.
///
/// On top of the RFC grammar check the domain must be a hostname: at least one
/// dot, no empty labels, and a top-level label of two or more letters. Address
/// literals such as `user@[127.0.0.1]` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || !email.validate_email() {
        return false;
    }

    match email.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && is_hostname_domain(domain),
        None => false,
    }
}

fn is_hostname_domain(domain: &str) -> bool {
    if domain.starts_with('[') || !domain.contains('.') {
        return false;
    }
    if domain.split('.').any(|label| label.is_empty()) {
        return false;
    }

    domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic))
}

pub fn validate_email(raw: &str) -> AppResult<Email> {
    if is_valid_email(raw) {
        Ok(Email::from_validated(raw))
    } else {
        Err(AppError::InvalidEmail)
    }
}

/// Extracts and validates the `email` field of a signup payload.
/// Unknown fields are ignored.
pub fn email_from_payload(payload: &Value) -> AppResult<Email> {
    payload
        .get("email")
        .and_then(Value::as_str)
        .ok_or(AppError::InvalidEmail)
        .and_then(validate_email)
}
