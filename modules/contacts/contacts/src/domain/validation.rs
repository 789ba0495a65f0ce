//! Input rules for contact fields.
//!
//! Two layers run in order and the first rejection wins:
//! 1. [`schema_errors`] collects one message per failing field.
//! 2. [`check_presence`] rejects empty names or emails.

use std::sync::LazyLock;

use contacts_sdk::ContactId;
use regex::Regex;

use super::error::DomainError;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Invalid email address";

#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Basic `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Schema layer: every failing field contributes one message.
#[must_use]
pub fn schema_errors(name: &str, email: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push(NAME_REQUIRED.to_owned());
    }
    if !is_valid_email(email) {
        errors.push(INVALID_EMAIL.to_owned());
    }
    errors
}

/// Presence layer.
///
/// # Errors
/// Returns [`DomainError::MissingFields`] when either value is empty.
/// Whitespace counts as a value.
pub fn check_presence(name: &str, email: &str) -> Result<(), DomainError> {
    if name.is_empty() || email.is_empty() {
        return Err(DomainError::MissingFields);
    }
    Ok(())
}

/// Run both layers.
///
/// # Errors
/// [`DomainError::Validation`] from the schema layer, otherwise
/// [`DomainError::MissingFields`] from the presence layer.
pub fn validate_fields(name: &str, email: &str) -> Result<(), DomainError> {
    let errors = schema_errors(name, email);
    if !errors.is_empty() {
        return Err(DomainError::Validation { errors });
    }
    check_presence(name, email)
}

/// Absent and empty phone numbers are both stored as null.
#[must_use]
pub fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone.filter(|p| !p.is_empty())
}

/// Translate an externally supplied identifier.
///
/// # Errors
/// [`DomainError::MissingId`] for a missing or empty value,
/// [`DomainError::InvalidId`] when it is not 24 hex digits.
pub fn parse_contact_id(raw: Option<&str>) -> Result<ContactId, DomainError> {
    match raw {
        None | Some("") => Err(DomainError::MissingId),
        Some(s) => Ok(ContactId::parse_hex(s)?),
    }
}
