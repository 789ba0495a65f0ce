use contacts_sdk::{ContactId, ContactsError, InvalidContactId};
use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    /// Field-level validation failures, in field order.
    #[error("Validation failed: {}", errors.join(", "))]
    Validation { errors: Vec<String> },

    #[error("Name and email are required.")]
    MissingFields,

    #[error("Contact id is required")]
    MissingId,

    #[error("Invalid contact id")]
    InvalidId(#[from] InvalidContactId),

    #[error("Contact not found: {id}")]
    NotFound { id: ContactId },

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl DomainError {
    #[must_use]
    pub fn validation<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn not_found(id: ContactId) -> Self {
        Self::NotFound { id }
    }

    /// True for errors raised before the store is touched.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::MissingFields | Self::MissingId | Self::InvalidId(_)
        )
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for ContactsError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation { errors } => Self::Validation { errors },
            DomainError::MissingFields | DomainError::MissingId | DomainError::InvalidId(_) => {
                Self::validation([e.to_string()])
            }
            DomainError::NotFound { id } => Self::not_found(id),
            DomainError::Store(_) => Self::internal(),
        }
    }
}
