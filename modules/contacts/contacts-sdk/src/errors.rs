//! Public error types for the `contacts` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

use crate::id::ContactId;

/// Errors that can be returned by the `ContactsClient`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactsError {
    /// The input was rejected before reaching the store.
    #[error("Validation error: {}", errors.join(", "))]
    Validation { errors: Vec<String> },

    /// No contact with the specified ID exists.
    #[error("Contact not found: {id}")]
    NotFound { id: ContactId },

    /// The store failed; the cause is not exposed.
    #[error("Internal error")]
    Internal,
}

impl ContactsError {
    /// Create a `Validation` error from one or more messages.
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

    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: ContactId) -> Self {
        Self::NotFound { id }
    }

    /// Create an `Internal` error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
