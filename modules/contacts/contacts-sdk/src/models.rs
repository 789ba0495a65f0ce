//! Public models for the `contacts` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `contacts` module and its consumers.

use time::OffsetDateTime;

use crate::id::ContactId;

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Data for creating a new contact.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl NewContact {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone,
        }
    }
}

/// Replacement values for the mutable fields of a contact.
///
/// `id` and `created_at` are never part of an update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactUpdate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl ContactUpdate {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone,
        }
    }
}

impl From<NewContact> for ContactUpdate {
    fn from(c: NewContact) -> Self {
        Self {
            name: c.name,
            email: c.email,
            phone: c.phone,
        }
    }
}
