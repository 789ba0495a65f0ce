//! `ContactsClient` trait definition.
//!
//! In-process consumers obtain an implementation from the `contacts` module
//! instead of going through HTTP.

use async_trait::async_trait;

use crate::errors::ContactsError;
use crate::id::ContactId;
use crate::models::{Contact, ContactUpdate, NewContact};

/// Public API trait for the `contacts` module.
///
/// ```ignore
/// let id = client.create_contact(new_contact).await?;
/// client.update_contact(id, update).await?;
/// client.delete_contact(id).await?;
/// ```
#[async_trait]
pub trait ContactsClient: Send + Sync {
    /// List every stored contact in store order.
    async fn list_contacts(&self) -> Result<Vec<Contact>, ContactsError>;

    /// Validate and persist a new contact, returning its assigned ID.
    async fn create_contact(&self, new_contact: NewContact) -> Result<ContactId, ContactsError>;

    /// Replace the name, email and phone of an existing contact.
    async fn update_contact(
        &self,
        id: ContactId,
        update: ContactUpdate,
    ) -> Result<(), ContactsError>;

    /// Remove a contact.
    async fn delete_contact(&self, id: ContactId) -> Result<(), ContactsError>;
}
