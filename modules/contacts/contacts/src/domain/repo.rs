use async_trait::async_trait;
use contacts_sdk::{Contact, ContactId, ContactUpdate};

/// Document-store port for the contacts collection.
///
/// Every method is a single-document operation; atomicity is whatever the
/// backing store provides for one document.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// All documents in store order.
    async fn find_all(&self) -> anyhow::Result<Vec<Contact>>;

    /// Persist a fully formed contact and return its identifier.
    async fn insert_one(&self, contact: Contact) -> anyhow::Result<ContactId>;

    /// Replace name/email/phone of the document with `id`.
    /// Returns `false` when no document matched.
    async fn update_one(&self, id: ContactId, update: ContactUpdate) -> anyhow::Result<bool>;

    /// Remove the document with `id`. Returns `false` when nothing was deleted.
    async fn delete_one(&self, id: ContactId) -> anyhow::Result<bool>;
}
