use async_trait::async_trait;
use contacts_sdk::{Contact, ContactId, ContactUpdate};
use parking_lot::RwLock;

use crate::domain::repo::ContactsRepository;

/// Process-local contacts collection kept in insertion order.
///
/// Used when no database is configured and as a test double.
#[derive(Default)]
pub struct InMemoryContactsRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.read().is_empty()
    }
}

#[async_trait]
impl ContactsRepository for InMemoryContactsRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<Contact>> {
        Ok(self.contacts.read().clone())
    }

    async fn insert_one(&self, contact: Contact) -> anyhow::Result<ContactId> {
        let mut contacts = self.contacts.write();
        if contacts.iter().any(|c| c.id == contact.id) {
            anyhow::bail!("duplicate contact id {}", contact.id);
        }
        let id = contact.id;
        contacts.push(contact);
        Ok(id)
    }

    async fn update_one(&self, id: ContactId, update: ContactUpdate) -> anyhow::Result<bool> {
        let mut contacts = self.contacts.write();
        let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        existing.name = update.name;
        existing.email = update.email;
        existing.phone = update.phone;
        Ok(true)
    }

    async fn delete_one(&self, id: ContactId) -> anyhow::Result<bool> {
        let mut contacts = self.contacts.write();
        let Some(pos) = contacts.iter().position(|c| c.id == id) else {
            return Ok(false);
        };
        contacts.remove(pos);
        Ok(true)
    }
}
