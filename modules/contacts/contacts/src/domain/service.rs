use std::sync::Arc;

use contacts_sdk::{Contact, ContactId, ContactUpdate, NewContact};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::error::DomainError;
use super::repo::ContactsRepository;
use super::validation;

/// Contacts business operations over an injected store.
pub struct Service {
    repo: Arc<dyn ContactsRepository>,
}

impl Service {
    #[must_use]
    pub fn new(repo: Arc<dyn ContactsRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// [`DomainError::Store`] when the store cannot be read.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        debug!("Listing contacts");
        let contacts = self.repo.find_all().await?;
        debug!(count = contacts.len(), "Fetched contacts");
        Ok(contacts)
    }

    /// # Errors
    /// Validation errors for bad input, [`DomainError::Store`] on store failure.
    pub async fn create_contact(&self, new_contact: NewContact) -> Result<ContactId, DomainError> {
        let NewContact { name, email, phone } = new_contact;
        validation::validate_fields(&name, &email).inspect_err(|e| {
            debug!(error = %e, "Rejected new contact");
        })?;

        let contact = Contact {
            id: ContactId::generate(),
            name,
            email,
            phone: validation::normalize_phone(phone),
            created_at: OffsetDateTime::now_utc(),
        };

        let id = self.repo.insert_one(contact).await?;
        info!(contact_id = %id, "Contact created");
        Ok(id)
    }

    /// # Errors
    /// Validation errors for bad input, [`DomainError::NotFound`] when no
    /// contact has `id`, [`DomainError::Store`] on store failure.
    pub async fn update_contact(
        &self,
        id: ContactId,
        update: ContactUpdate,
    ) -> Result<(), DomainError> {
        validation::validate_fields(&update.name, &update.email)?;

        let update = ContactUpdate {
            phone: validation::normalize_phone(update.phone),
            ..update
        };

        if !self.repo.update_one(id, update).await? {
            warn!(contact_id = %id, "Update target not found");
            return Err(DomainError::not_found(id));
        }

        info!(contact_id = %id, "Contact updated");
        Ok(())
    }

    /// # Errors
    /// [`DomainError::NotFound`] when no contact has `id`,
    /// [`DomainError::Store`] on store failure.
    pub async fn delete_contact(&self, id: ContactId) -> Result<(), DomainError> {
        if !self.repo.delete_one(id).await? {
            warn!(contact_id = %id, "Delete target not found");
            return Err(DomainError::not_found(id));
        }

        info!(contact_id = %id, "Contact deleted");
        Ok(())
    }
}
