use std::sync::Arc;

use async_trait::async_trait;
use contacts_sdk::{Contact, ContactId, ContactUpdate, ContactsClient, ContactsError, NewContact};

use super::service::Service;

/// In-process adapter implementing the SDK client on top of the domain service.
pub struct ContactsLocalClient {
    service: Arc<Service>,
}

impl ContactsLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ContactsClient for ContactsLocalClient {
    async fn list_contacts(&self) -> Result<Vec<Contact>, ContactsError> {
        self.service.list_contacts().await.map_err(Into::into)
    }

    async fn create_contact(&self, new_contact: NewContact) -> Result<ContactId, ContactsError> {
        self.service
            .create_contact(new_contact)
            .await
            .map_err(Into::into)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        update: ContactUpdate,
    ) -> Result<(), ContactsError> {
        self.service
            .update_contact(id, update)
            .await
            .map_err(Into::into)
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), ContactsError> {
        self.service.delete_contact(id).await.map_err(Into::into)
    }
}
