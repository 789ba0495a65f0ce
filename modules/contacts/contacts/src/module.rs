use std::sync::Arc;

use axum::Router;
use contacts_sdk::ContactsClient;
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::api::rest::openapi::ContactsApiDoc;
use crate::api::rest::routes;
use crate::config::{DatabaseConfig, connect_and_migrate};
use crate::domain::local_client::ContactsLocalClient;
use crate::domain::repo::ContactsRepository;
use crate::domain::service::Service;
use crate::infra::storage::{InMemoryContactsRepository, SeaOrmContactsRepository};

/// Composition root of the contacts module.
///
/// The store is constructed once by the caller and injected here; nothing
/// in the module holds a process-wide connection.
#[derive(Clone)]
pub struct Contacts {
    service: Arc<Service>,
}

impl Contacts {
    #[must_use]
    pub fn new(repo: Arc<dyn ContactsRepository>) -> Self {
        Self {
            service: Arc::new(Service::new(repo)),
        }
    }

    /// Build the module on a SQL store when `db` is given, otherwise on an
    /// in-memory collection.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn init(db: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        info!("Initializing contacts module");
        let repo: Arc<dyn ContactsRepository> = if let Some(cfg) = db {
            let conn = connect_and_migrate(cfg).await?;
            Arc::new(SeaOrmContactsRepository::new(conn))
        } else {
            warn!("No database section found; contacts are kept in memory only");
            Arc::new(InMemoryContactsRepository::new())
        };
        Ok(Self::new(repo))
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// In-process client for other components.
    #[must_use]
    pub fn client(&self) -> Arc<dyn ContactsClient> {
        Arc::new(ContactsLocalClient::new(self.service()))
    }

    /// Mount the REST routes onto `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering contacts REST routes");
        routes::register_routes(router, self.service())
    }

    /// OpenAPI description of the routes added by [`Self::register_rest`].
    #[must_use]
    pub fn openapi() -> utoipa::openapi::OpenApi {
        ContactsApiDoc::openapi()
    }
}
