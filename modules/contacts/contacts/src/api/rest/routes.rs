use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::{CONTACTS_PATH, handlers};
use crate::domain::service::Service;

/// Mount the contacts collection endpoint on `router`.
///
/// All four operations share one path and take their input from the JSON
/// body.
#[must_use]
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let contacts = Router::new()
        .route(
            CONTACTS_PATH,
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(Extension(service));

    router.merge(contacts)
}
