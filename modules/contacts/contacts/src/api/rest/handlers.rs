//! REST handlers for the contacts collection endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::extract::rejection::JsonRejection;
use http::StatusCode;
use tracing::field::Empty;

use super::dto::{
    CreateContactReq, CreateContactResponse, DeleteContactReq, ErrResponse, ErrorResponse,
    ErrorsResponse, ListContactsResponse, MessageResponse, UpdateContactReq,
};
use super::error::{ApiError, ApiResult, Operation};
use crate::domain::service::Service;
use crate::domain::validation::parse_contact_id;

/// GET /api/contacts
///
/// Returns every stored contact.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    operation_id = "contacts.list",
    responses(
        (status = 200, description = "All contacts", body = ListContactsResponse),
        (status = 500, description = "Store unavailable", body = ErrResponse),
    )
)]
#[tracing::instrument(skip_all, fields(count = Empty))]
pub async fn list_contacts(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<ListContactsResponse>> {
    let contacts = svc.list_contacts().await.map_err(ApiError::list)?;
    tracing::Span::current().record("count", contacts.len());

    Ok(Json(ListContactsResponse {
        contacts: contacts.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/contacts
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    operation_id = "contacts.create",
    request_body = CreateContactReq,
    responses(
        (status = 201, description = "Contact created", body = CreateContactResponse),
        (status = 400, description = "Schema validation failed", body = ErrorsResponse),
        (status = 500, description = "Store unavailable", body = ErrResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_contact(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<CreateContactReq>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateContactResponse>)> {
    let Json(req) = payload.map_err(|r| ApiError::invalid_body(Operation::Create, r))?;

    let id = svc
        .create_contact(req.into())
        .await
        .map_err(ApiError::create)?;

    Ok((StatusCode::CREATED, Json(CreateContactResponse::created(id))))
}

/// PUT /api/contacts
///
/// Replaces `name`, `email` and `phone` of the contact named by `id`.
#[utoipa::path(
    put,
    path = "/api/contacts",
    tag = "Contacts",
    operation_id = "contacts.update",
    request_body = UpdateContactReq,
    responses(
        (status = 200, description = "Contact updated", body = MessageResponse),
        (status = 400, description = "Missing or invalid id, or invalid fields", body = ErrorResponse),
        (status = 404, description = "No contact with this id", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_contact(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<UpdateContactReq>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload.map_err(|r| ApiError::invalid_body(Operation::Update, r))?;
    let (raw_id, update) = req.into_parts();
    let id = parse_contact_id(raw_id.as_deref()).map_err(ApiError::update)?;

    svc.update_contact(id, update)
        .await
        .map_err(ApiError::update)?;

    Ok(Json(MessageResponse::new("Contact updated")))
}

/// DELETE /api/contacts
#[utoipa::path(
    delete,
    path = "/api/contacts",
    tag = "Contacts",
    operation_id = "contacts.delete",
    request_body = DeleteContactReq,
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 400, description = "Missing or invalid id", body = ErrorResponse),
        (status = 404, description = "No contact with this id", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_contact(
    Extension(svc): Extension<Arc<Service>>,
    payload: Result<Json<DeleteContactReq>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload.map_err(|r| ApiError::invalid_body(Operation::Delete, r))?;
    let id = parse_contact_id(req.id.as_deref()).map_err(ApiError::delete)?;

    svc.delete_contact(id).await.map_err(ApiError::delete)?;

    Ok(Json(MessageResponse::new("Contact deleted")))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::api::rest::routes::register_routes;
    use crate::domain::repo::ContactsRepository;
    use crate::infra::storage::InMemoryContactsRepository;
    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use contacts_sdk::{Contact, ContactId, ContactUpdate};
    use http::{Method, Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct FailingRepository;

    #[async_trait]
    impl ContactsRepository for FailingRepository {
        async fn find_all(&self) -> anyhow::Result<Vec<Contact>> {
            anyhow::bail!("store offline")
        }

        async fn insert_one(&self, _contact: Contact) -> anyhow::Result<ContactId> {
            anyhow::bail!("store offline")
        }

        async fn update_one(&self, _id: ContactId, _update: ContactUpdate) -> anyhow::Result<bool> {
            anyhow::bail!("store offline")
        }

        async fn delete_one(&self, _id: ContactId) -> anyhow::Result<bool> {
            anyhow::bail!("store offline")
        }
    }

    fn app_with(repo: Arc<dyn ContactsRepository>) -> Router {
        register_routes(Router::new(), Arc::new(Service::new(repo)))
    }

    fn app() -> Router {
        app_with(Arc::new(InMemoryContactsRepository::new()))
    }

    async fn call(app: &Router, method: Method, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri("/api/contacts");
        let req = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create(app: &Router, body: Value) -> String {
        let (status, resp) = call(app, Method::POST, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        resp["contactId"].as_str().unwrap().to_owned()
    }

    #[tokio::test]
    async fn create_then_list() {
        let app = app();
        let (status, body) = call(
            &app,
            Method::POST,
            Some(json!({ "name": "Ada", "email": "ada@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Contact Created");
        let id = body["contactId"].as_str().unwrap();
        assert_eq!(id.len(), 24);

        let (status, body) = call(&app, Method::GET, None).await;
        assert_eq!(status, StatusCode::OK);
        let contacts = body["contacts"].as_array().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0]["id"], id);
        assert_eq!(contacts[0]["name"], "Ada");
        assert_eq!(contacts[0]["email"], "ada@x.com");
        assert_eq!(contacts[0]["phone"], Value::Null);
        assert!(contacts[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn create_reports_every_schema_failure() {
        let app = app();
        let (status, body) = call(&app, Method::POST, Some(json!({ "email": "bad" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "errors": ["Name is required", "Invalid email address"] })
        );

        let (_, body) = call(&app, Method::GET, None).await;
        assert_eq!(body["contacts"], json!([]));
    }

    #[tokio::test]
    async fn create_accepts_whitespace_name() {
        let app = app();
        let (status, body) = call(
            &app,
            Method::POST,
            Some(json!({ "name": "   ", "email": "a@b.co" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Contact Created");

        let (_, body) = call(&app, Method::GET, None).await;
        assert_eq!(body["contacts"][0]["name"], "   ");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let app = app();
        let (status, body) = call(&app, Method::POST, Some(json!({ "name": 42 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body" }));

        let req = Request::builder()
            .method(Method::PUT)
            .uri("/api/contacts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let app = app();
        let id = create(&app, json!({ "name": "Ada", "email": "ada@x.com", "phone": "1" })).await;

        let (status, body) = call(
            &app,
            Method::PUT,
            Some(json!({ "id": id, "name": "Ada L", "email": "ada@y.com", "phone": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Contact updated" }));

        let (_, body) = call(&app, Method::GET, None).await;
        let c = &body["contacts"][0];
        assert_eq!(c["id"], id.as_str());
        assert_eq!(c["name"], "Ada L");
        assert_eq!(c["email"], "ada@y.com");
        assert_eq!(c["phone"], Value::Null);
    }

    #[tokio::test]
    async fn update_and_delete_check_id_first() {
        let app = app();
        for method in [Method::PUT, Method::DELETE] {
            let (status, body) = call(&app, method.clone(), Some(json!({}))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Contact id is required" }));

            let (status, body) = call(&app, method, Some(json!({ "id": "xyz" }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Invalid contact id" }));
        }
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let app = app();
        let id = ContactId::generate().to_hex();

        let (status, body) = call(
            &app,
            Method::PUT,
            Some(json!({ "id": id, "name": "Ada", "email": "ada@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Contact not found" }));

        let (status, _) = call(&app, Method::DELETE, Some(json!({ "id": id }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_twice() {
        let app = app();
        let id = create(&app, json!({ "name": "Ada", "email": "ada@x.com" })).await;

        let (status, body) = call(&app, Method::DELETE, Some(json!({ "id": id }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Contact deleted" }));

        let (status, _) = call(&app, Method::DELETE, Some(json!({ "id": id }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failures_are_masked() {
        let app = app_with(Arc::new(FailingRepository));
        let id = ContactId::generate().to_hex();

        let (status, body) = call(&app, Method::GET, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "err": "Failed to fetch contacts" }));

        let (status, body) = call(
            &app,
            Method::POST,
            Some(json!({ "name": "Ada", "email": "ada@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "err": "Failed to create Contact" }));

        let (status, body) = call(
            &app,
            Method::PUT,
            Some(json!({ "id": id, "name": "Ada", "email": "ada@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to update contact" }));

        let (status, body) = call(&app, Method::DELETE, Some(json!({ "id": id }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to delete contact" }));
    }
}
