#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Shared helpers for contacts integration tests

use axum::Router;
use axum::body::Body;
use contacts::{Contacts, DatabaseConfig};
use http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

/// Contacts module backed by a fresh, migrated in-memory SQLite database.
pub async fn sqlite_module() -> Contacts {
    Contacts::init(Some(&DatabaseConfig::sqlite_memory()))
        .await
        .expect("sqlite module")
}

pub fn router(module: &Contacts) -> Router {
    module.register_rest(Router::new())
}

pub async fn send(app: &Router, method: Method, body: Option<Value>) -> (StatusCode, Value) {
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

pub async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, None).await;
    assert_eq!(status, StatusCode::OK);
    body["contacts"].as_array().cloned().unwrap()
}
