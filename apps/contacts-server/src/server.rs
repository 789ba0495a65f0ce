use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Json, Router};
use contacts::Contacts;
use http::{Method, Request, Response, header};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ServerConfig;
use crate::request_id::{self, MakeReqId};
use crate::signals;

#[allow(clippy::unused_async)]
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

#[allow(clippy::unused_async)]
async fn healthz() -> &'static str {
    "ok"
}

#[allow(clippy::unused_async)]
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(Contacts::openapi())
}

/// Full HTTP surface: probes, the OpenAPI document and the contacts routes,
/// wrapped in the middleware stack.
#[must_use]
pub fn build_router(contacts: &Contacts, cfg: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(healthz))
        .route("/openapi.json", get(openapi_json));

    apply_middleware_stack(contacts.register_rest(router), cfg)
}

fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(request_id::REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &Response<axum::body::Body>, latency: Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!(parent: span, "Request finished");
                },
            ),
    )
}

/// Layers are registered innermost first. At runtime a request passes
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> `BodyLimit` -> CORS -> router.
fn apply_middleware_stack(mut router: Router, cfg: &ServerConfig) -> Router {
    if cfg.cors_enabled {
        router = router.layer(build_cors_layer());
    }

    router = router.layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(cfg.body_limit_bytes));

    router = apply_trace_layer(router);

    let x_request_id = request_id::header();
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeReqId))
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
///
/// # Errors
/// Returns an error if the listener fails.
pub async fn serve_with_shutdown<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(contacts: &Contacts, cfg: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;

    let router = build_router(contacts, cfg);
    serve_with_shutdown(listener, router, async {
        if let Err(e) = signals::wait_for_shutdown().await {
            tracing::error!(error = %e, "Signal handling failed; shutting down");
        }
    })
    .await
}
