use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::dto::{ErrResponse, ErrorResponse, ErrorsResponse};
use crate::domain::error::DomainError;

pub const INVALID_BODY: &str = "Invalid request body";
pub const NOT_FOUND: &str = "Contact not found";

/// The collection-endpoint operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Generic 500 body; list and create answer with an `err` field.
    fn store_failure(self) -> Response {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        match self {
            Self::List => err_body(status, "Failed to fetch contacts"),
            Self::Create => err_body(status, "Failed to create Contact"),
            Self::Update => error_body(status, "Failed to update contact"),
            Self::Delete => error_body(status, "Failed to delete contact"),
        }
    }
}

/// Error returned by REST handlers.
#[derive(Debug)]
pub enum ApiError {
    Domain { op: Operation, source: DomainError },
    InvalidBody { op: Operation, rejection: JsonRejection },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub fn list(source: DomainError) -> Self {
        Self::Domain {
            op: Operation::List,
            source,
        }
    }

    #[must_use]
    pub fn create(source: DomainError) -> Self {
        Self::Domain {
            op: Operation::Create,
            source,
        }
    }

    #[must_use]
    pub fn update(source: DomainError) -> Self {
        Self::Domain {
            op: Operation::Update,
            source,
        }
    }

    #[must_use]
    pub fn delete(source: DomainError) -> Self {
        Self::Domain {
            op: Operation::Delete,
            source,
        }
    }

    #[must_use]
    pub fn invalid_body(op: Operation, rejection: JsonRejection) -> Self {
        Self::InvalidBody { op, rejection }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain { op, source } => domain_error_to_response(op, &source),
            Self::InvalidBody { op, rejection } => {
                tracing::debug!(operation = op.as_str(), error = %rejection, "Rejected request body");
                error_body(StatusCode::BAD_REQUEST, INVALID_BODY)
            }
        }
    }
}

/// Map a domain error to the collection endpoint's JSON error shapes.
#[must_use]
pub fn domain_error_to_response(op: Operation, e: &DomainError) -> Response {
    match e {
        DomainError::Validation { errors } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorsResponse {
                errors: errors.clone(),
            }),
        )
            .into_response(),
        DomainError::MissingFields | DomainError::MissingId | DomainError::InvalidId(_) => {
            error_body(StatusCode::BAD_REQUEST, e.to_string())
        }
        DomainError::NotFound { .. } => error_body(StatusCode::NOT_FOUND, NOT_FOUND),
        DomainError::Store(cause) => {
            // Log the cause but don't expose it to the client
            tracing::error!(operation = op.as_str(), error = ?cause, "Contacts store error");
            op.store_failure()
        }
    }
}

fn error_body(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn err_body(status: StatusCode, err: &str) -> Response {
    (
        status,
        Json(ErrResponse {
            err: err.to_owned(),
        }),
    )
        .into_response()
}
