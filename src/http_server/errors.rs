//! HTTP API errors
//!
//! Every handler failure maps to one of three classes: validation (400),
//! not-found (404), storage (500). Storage detail is logged and never
//! returned to the caller; the response carries a generic category instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::tickets::DraftError;

/// Result type for ticket handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// One of the five required fields is absent, null, or empty
    #[error("Missing required fields")]
    MissingFields,

    /// Payload is structurally unusable (not an object, unknown field,
    /// wrong type)
    #[error("{0}")]
    InvalidBody(String),

    /// No row matched the requested id
    #[error("{0}")]
    NotFound(&'static str),

    /// Underlying database failure; `context` is the route-level message
    /// shown to the caller, `source` stays in the log
    #[error("{context}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl ApiError {
    /// Adapter for `map_err` on repository calls.
    pub fn storage(context: &'static str) -> impl Fn(sqlx::Error) -> ApiError {
        move |source| ApiError::Storage { context, source }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::MissingFields => ApiError::MissingFields,
            other => ApiError::InvalidBody(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let error = match err {
            ApiError::Storage { .. } => Some("internal storage error".to_string()),
            _ => None,
        };
        Self {
            message: err.to_string(),
            error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage { context, source } = &self {
            tracing::error!(error = %source, "{context}");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
