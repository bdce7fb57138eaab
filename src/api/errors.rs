//! # API Errors
//!
//! Error types for the HTTP layer and their status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The store rejected the operation
    #[error("{0}")]
    Store(#[from] StoreError),

    /// The store lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl ApiError {
    /// The status this error maps to.
    ///
    /// The 204-for-empty versus 404-for-no-match split is part of the
    /// documented endpoint contract and is preserved as-is.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 422 Unprocessable Entity
            ApiError::Store(StoreError::EmptyField(_)) => StatusCode::UNPROCESSABLE_ENTITY,

            // 404 Not Found
            ApiError::Store(StoreError::BlogNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::NoMatch) => StatusCode::NOT_FOUND,

            // 204 No Content
            ApiError::Store(StoreError::Empty) => StatusCode::NO_CONTENT,

            // 500 Internal Server Error
            ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 204 carries no body
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
