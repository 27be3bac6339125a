//! # HTTP Errors
//!
//! Translates catalog outcomes and extractor rejections into status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogError;

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the book routes
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Raised by the store
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Body or path could not be decoded into the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Integer path id outside the range the store assigns
    #[error("Book not found: {0}")]
    UnknownId(i64),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(CatalogError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnknownId(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
