//! API boundary errors.
//!
//! The single place where crate error kinds become HTTP status codes. Exactly
//! one status is written per error: NotFound maps to 404, everything else
//! uncaught maps to 500. Validation rejections are produced earlier, by the
//! gate in `crate::api::validate`, and carry their own 400 body.

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::api::envelope::ApiEnvelope;
use crate::api::validate::ValidationErrorBody;
use crate::errors::Error;

#[derive(Debug)]
pub enum ApiError {
    /// Request-shape rejection from the validation gate (HTTP 400)
    Validation(ValidationErrorBody),
    /// Referenced resource does not exist or is soft-deleted (HTTP 404)
    NotFound(String),
    /// Any other uncaught failure (HTTP 500)
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(body) => {
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound(message) => {
                let message = if message.is_empty() { "Not found".to_string() } else { message };
                (StatusCode::NOT_FOUND, Json(ApiEnvelope::failure(message))).into_response()
            }
            ApiError::Internal(message) => {
                let message = if message.is_empty() {
                    "Internal Server Error".to_string()
                } else {
                    message
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiEnvelope::failure(message)),
                )
                    .into_response()
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(message) => ApiError::NotFound(message),
            other => {
                tracing::error!(error = %other, "Unhandled error at API boundary");
                ApiError::Internal(other.to_string())
            }
        }
    }
}
