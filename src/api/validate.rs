//! Request validation gate.
//!
//! Typed extractors that sit in front of every handler accepting structured
//! input: they deserialize the designated request part (body or query string,
//! with serde performing the declared type coercions), reject unrecognized
//! fields, run the DTO's declared constraints, and either hand the handler a
//! validated value or short-circuit with HTTP 400 listing every failing field.
//! The gate holds no state and is shared safely across concurrent requests.

use std::collections::BTreeMap;

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::api::error::ApiError;

/// One failing field with its constraint-code → message map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorDetail {
    pub property: String,
    pub constraints: BTreeMap<String, String>,
}

/// HTTP 400 body listing every failing field, not just the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub message: String,
    pub errors: Vec<FieldErrorDetail>,
}

impl ValidationErrorBody {
    /// Build the body from declared-constraint failures.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let mut details: Vec<FieldErrorDetail> = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let constraints = field_errors
                    .iter()
                    .map(|e| {
                        let message = e
                            .message
                            .as_ref()
                            .map_or("Invalid value".to_string(), |m| m.to_string());
                        (e.code.to_string(), message)
                    })
                    .collect();
                FieldErrorDetail { property: field.to_string(), constraints }
            })
            .collect();
        details.sort_by(|a, b| a.property.cmp(&b.property));

        Self { message: "Validation failed".to_string(), errors: details }
    }

    /// Build the body for a request part that failed to deserialize at all
    /// (wrong type, malformed JSON, unknown field, invalid enum value).
    pub fn from_parse_error<S: Into<String>>(part: &str, detail: S) -> Self {
        let mut constraints = BTreeMap::new();
        constraints.insert("parse".to_string(), detail.into());

        Self {
            message: "Validation failed".to_string(),
            errors: vec![FieldErrorDetail { property: part.to_string(), constraints }],
        }
    }
}

/// JSON body extractor that enforces the target DTO's declared constraints.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationErrorBody::from_parse_error(
                "body",
                rejection.body_text(),
            ))
        })?;

        value.validate().map_err(|errors| {
            ApiError::Validation(ValidationErrorBody::from_validation_errors(&errors))
        })?;

        Ok(ValidJson(value))
    }
}

/// Query-string extractor that enforces the target DTO's declared constraints.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) =
            Query::<T>::from_request_parts(parts, state).await.map_err(|rejection| {
                ApiError::Validation(ValidationErrorBody::from_parse_error(
                    "query",
                    rejection.body_text(),
                ))
            })?;

        value.validate().map_err(|errors| {
            ApiError::Validation(ValidationErrorBody::from_validation_errors(&errors))
        })?;

        Ok(ValidQuery(value))
    }
}
