//! Error types for the Foodex server application.
//!
//! Domain-specific error types live in their own submodules; this module
//! aggregates them into a single [`Error`] used by controllers. All errors
//! implement `IntoResponse` for Axum and use `thiserror` for their `Display`
//! and `Error` implementations.

pub mod config;
pub mod detection;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, detection::DetectionError},
};

/// Main error type for the Foodex server application.
///
/// Aggregates domain errors and external library errors so handlers can
/// return a single type and rely on `#[from]` conversions with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Vision-model detection error (upstream failure or bad payload).
    #[error(transparent)]
    DetectionError(#[from] DetectionError),
    /// A requested entity does not exist. Carries the entity display
    /// name used in the `"<Entity> not found"` response body.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Request payload failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Internal failure that has no more specific variant, e.g. a failed
    /// projection source fetch.
    #[error("Internal error: {0}")]
    Internal(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Address binding or serving error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// - 404 Not Found for missing entities, body `{"success": false, "error": "<Entity> not found"}`
/// - 400 Bad Request for validation failures
/// - 502 Bad Gateway for detection upstream failures
/// - 500 Internal Server Error for everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new(format!("{entity} not found"))),
            )
                .into_response(),
            Self::Validation(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(reason))).into_response()
            }
            Self::DetectionError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client so internal details are not exposed.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
