//! Error types for the Pavilion server application.
//!
//! Each domain has its own error enum (configuration, role checks, resource lookups and
//! validation, live scoring). They are aggregated into [`Error`], which every service and
//! controller returns. All errors implement `IntoResponse` so handlers can use `?` directly,
//! and `thiserror` provides the `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod resource;
pub mod retry;
pub mod scoring;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, label::UnknownLabel},
    scoring::ScoringError,
    server::error::{auth::AuthError, config::ConfigError, resource::ResourceError},
};

/// Main error type for the Pavilion server application.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors and database errors convert
/// automatically through the `?` operator.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Role errors (insufficient role, unknown role header)
/// - Resource errors (missing records, invalid input, conflicting state)
/// - Scoring errors (deliveries or selections rejected by the live innings)
/// - Database errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Role error (missing permission or unrecognised role header).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Resource error (not found, validation failure, conflict).
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Live scoring rule violation.
    #[error(transparent)]
    ScoringError(#[from] ScoringError),
    /// Internal error indicating a bug or corrupt stored data.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, unknown role header, rejected deliveries
/// - 403 Forbidden - Role does not permit the operation
/// - 404 Not Found - Missing records or live sessions
/// - 409 Conflict - Duplicate records, records still referenced, completed innings
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            Self::ScoringError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Labels read back from the database are trusted; one that fails to parse means the stored
/// data is corrupt rather than the request being invalid.
impl From<UnknownLabel> for Error {
    fn from(err: UnknownLabel) -> Self {
        Self::InternalError(format!("Stored value could not be read: {}", err))
    }
}

/// Builds a JSON error response with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
