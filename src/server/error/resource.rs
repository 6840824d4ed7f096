use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: i32 },
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
}

impl ResourceError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound { resource, id } => {
                tracing::debug!(id = %id, "{} not found", resource);

                StatusCode::NOT_FOUND
            }
            Self::Validation(message) => {
                tracing::debug!("Rejected invalid request: {}", message);

                StatusCode::BAD_REQUEST
            }
            Self::Conflict(message) => {
                tracing::debug!("Rejected conflicting request: {}", message);

                StatusCode::CONFLICT
            }
        };

        error_response(status, self.to_string())
    }
}
