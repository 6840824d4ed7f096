use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::{label::UnknownLabel, role::Role},
    server::error::error_response,
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("This action requires the {0} role")]
    Forbidden(Role),
    #[error(transparent)]
    InvalidRole(UnknownLabel),
    #[error("Role header is not valid UTF-8")]
    MalformedRoleHeader,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Forbidden(required) => {
                tracing::debug!(required = %required, "Rejected request lacking required role");

                error_response(StatusCode::FORBIDDEN, "Access denied")
            }
            Self::InvalidRole(_) | Self::MalformedRoleHeader => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
        }
    }
}
