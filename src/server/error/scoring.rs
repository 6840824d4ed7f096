use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{scoring::ScoringError, server::error::error_response};

impl IntoResponse for ScoringError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected live scoring action: {}", self);

        let status = match self {
            ScoringError::InningsComplete => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}
