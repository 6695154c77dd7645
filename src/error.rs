//! Central error mapping for the gateway.
//!
//! # Responsibilities
//! - Define the domain error kinds produced by handlers and validators
//! - Translate each kind into an HTTP status code
//! - Render the uniform `{ "result": "error", "message": ... }` envelope
//!
//! # Design Decisions
//! - Handlers never build responses for failures; they return `GatewayError`
//!   and the single `IntoResponse` impl below does the mapping
//! - Messages carried in the error are user-facing and already localized

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Domain errors raised while handling one request.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Missing or invalid required fields (HTTP 400).
    #[error("{0}")]
    Validation(String),

    /// Attached file has a MIME type outside the allow-list (HTTP 400).
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Attached file exceeds a configured size cap (HTTP 413).
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Transport failure or non-success reply from the backend (HTTP 500).
    #[error("{0}")]
    Backend(String),
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        GatewayError::Validation(message.into())
    }

    pub fn backend(message: impl Into<String>) -> Self {
        GatewayError::Backend(message.into())
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) | GatewayError::UnsupportedMediaType(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "result": "error",
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_kind() {
        assert_eq!(
            GatewayError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::UnsupportedMediaType("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::PayloadTooLarge("x".into()).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            GatewayError::backend("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_is_preserved() {
        let err = GatewayError::validation("Email wajib dikirim");
        assert_eq!(err.to_string(), "Email wajib dikirim");
    }
}
