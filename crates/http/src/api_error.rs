//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses of the form `{"error": "message"}`.
//! Messages are fixed per failure kind; underlying causes are logged, never
//! returned, so callers cannot tell an upstream outage from a storage fault.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chatdesk_service::ServiceError;

pub const UNAUTHORIZED: &str = "Unauthorized";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const CHAT_FAILED: &str = "Failed to get response";
pub const SETTINGS_UPDATE_FAILED: &str = "Failed to update settings";

/// API error with HTTP status code and human-readable message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: the body could not be read as the expected JSON.
    BadRequest(String),
    /// 401 Unauthorized: missing token, bad credentials, or an unusable token.
    Unauthorized(&'static str),
    /// 500 Internal Server Error: details are logged, a static message is returned.
    Internal { message: &'static str, source: anyhow::Error },
}

impl ApiError {
    pub fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal { message, source: source.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_owned()),
            Self::Internal { message, source } => {
                tracing::error!(error = ?source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => Self::Unauthorized(INVALID_CREDENTIALS),
            ref e if e.is_unauthorized() => Self::Unauthorized(UNAUTHORIZED),
            ServiceError::Upstream(_) => Self::internal(CHAT_FAILED, err),
            ServiceError::Storage(_) => Self::internal(SETTINGS_UPDATE_FAILED, err),
            _ => Self::internal("internal server error", err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
