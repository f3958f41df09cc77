//! Presence-only token gate.
//!
//! A request passes when its `Authorization` header has a non-empty second
//! space-separated segment. The scheme word is not checked, and neither is
//! the token: any value passes. Handlers that care who the caller is must
//! resolve the token themselves.

use axum::extract::Request;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::api_error::{ApiError, UNAUTHORIZED};

/// Raw bearer token of a request that passed the gate.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}

pub async fn require_token(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let Some(token) = bearer_token(req.headers()).map(ToOwned::to_owned) else {
        tracing::debug!(path = %req.uri().path(), "rejected request without token");
        return Err(ApiError::Unauthorized(UNAUTHORIZED));
    };
    req.extensions_mut().insert(BearerToken(token));
    Ok(next.run(req).await)
}
