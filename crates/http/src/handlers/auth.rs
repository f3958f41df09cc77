use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    Json,
};
use std::sync::Arc;

use chatdesk_service::LoginResponse;

use crate::access_gate::BearerToken;
use crate::api_error::{ApiError, INVALID_CREDENTIALS};
use crate::api_types::{LoginRequest, SessionResponse};
use crate::AppState;

/// Any body that does not carry a matching email and password pair is an
/// invalid login, including one that is not JSON at all.
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Ok(Json(req)) = payload else {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    };
    Ok(Json(state.auth_service.login(&req.email, &req.password)?))
}

/// Resolves the caller's token to a user: 401 when it is malformed,
/// older than a day, or names no known account.
pub async fn session(
    State(state): State<Arc<AppState>>,
    Extension(BearerToken(token)): Extension<BearerToken>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = state.auth_service.resolve_session(&token)?;
    Ok(Json(SessionResponse { user }))
}
