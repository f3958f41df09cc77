use chatdesk_core::{authenticate, find_user, AuthToken, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Mock login against the fixed account table.
///
/// Tokens are unsigned; [`AuthService::resolve_session`] only checks that a
/// token decodes, is younger than the token lifetime, and names a known
/// account.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthService;

impl AuthService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        self.login_at(email, password, Utc::now())
    }

    pub fn login_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<LoginResponse, ServiceError> {
        tracing::info!(email, "login attempt");
        let Some(user) = authenticate(email, password) else {
            tracing::warn!(email, "login failed: invalid credentials");
            return Err(ServiceError::InvalidCredentials);
        };
        let token = AuthToken::issue(&user, now).encode();
        tracing::info!(email, role = ?user.role, "login successful");
        Ok(LoginResponse { user, token })
    }

    pub fn resolve_session(&self, token: &str) -> Result<User, ServiceError> {
        self.resolve_session_at(token, Utc::now())
    }

    pub fn resolve_session_at(&self, token: &str, now: DateTime<Utc>) -> Result<User, ServiceError> {
        let token = AuthToken::decode(token)?;
        if token.is_expired(now) {
            return Err(ServiceError::TokenExpired);
        }
        find_user(&token.user_id, &token.email).ok_or(ServiceError::UnknownUser)
    }
}
