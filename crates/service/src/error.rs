//! Typed error enum for the service layer.
//!
//! Unifies storage, upstream, and credential failures so the HTTP layer can
//! pick a status code without downcasting.

use chatdesk_core::CoreError;
use chatdesk_llm::LlmError;
use chatdesk_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, LLM, and auth failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reading or writing the settings file failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The upstream completion API call failed, for any reason.
    #[error("upstream: {0}")]
    Upstream(#[from] LlmError),

    /// No account matches the supplied email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The bearer token could not be decoded.
    #[error("invalid token: {0}")]
    InvalidToken(#[from] CoreError),

    /// The bearer token is older than the token lifetime.
    #[error("token expired")]
    TokenExpired,

    /// The token decodes but names no known account.
    #[error("unknown user")]
    UnknownUser,
}

impl ServiceError {
    /// Whether this error should be reported to the caller as 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::InvalidToken(_) | Self::TokenExpired | Self::UnknownUser
        )
    }
}
