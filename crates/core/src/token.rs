//! Login tokens: standard base64 of `id:email:issued_at_ms`.
//!
//! Tokens are unsigned and carry no secret. Anyone can mint one; they only
//! identify a user of the fixed table and expire after [`TOKEN_TTL_HOURS`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, TimeDelta, Utc};

use crate::constants::TOKEN_TTL_HOURS;
use crate::error::{CoreError, Result};
use crate::user::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub user_id: String,
    pub email: String,
    pub issued_at_ms: i64,
}

impl AuthToken {
    #[must_use]
    pub fn issue(user: &User, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            issued_at_ms: now.timestamp_millis(),
        }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}:{}", self.user_id, self.email, self.issued_at_ms))
    }

    /// Decodes a token string.
    ///
    /// The id ends at the first `:` and the timestamp starts after the last,
    /// so an email containing colons survives.
    ///
    /// # Errors
    /// Returns an error if the input is not base64, not UTF-8, lacks the two
    /// separators, or has a non-integer timestamp.
    pub fn decode(token: &str) -> Result<Self> {
        let raw = String::from_utf8(STANDARD.decode(token.trim())?)?;
        let (user_id, rest) = raw
            .split_once(':')
            .ok_or_else(|| CoreError::MalformedToken("missing id separator".to_owned()))?;
        let (email, issued) = rest
            .rsplit_once(':')
            .ok_or_else(|| CoreError::MalformedToken("missing timestamp separator".to_owned()))?;
        let issued_at_ms = issued
            .parse()
            .map_err(|_| CoreError::MalformedToken(format!("invalid timestamp '{issued}'")))?;
        Ok(Self { user_id: user_id.to_owned(), email: email.to_owned(), issued_at_ms })
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let age_ms = now.timestamp_millis().saturating_sub(self.issued_at_ms);
        age_ms > TimeDelta::hours(TOKEN_TTL_HOURS).num_milliseconds()
    }

    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.issued_at_ms)
    }
}
