use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by core domain operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("token is not valid base64: {0}")]
    TokenEncoding(#[from] base64::DecodeError),

    #[error("token is not valid UTF-8: {0}")]
    TokenUtf8(#[from] std::string::FromUtf8Error),

    #[error("malformed token: {0}")]
    MalformedToken(String),
}

pub type Result<T> = StdResult<T, CoreError>;
