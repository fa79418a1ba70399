//! API Error Taxonomy
//!
//! Errors are cloneable so a coalesced token refresh can hand the same
//! failure to every waiter.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response reached us at all (DNS, connection reset, offline)
    #[error("network error: {0}")]
    Network(String),

    /// The request hit the client-side timeout
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Tokens are gone or the refresh exchange was rejected
    #[error("session expired, please log in again")]
    SessionExpired,

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
