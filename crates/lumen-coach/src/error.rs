//! Coach error types.

use thiserror::Error;

/// Errors from generating a coaching insight.
#[derive(Debug, Error)]
pub enum CoachError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse the response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response parsed but held no candidate text.
    #[error("response contained no insight text")]
    EmptyResponse,

    /// No API key is configured.
    #[error("coach is not configured (missing API key)")]
    NotConfigured,
}

impl CoachError {
    /// Whether the request never got a response (DNS, connect, timeout).
    #[must_use]
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}
