//! LocationIQ error taxonomy
//!
//! Classification is advisory context for the caller; the client re-raises
//! every failure after classifying it and never recovers on its own.

use thiserror::Error;

/// Errors that can occur during LocationIQ operations
#[derive(Debug, Error)]
pub enum LocationIqError {
    /// Invalid configuration at client construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A precondition was violated before any I/O was attempted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API rejected the key (HTTP 401)
    #[error("Unauthorized: invalid or missing API key")]
    Unauthorized,

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying (if provided by the API)
        retry_after_secs: Option<u64>,
    },

    /// The API rejected the request (HTTP 400); carries the response body
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Any other non-success HTTP status
    #[error("Request failed: HTTP {status}")]
    Http {
        /// The unexpected status code
        status: reqwest::StatusCode,
        /// The underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// Network-level failure before a status was received
    #[error("Connection failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The process-wide client was accessed before initialization
    #[error("LocationIQ client not initialized. Call initialize_client() first")]
    NotInitialized,
}

impl LocationIqError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Http { .. } | Self::Transport(_)
        )
    }
}
