//! Error types for the alertbar-alerts crate.

use thiserror::Error;

/// Errors that can occur while querying one Alertmanager environment.
///
/// A fetch error is always scoped to a single environment; the collector
/// logs it and reports that environment with zero counts.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout, or client construction failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body was not a valid alerts payload.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
