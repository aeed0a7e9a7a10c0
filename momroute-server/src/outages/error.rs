//! Outage feed error types.

use crate::domain::InvalidInput;

/// Errors that can occur when fetching the outage feed.
#[derive(Debug, thiserror::Error)]
pub enum OutageError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed rejected our credentials
    #[error("unauthorized: check MTA_API_KEY")]
    Unauthorized,

    /// Feed returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Response parsed but was not a list of records
    #[error("unexpected feed shape: {0}")]
    Feed(#[from] InvalidInput),
}
