//! Directions client error types.

use std::fmt;

/// Errors from the Directions HTTP client.
#[derive(Debug)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// HTTP-level error status code
    ApiError { status: u16, message: String },

    /// Provider refused the request (bad or missing API key)
    Unauthorized,

    /// Provider quota exhausted
    RateLimited,

    /// Provider-level status other than success or no results
    Status {
        status: String,
        message: Option<String>,
    },

    /// Origin or destination missing from the request
    MissingEndpoint(&'static str),
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(e) => write!(f, "HTTP error: {e}"),
            DirectionsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DirectionsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DirectionsError::Unauthorized => {
                write!(f, "unauthorized (check GOOGLE_MAPS_API_KEY)")
            }
            DirectionsError::RateLimited => write!(f, "rate limited by directions provider"),
            DirectionsError::Status { status, message } => {
                write!(f, "directions request failed: {status}")?;
                if let Some(message) = message {
                    write!(f, " ({message})")?;
                }
                Ok(())
            }
            DirectionsError::MissingEndpoint(which) => write!(f, "missing {which}"),
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}
