//! Directions HTTP client.
//!
//! Requests transit directions restricted to subway and bus, asking the
//! provider to prefer fewer transfers and to return alternatives.

use tracing::debug;

use crate::domain::Itinerary;

use super::convert::convert_routes;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default Directions endpoint.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Configuration for the Directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key passed as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL (defaults to the production API)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Origin and destination of a trip, as free text.
///
/// The provider resolves addresses and place names itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
}

impl DirectionsRequest {
    /// Build a request, trimming both ends and rejecting blanks.
    pub fn new(origin: &str, destination: &str) -> Result<Self, DirectionsError> {
        let origin = origin.trim();
        let destination = destination.trim();

        if origin.is_empty() {
            return Err(DirectionsError::MissingEndpoint("origin"));
        }
        if destination.is_empty() {
            return Err(DirectionsError::MissingEndpoint("destination"));
        }

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    /// Query parameters for a transit request.
    fn query<'a>(&'a self, api_key: &'a str) -> [(&'static str, &'a str); 7] {
        [
            ("origin", self.origin.as_str()),
            ("destination", self.destination.as_str()),
            ("mode", "transit"),
            ("transit_mode", "subway|bus"),
            ("transit_routing_preference", "fewer_transfers"),
            ("alternatives", "true"),
            ("key", api_key),
        ]
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new Directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch candidate itineraries for a trip, in provider order.
    pub async fn plan(&self, request: &DirectionsRequest) -> Result<Vec<Itinerary>, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&request.query(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(200).collect()),
            })?;

        itineraries_from_response(parsed)
    }
}

/// Map a provider response to itineraries or an error.
fn itineraries_from_response(
    response: DirectionsResponse,
) -> Result<Vec<Itinerary>, DirectionsError> {
    match response.status.as_str() {
        "OK" => Ok(convert_routes(&response.routes)),
        "ZERO_RESULTS" | "NOT_FOUND" => {
            debug!(status = %response.status, "no directions found");
            Ok(Vec::new())
        }
        "REQUEST_DENIED" => Err(DirectionsError::Unauthorized),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Err(DirectionsError::RateLimited),
        _ => Err(DirectionsError::Status {
            status: response.status,
            message: response.error_message,
        }),
    }
}
