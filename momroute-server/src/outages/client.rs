//! NYCT elevator/escalator outage feed client.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::domain::InaccessibleStations;

use super::error::OutageError;
use super::normalize::normalize_feed;

/// Default URL of the current-outages feed.
const DEFAULT_FEED_URL: &str =
    "https://api-endpoint.mta.info/Dataservice/mtagtfsfeeds/nyct%2Fnyct_ene.json";

/// Configuration for the outage feed client.
#[derive(Debug, Clone)]
pub struct OutageClientConfig {
    /// Optional API key sent as `x-api-key`
    pub api_key: Option<String>,
    /// Feed URL
    pub feed_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OutageClientConfig {
    /// Create a config pointing at the public feed.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OutageClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Client for the outage feed.
#[derive(Debug, Clone)]
pub struct OutageClient {
    http: reqwest::Client,
    feed_url: String,
}

impl OutageClient {
    /// Create a new outage feed client.
    pub fn new(config: OutageClientConfig) -> Result<Self, OutageError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let value = HeaderValue::from_str(key).map_err(|_| OutageError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            feed_url: config.feed_url,
        })
    }

    /// Fetch the raw feed body as JSON.
    pub async fn fetch_raw(&self) -> Result<Value, OutageError> {
        let response = self.http.get(&self.feed_url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(OutageError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OutageError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| OutageError::Json {
            message: e.to_string(),
        })
    }

    /// Fetch the feed and reduce it to the stations lacking elevator service.
    pub async fn fetch_inaccessible(&self) -> Result<InaccessibleStations, OutageError> {
        let raw = self.fetch_raw().await?;
        Ok(normalize_feed(&raw)?)
    }
}
