//! Caching layer for directions responses.
//!
//! Transit directions for the same origin/destination barely change over a
//! few minutes, while each provider call is billed. We cache the converted
//! itineraries keyed on the case-folded trip endpoints.
//!
//! Scores are never cached: the outage snapshot and scoring config change
//! independently, so ranking is recomputed on every request.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::directions::{DirectionsClient, DirectionsError, DirectionsRequest};
use crate::domain::Itinerary;

/// Cache key: (origin, destination), both trimmed and lowercased.
type TripKey = (String, String);

/// Cached itinerary list.
type TripEntry = Arc<Vec<Itinerary>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for directions responses.
pub struct DirectionsCache {
    trips: MokaCache<TripKey, TripEntry>,
}

impl DirectionsCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let trips = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { trips }
    }

    /// Compute the cache key for a request.
    fn key(request: &DirectionsRequest) -> TripKey {
        (
            request.origin.trim().to_lowercase(),
            request.destination.trim().to_lowercase(),
        )
    }

    /// Get a cached entry.
    pub async fn get(&self, request: &DirectionsRequest) -> Option<TripEntry> {
        self.trips.get(&Self::key(request)).await
    }

    /// Insert an entry into the cache.
    pub async fn insert(&self, request: &DirectionsRequest, entry: TripEntry) {
        self.trips.insert(Self::key(request), entry).await;
    }

    /// Approximate number of cached trips.
    pub fn entry_count(&self) -> u64 {
        self.trips.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.trips.invalidate_all();
    }
}

/// Directions client with caching.
///
/// Wraps a `DirectionsClient` and caches converted itineraries.
pub struct CachedDirectionsClient {
    client: DirectionsClient,
    cache: DirectionsCache,
}

impl CachedDirectionsClient {
    /// Create a new cached client.
    pub fn new(client: DirectionsClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: DirectionsCache::new(cache_config),
        }
    }

    /// Get itineraries for a trip, using cache if available.
    pub async fn plan(&self, request: &DirectionsRequest) -> Result<TripEntry, DirectionsError> {
        if let Some(cached) = self.cache.get(request).await {
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                cached_trips = self.cache.entry_count(),
                "directions cache hit"
            );
            return Ok(cached);
        }

        let itineraries = Arc::new(self.client.plan(request).await?);
        self.cache.insert(request, Arc::clone(&itineraries)).await;

        Ok(itineraries)
    }

    /// Get the cache (for monitoring or invalidation).
    pub fn cache(&self) -> &DirectionsCache {
        &self.cache
    }
}
