//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::outages::OutageSnapshot;
use crate::scoring::ScoringConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached directions client
    pub directions: Arc<CachedDirectionsClient>,

    /// Latest elevator outage snapshot
    pub outages: OutageSnapshot,

    /// Scoring defaults; requests may override them
    pub scoring: Arc<ScoringConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directions: CachedDirectionsClient,
        outages: OutageSnapshot,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            directions: Arc::new(directions),
            outages,
            scoring: Arc::new(scoring),
        }
    }
}
