//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{InaccessibleStations, InvalidInput, StationKey};
use crate::outages::normalize_feed;
use crate::scoring::{ScoredItinerary, preferred_of};

/// Request to plan routes between two places.
#[derive(Debug, Deserialize)]
pub struct PlanRoutesRequest {
    /// Free-text origin (address or place)
    pub origin: String,

    /// Free-text destination
    pub destination: String,

    /// Walking budget in minutes (defaults to the server's)
    pub max_walk_mins: Option<f64>,

    /// Penalize routes through stations with broken elevators
    pub prioritize_accessibility: Option<bool>,
}

/// Request to score caller-supplied routes.
///
/// Fields are kept as raw JSON so that structural problems are reported
/// as invalid input rather than a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct ScoreRoutesRequest {
    /// Routes in the directions provider's shape
    pub routes: Value,

    /// Station names known to lack elevator service
    #[serde(default)]
    pub inaccessible: Option<Value>,

    /// Raw outage feed records, normalized server-side
    #[serde(default)]
    pub outages: Option<Value>,

    pub max_walk_mins: Option<f64>,

    pub prioritize_accessibility: Option<bool>,
}

impl ScoreRoutesRequest {
    /// The inaccessible-station set implied by the request.
    ///
    /// Union of the explicit station list and the normalized outage
    /// records; empty when neither is given.
    pub fn inaccessible_stations(&self) -> Result<InaccessibleStations, InvalidInput> {
        let mut stations = match &self.outages {
            Some(feed) => normalize_feed(feed)?,
            None => InaccessibleStations::new(),
        };

        if let Some(list) = &self.inaccessible {
            let Value::Array(items) = list else {
                return Err(InvalidInput::NotASequence {
                    what: "station names",
                    found: InvalidInput::json_kind(list),
                });
            };
            for key in items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(StationKey::parse)
            {
                stations.insert(key);
            }
        }

        Ok(stations)
    }
}

/// A scored route.
#[derive(Debug, Serialize)]
pub struct ScoredRouteResult {
    /// Position of the route in the provider's (or caller's) list
    pub index: usize,

    pub summary: String,

    /// Provider-formatted total duration
    pub duration: Option<String>,

    pub duration_secs: Option<u64>,

    pub walk_minutes: f64,

    pub transfers: usize,

    pub touches_inaccessible: bool,

    /// Stations on the route currently lacking elevator service
    pub inaccessible_stations: Vec<String>,

    /// Lower is better
    pub score: f64,

    pub is_preferred: bool,

    /// Transit lines ridden, in order
    pub lines: Vec<String>,
}

/// Response for route planning and scoring, best first.
#[derive(Debug, Serialize)]
pub struct RankedRoutesResponse {
    pub routes: Vec<ScoredRouteResult>,

    /// Input index of the preferred route, if any
    pub preferred: Option<usize>,

    /// Size of the outage snapshot used for scoring
    pub inaccessible_station_count: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

/// Stations on the scored itinerary that are in the outage snapshot, in
/// travel order without repeats.
pub fn broken_stations(scored: &ScoredItinerary<'_>, inaccessible: &InaccessibleStations) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for station in scored.itinerary.steps().iter().flat_map(|s| s.stations()) {
        if inaccessible.contains(station) && !found.iter().any(|f| f == station.as_str()) {
            found.push(station.as_str().to_string());
        }
    }
    found
}

impl ScoredRouteResult {
    /// Create from a scored itinerary.
    pub fn from_scored(scored: &ScoredItinerary<'_>, inaccessible: &InaccessibleStations) -> Self {
        let itinerary = scored.itinerary;
        let lines = itinerary
            .steps()
            .iter()
            .filter(|s| s.is_transit())
            .filter_map(|s| s.line.clone())
            .collect();

        Self {
            index: scored.index,
            summary: itinerary.summary.clone(),
            duration: itinerary.first_leg().and_then(|l| l.duration_text.clone()),
            duration_secs: itinerary.total_duration_secs(),
            walk_minutes: scored.walk_minutes,
            transfers: scored.transfer_count,
            touches_inaccessible: scored.touches_inaccessible,
            inaccessible_stations: broken_stations(scored, inaccessible),
            score: scored.score,
            is_preferred: scored.is_preferred,
            lines,
        }
    }
}

impl RankedRoutesResponse {
    /// Build the response from a ranking.
    pub fn from_ranked(ranked: &[ScoredItinerary<'_>], inaccessible: &InaccessibleStations) -> Self {
        Self {
            routes: ranked
                .iter()
                .map(|s| ScoredRouteResult::from_scored(s, inaccessible))
                .collect(),
            preferred: preferred_of(ranked).map(|s| s.index),
            inaccessible_station_count: inaccessible.len(),
        }
    }
}
