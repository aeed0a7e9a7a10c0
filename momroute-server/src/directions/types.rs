//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. They use
//! `Option` and `#[serde(default)]` liberally because the provider omits
//! fields rather than sending null in many cases, and because routes are
//! consumed leniently: a missing duration or stop name is tolerated.

use serde::{Deserialize, Serialize};

/// Top-level Directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    pub status: String,

    #[serde(default)]
    pub routes: Vec<RouteDto>,

    pub error_message: Option<String>,
}

/// One candidate route.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteDto {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// A point-to-point leg of a route.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LegDto {
    #[serde(default)]
    pub steps: Vec<StepDto>,

    pub duration: Option<TextValue>,

    pub start_address: Option<String>,

    pub end_address: Option<String>,
}

/// A single step within a leg.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StepDto {
    /// "WALKING", "TRANSIT", "DRIVING", ...
    pub travel_mode: Option<String>,

    pub duration: Option<TextValue>,

    pub html_instructions: Option<String>,

    pub transit_details: Option<TransitDetailsDto>,
}

/// A numeric quantity paired with its display text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TextValue {
    /// Seconds for durations, metres for distances.
    pub value: Option<f64>,

    pub text: Option<String>,
}

/// Transit-specific details of a step.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransitDetailsDto {
    pub departure_stop: Option<StopDto>,

    pub arrival_stop: Option<StopDto>,

    pub line: Option<LineDto>,

    pub num_stops: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StopDto {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LineDto {
    pub short_name: Option<String>,

    pub name: Option<String>,
}
