//! Conversion from Directions DTOs to domain types.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{InvalidInput, Itinerary, Leg, StationKey, TransitStep, TravelMode};

use super::types::{LegDto, RouteDto, StepDto, StopDto, TextValue};

/// Interpret a raw JSON value as a list of routes and convert them.
///
/// The top level must be an array and every element must be route-shaped.
/// Inside a route, missing durations and stop names are tolerated.
pub fn parse_routes(value: &Value) -> Result<Vec<Itinerary>, InvalidInput> {
    let Value::Array(items) = value else {
        return Err(InvalidInput::NotASequence {
            what: "routes",
            found: InvalidInput::json_kind(value),
        });
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            RouteDto::deserialize(item)
                .map(|route| convert_route(&route))
                .map_err(|e| InvalidInput::MalformedElement {
                    what: "route",
                    index,
                    message: e.to_string(),
                })
        })
        .collect()
}

/// Convert provider routes to itineraries, preserving order.
pub fn convert_routes(routes: &[RouteDto]) -> Vec<Itinerary> {
    routes.iter().map(convert_route).collect()
}

/// Convert a single route.
pub fn convert_route(route: &RouteDto) -> Itinerary {
    let summary = route
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unnamed route");

    Itinerary::new(summary, route.legs.iter().map(convert_leg).collect())
}

fn convert_leg(leg: &LegDto) -> Leg {
    Leg {
        steps: leg.steps.iter().map(convert_step).collect(),
        duration_secs: seconds(leg.duration.as_ref()),
        duration_text: leg.duration.as_ref().and_then(|d| d.text.clone()),
    }
}

fn convert_step(step: &StepDto) -> TransitStep {
    let mode = step
        .travel_mode
        .as_deref()
        .map(TravelMode::from_tag)
        .unwrap_or(TravelMode::Other);

    let details = step.transit_details.as_ref();
    let stop_key = |stop: Option<&StopDto>| {
        stop.and_then(|s| s.name.as_deref())
            .and_then(StationKey::parse)
    };

    TransitStep {
        mode,
        duration_secs: seconds(step.duration.as_ref()),
        departure_stop: stop_key(details.and_then(|d| d.departure_stop.as_ref())),
        arrival_stop: stop_key(details.and_then(|d| d.arrival_stop.as_ref())),
        line: details
            .and_then(|d| d.line.as_ref())
            .and_then(|l| l.short_name.clone().or_else(|| l.name.clone())),
        instructions: step.html_instructions.clone(),
    }
}

/// Whole seconds from a duration value; absent, negative, or non-finite
/// values are treated as unknown.
fn seconds(duration: Option<&TextValue>) -> Option<u64> {
    let value = duration?.value?;
    if value.is_finite() && value >= 0.0 {
        Some(value.round() as u64)
    } else {
        None
    }
}
