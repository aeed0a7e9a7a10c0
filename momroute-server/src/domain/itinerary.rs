//! Itinerary types.
//!
//! An itinerary is a candidate trip plan produced by the directions provider.
//! It is read-only input to the scorer: nothing in this crate mutates an
//! itinerary after conversion.

use super::StationKey;

/// How a step is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    Walking,
    Transit,
    /// Driving, cycling, or a mode this crate does not model
    Other,
}

impl TravelMode {
    /// Parse the provider's mode tag (e.g. "WALKING", "TRANSIT").
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "WALKING" => TravelMode::Walking,
            "TRANSIT" => TravelMode::Transit,
            _ => TravelMode::Other,
        }
    }
}

/// One atomic travel action within a leg.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitStep {
    pub mode: TravelMode,

    /// Duration in seconds; `None` when the provider omitted it.
    pub duration_secs: Option<u64>,

    /// Boarding station (transit steps only).
    pub departure_stop: Option<StationKey>,

    /// Alighting station (transit steps only).
    pub arrival_stop: Option<StationKey>,

    /// Short line name for display (e.g. "Q").
    pub line: Option<String>,

    /// Human-readable instruction text.
    pub instructions: Option<String>,
}

impl TransitStep {
    /// A walking step of the given duration.
    pub fn walking(duration_secs: u64) -> Self {
        Self {
            mode: TravelMode::Walking,
            duration_secs: Some(duration_secs),
            departure_stop: None,
            arrival_stop: None,
            line: None,
            instructions: None,
        }
    }

    /// A transit ride between two named stations.
    ///
    /// Names are normalized; blank names become `None`.
    pub fn transit(from: &str, to: &str, duration_secs: u64) -> Self {
        Self {
            mode: TravelMode::Transit,
            duration_secs: Some(duration_secs),
            departure_stop: StationKey::parse(from),
            arrival_stop: StationKey::parse(to),
            line: None,
            instructions: None,
        }
    }

    pub fn is_walking(&self) -> bool {
        self.mode == TravelMode::Walking
    }

    pub fn is_transit(&self) -> bool {
        self.mode == TravelMode::Transit
    }

    /// Stations this step touches. Empty for non-transit steps.
    pub fn stations(&self) -> impl Iterator<Item = &StationKey> {
        let stops = if self.is_transit() {
            [self.departure_stop.as_ref(), self.arrival_stop.as_ref()]
        } else {
            [None, None]
        };
        stops.into_iter().flatten()
    }
}

/// One point-to-point segment of a trip plan.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Leg {
    pub steps: Vec<TransitStep>,

    /// Total leg duration in seconds, as reported by the provider.
    pub duration_secs: Option<u64>,

    /// Provider-formatted duration (e.g. "34 mins").
    pub duration_text: Option<String>,
}

impl Leg {
    pub fn new(steps: Vec<TransitStep>) -> Self {
        Self {
            steps,
            duration_secs: None,
            duration_text: None,
        }
    }
}

/// A candidate trip plan.
///
/// Only the first leg is considered when scoring; see `Itinerary::first_leg`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    /// Human-readable summary (usually the main road or line names).
    pub summary: String,

    pub legs: Vec<Leg>,
}

impl Itinerary {
    pub fn new(summary: impl Into<String>, legs: Vec<Leg>) -> Self {
        Self {
            summary: summary.into(),
            legs,
        }
    }

    /// Convenience constructor for the common single-leg case.
    pub fn single_leg(summary: impl Into<String>, steps: Vec<TransitStep>) -> Self {
        Self::new(summary, vec![Leg::new(steps)])
    }

    /// The leg that scoring inspects.
    pub fn first_leg(&self) -> Option<&Leg> {
        self.legs.first()
    }

    /// Steps of the first leg, or nothing if there are no legs.
    pub fn steps(&self) -> &[TransitStep] {
        self.first_leg().map(|l| l.steps.as_slice()).unwrap_or(&[])
    }

    /// Total duration in seconds (the first leg's reported duration).
    pub fn total_duration_secs(&self) -> Option<u64> {
        self.first_leg().and_then(|l| l.duration_secs)
    }
}
