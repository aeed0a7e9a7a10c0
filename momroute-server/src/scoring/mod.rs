//! Accessibility-aware itinerary scoring.
//!
//! This module answers: "of these candidate routes, which one is the least
//! strenuous?" Each itinerary is scored on walking time, number of
//! transfers, and whether it uses a station whose elevator is out of
//! service. Rankings are best-first, and at most one itinerary is flagged
//! as preferred: direct, within the walking budget, and step-free.
//!
//! Everything here is a pure function of its arguments. The outage snapshot
//! and the scoring config are passed in on every call.

mod config;
mod rank;
mod score;

pub use config::{DEFAULT_MAX_WALK_MINUTES, ScoringConfig};
pub use rank::{pick_preferred, preferred_of, rank};
pub use score::{INACCESSIBLE_PENALTY, ItineraryMetrics, ScoredItinerary, TRANSFER_WEIGHT, score};
