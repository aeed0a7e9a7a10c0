//! Domain types for the accessibility-aware route planner.
//!
//! This module contains the validated model that the scorer works on:
//! normalized station keys, the inaccessible-station snapshot, and
//! itineraries converted from the directions provider.

mod error;
mod itinerary;
mod station;

pub use error::InvalidInput;
pub use itinerary::{Itinerary, Leg, TransitStep, TravelMode};
pub use station::{InaccessibleStations, StationKey};
