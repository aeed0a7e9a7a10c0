//! Transit directions provider.
//!
//! Fetches candidate itineraries from the Google Directions API and converts
//! them to domain `Itinerary` values. The provider resolves free-text
//! addresses; this crate does no geocoding of its own.

mod client;
mod convert;
mod error;
mod types;

pub use client::{DirectionsClient, DirectionsConfig, DirectionsRequest};
pub use convert::{convert_route, convert_routes, parse_routes};
pub use error::DirectionsError;
pub use types::{
    DirectionsResponse, LegDto, LineDto, RouteDto, StepDto, StopDto, TextValue, TransitDetailsDto,
};
