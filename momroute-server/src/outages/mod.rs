//! Elevator outage feed handling.
//!
//! Fetches the transit authority's equipment-outage feed and reduces it to
//! the set of stations without working elevator service. The reduction is a
//! pure function (`normalize`); the client and snapshot are thin plumbing
//! around it.

mod client;
mod error;
mod normalize;
mod snapshot;
mod types;

pub use client::{OutageClient, OutageClientConfig};
pub use error::OutageError;
pub use normalize::{normalize, normalize_feed, parse_feed};
pub use snapshot::OutageSnapshot;
pub use types::{ELEVATOR, ESCALATOR, RawOutageRecord};
