//! Outage feed normalization.
//!
//! Turns the raw outage feed into the set of stations that currently lack
//! elevator service.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{InaccessibleStations, InvalidInput, StationKey};

use super::types::RawOutageRecord;

/// Reduce outage records to the set of stations with a broken elevator.
///
/// A record contributes its station iff it reports an elevator and carries a
/// non-blank station name. Everything else is skipped.
pub fn normalize(records: &[RawOutageRecord]) -> InaccessibleStations {
    records
        .iter()
        .filter(|r| r.is_elevator())
        .filter_map(|r| r.station.as_deref().and_then(StationKey::parse))
        .collect()
}

/// Interpret a raw JSON feed as a list of outage records.
///
/// The top level must be an array. Elements that are not record-shaped
/// (wrong field types, non-objects) are dropped.
pub fn parse_feed(value: &Value) -> Result<Vec<RawOutageRecord>, InvalidInput> {
    let Value::Array(items) = value else {
        return Err(InvalidInput::NotASequence {
            what: "outage records",
            found: InvalidInput::json_kind(value),
        });
    };

    let records = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match RawOutageRecord::deserialize(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index, error = %e, "skipping malformed outage record");
                None
            }
        })
        .collect();

    Ok(records)
}

/// Parse and normalize a raw JSON feed in one step.
pub fn normalize_feed(value: &Value) -> Result<InaccessibleStations, InvalidInput> {
    let records = parse_feed(value)?;
    Ok(normalize(&records))
}
