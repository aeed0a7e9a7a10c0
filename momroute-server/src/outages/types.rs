//! Outage feed DTOs.
//!
//! These types map directly to records in the NYCT elevator and escalator
//! outage feed. Every field is optional: the feed is untrusted and records
//! missing the fields we need are skipped, not rejected.

use serde::Deserialize;

/// Equipment type tag for elevators.
pub const ELEVATOR: &str = "EL";

/// Equipment type tag for escalators.
pub const ESCALATOR: &str = "ES";

/// One equipment outage as reported by the feed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawOutageRecord {
    /// Station name (free text, inconsistent casing).
    pub station: Option<String>,

    pub borough: Option<String>,

    /// Lines serving the station (e.g. "NQRW").
    pub trainno: Option<String>,

    /// Equipment identifier (e.g. "EL123").
    pub equipment: Option<String>,

    /// Equipment type tag: "EL" for elevators, "ES" for escalators.
    pub equipmenttype: Option<String>,

    /// Description of what the equipment connects.
    pub serving: Option<String>,

    /// Whether the equipment is on an accessible path ("Y"/"N").
    #[serde(rename = "ADA")]
    pub ada: Option<String>,

    pub outagedate: Option<String>,

    pub estimatedreturntoservice: Option<String>,

    pub reason: Option<String>,
}

impl RawOutageRecord {
    /// Minimal record carrying only the fields the normalizer needs.
    pub fn new(equipment_type: impl Into<String>, station: impl Into<String>) -> Self {
        Self {
            equipmenttype: Some(equipment_type.into()),
            station: Some(station.into()),
            ..Self::default()
        }
    }

    /// Whether the record reports an elevator.
    ///
    /// The tag must be exactly "EL".
    pub fn is_elevator(&self) -> bool {
        self.equipmenttype.as_deref() == Some(ELEVATOR)
    }
}
