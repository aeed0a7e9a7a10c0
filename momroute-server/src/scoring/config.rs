//! Per-request scoring configuration.

use crate::domain::InvalidInput;

/// Default walking budget (minutes).
pub const DEFAULT_MAX_WALK_MINUTES: f64 = 30.0;

/// Parameters supplied by the caller for one scoring pass.
///
/// This is request data, not process-wide state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Maximum walking time (minutes) for an itinerary to be preferred.
    pub max_walk_minutes: f64,

    /// Penalize and veto itineraries touching a station without elevator service.
    pub prioritize_accessibility: bool,
}

impl ScoringConfig {
    /// Create a validated configuration.
    ///
    /// The walk budget must be finite and non-negative.
    pub fn new(max_walk_minutes: f64, prioritize_accessibility: bool) -> Result<Self, InvalidInput> {
        if !max_walk_minutes.is_finite() {
            return Err(InvalidInput::InvalidConfig(
                "max walk minutes must be finite",
            ));
        }
        if max_walk_minutes < 0.0 {
            return Err(InvalidInput::InvalidConfig(
                "max walk minutes must not be negative",
            ));
        }

        Ok(Self {
            max_walk_minutes,
            prioritize_accessibility,
        })
    }

    /// Overlay optional request overrides on top of this configuration.
    pub fn with_overrides(
        &self,
        max_walk_minutes: Option<f64>,
        prioritize_accessibility: Option<bool>,
    ) -> Result<Self, InvalidInput> {
        Self::new(
            max_walk_minutes.unwrap_or(self.max_walk_minutes),
            prioritize_accessibility.unwrap_or(self.prioritize_accessibility),
        )
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_walk_minutes: DEFAULT_MAX_WALK_MINUTES,
            prioritize_accessibility: true,
        }
    }
}
