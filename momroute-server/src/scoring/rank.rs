//! Itinerary ranking.
//!
//! Ranks scored itineraries so the least strenuous option comes first, and
//! picks the single preferred itinerary for highlighting.

use std::cmp::Ordering;

use crate::domain::{InaccessibleStations, Itinerary};

use super::config::ScoringConfig;
use super::score::{ScoredItinerary, score};

/// Order two scored itineraries, best first.
///
/// Compares by:
/// 1. Score (lower is better)
/// 2. Walking time (shorter is better)
/// 3. Number of transfers (fewer is better)
///
/// Equal itineraries keep their input order because the sort is stable.
fn compare(a: &ScoredItinerary<'_>, b: &ScoredItinerary<'_>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.walk_minutes.total_cmp(&b.walk_minutes))
        .then_with(|| a.transfer_count.cmp(&b.transfer_count))
}

/// Score and rank itineraries.
///
/// Returns one entry per input itinerary, sorted best-first. An empty input
/// yields an empty ranking.
pub fn rank<'a>(
    itineraries: &'a [Itinerary],
    inaccessible: &InaccessibleStations,
    config: &ScoringConfig,
) -> Vec<ScoredItinerary<'a>> {
    let mut scored: Vec<ScoredItinerary<'a>> = itineraries
        .iter()
        .enumerate()
        .map(|(index, itinerary)| score(itinerary, index, inaccessible, config))
        .collect();

    scored.sort_by(compare);
    scored
}

/// The best-ranked itinerary carrying the preferred flag, if any.
pub fn pick_preferred<'a>(
    itineraries: &'a [Itinerary],
    inaccessible: &InaccessibleStations,
    config: &ScoringConfig,
) -> Option<ScoredItinerary<'a>> {
    preferred_of(&rank(itineraries, inaccessible, config)).copied()
}

/// Find the preferred entry in an existing ranking.
///
/// Useful when the caller already holds the ranked list and wants to avoid
/// scoring twice.
pub fn preferred_of<'r, 'a>(ranked: &'r [ScoredItinerary<'a>]) -> Option<&'r ScoredItinerary<'a>> {
    ranked.iter().find(|s| s.is_preferred)
}
