//! Per-itinerary accessibility scoring.
//!
//! Scores use a lower-is-better convention: walking minutes minus a fixed
//! weight per transfer, plus a fixed penalty for touching a station whose
//! elevator is out of service (when accessibility is prioritized).
//!
//! Transfers are not what makes a route preferred; that flag requires a
//! direct route regardless of score.
//!
//! Only the itinerary's first leg is inspected.

use crate::domain::{InaccessibleStations, Itinerary};

use super::config::ScoringConfig;

/// Score subtracted per transfer, in walking-minute equivalents.
pub const TRANSFER_WEIGHT: f64 = 3.0;

/// Score added for touching an inaccessible station.
pub const INACCESSIBLE_PENALTY: f64 = 5.0;

/// Configuration-independent measurements of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItineraryMetrics {
    /// Total walking time across the first leg, in minutes.
    pub walk_minutes: f64,

    /// Transit steps minus one, never below zero.
    pub transfer_count: usize,

    /// Whether any transit step boards or alights at an inaccessible station.
    pub touches_inaccessible: bool,
}

impl ItineraryMetrics {
    /// Measure an itinerary against the current outage snapshot.
    pub fn measure(itinerary: &Itinerary, inaccessible: &InaccessibleStations) -> Self {
        let steps = itinerary.steps();

        // Missing durations contribute nothing; absurd ones saturate
        let walk_secs = steps
            .iter()
            .filter(|s| s.is_walking())
            .filter_map(|s| s.duration_secs)
            .fold(0u64, u64::saturating_add);

        let transit_steps = steps.iter().filter(|s| s.is_transit()).count();

        let touches_inaccessible = steps
            .iter()
            .flat_map(|s| s.stations())
            .any(|station| inaccessible.contains(station));

        Self {
            walk_minutes: walk_secs as f64 / 60.0,
            // A pure walk has no transit steps and counts as zero transfers
            transfer_count: transit_steps.saturating_sub(1),
            touches_inaccessible,
        }
    }
}

/// The derived result of scoring one itinerary.
///
/// Created fresh for each scoring pass; borrows the itinerary it describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredItinerary<'a> {
    pub itinerary: &'a Itinerary,

    /// Position of the itinerary in the caller's input.
    pub index: usize,

    pub walk_minutes: f64,
    pub transfer_count: usize,
    pub touches_inaccessible: bool,

    /// Lower is better.
    pub score: f64,

    /// Direct, within the walk budget, and (when prioritized) step-free.
    pub is_preferred: bool,
}

/// Score a single itinerary.
///
/// `index` is carried through so ranking can fall back to input order.
pub fn score<'a>(
    itinerary: &'a Itinerary,
    index: usize,
    inaccessible: &InaccessibleStations,
    config: &ScoringConfig,
) -> ScoredItinerary<'a> {
    let metrics = ItineraryMetrics::measure(itinerary, inaccessible);
    let penalized = metrics.touches_inaccessible && config.prioritize_accessibility;

    let mut value = metrics.walk_minutes - TRANSFER_WEIGHT * metrics.transfer_count as f64;
    if penalized {
        value += INACCESSIBLE_PENALTY;
    }

    let is_preferred = metrics.transfer_count == 0
        && metrics.walk_minutes <= config.max_walk_minutes
        && !penalized;

    ScoredItinerary {
        itinerary,
        index,
        walk_minutes: metrics.walk_minutes,
        transfer_count: metrics.transfer_count,
        touches_inaccessible: metrics.touches_inaccessible,
        score: value,
        is_preferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Leg, StationKey, TransitStep, TravelMode};

    fn broken(names: &[&str]) -> InaccessibleStations {
        InaccessibleStations::from_names(names)
    }

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn walk_time_sums_walking_steps() {
        let itinerary = Itinerary::single_leg(
            "Q",
            vec![
                TransitStep::walking(300),
                TransitStep::transit("Canal St", "Times Sq", 900),
                TransitStep::walking(420),
            ],
        );

        let m = ItineraryMetrics::measure(&itinerary, &InaccessibleStations::new());
        assert_eq!(m.walk_minutes, 12.0);
        assert_eq!(m.transfer_count, 0);
        assert!(!m.touches_inaccessible);
    }

    #[test]
    fn no_walking_steps_is_zero_walk() {
        let itinerary =
            Itinerary::single_leg("A", vec![TransitStep::transit("Fulton St", "Jay St", 600)]);
        let m = ItineraryMetrics::measure(&itinerary, &InaccessibleStations::new());
        assert_eq!(m.walk_minutes, 0.0);
    }

    #[test]
    fn missing_duration_counts_as_zero() {
        let mut unknown = TransitStep::walking(0);
        unknown.duration_secs = None;

        let itinerary = Itinerary::single_leg(
            "A",
            vec![
                unknown,
                TransitStep::walking(120),
                TransitStep::transit("X", "Y", 60),
            ],
        );
        let m = ItineraryMetrics::measure(&itinerary, &InaccessibleStations::new());
        assert_eq!(m.walk_minutes, 2.0);
    }

    #[test]
    fn transfers_are_transit_steps_minus_one() {
        let itinerary = Itinerary::single_leg(
            "A to L",
            vec![
                TransitStep::transit("Fulton St", "14 St", 600),
                TransitStep::walking(120),
                TransitStep::transit("8 Av", "Bedford Av", 600),
                TransitStep::transit("Bedford Av", "Lorimer St", 300),
            ],
        );
        let m = ItineraryMetrics::measure(&itinerary, &InaccessibleStations::new());
        assert_eq!(m.transfer_count, 2);
    }

    #[test]
    fn pure_walk_has_zero_transfers() {
        let itinerary = Itinerary::single_leg("walk", vec![TransitStep::walking(900)]);
        let m = ItineraryMetrics::measure(&itinerary, &InaccessibleStations::new());
        assert_eq!(m.transfer_count, 0);

        let scored = score(&itinerary, 0, &InaccessibleStations::new(), &config());
        assert_eq!(scored.score, 15.0);
        assert!(scored.score >= 0.0);
    }

    #[test]
    fn other_modes_are_ignored() {
        let other = TransitStep {
            mode: TravelMode::Other,
            duration_secs: Some(6000),
            departure_stop: StationKey::parse("Union Sq"),
            arrival_stop: None,
            line: None,
            instructions: None,
        };
        let itinerary = Itinerary::single_leg("drive", vec![other]);
        let m = ItineraryMetrics::measure(&itinerary, &broken(&["union sq"]));

        assert_eq!(m.walk_minutes, 0.0);
        assert_eq!(m.transfer_count, 0);
        assert!(!m.touches_inaccessible);
    }

    #[test]
    fn touch_on_departure_or_arrival() {
        let itinerary =
            Itinerary::single_leg("L", vec![TransitStep::transit("Union Sq", "Bedford Av", 600)]);

        assert!(ItineraryMetrics::measure(&itinerary, &broken(&["UNION SQ"])).touches_inaccessible);
        assert!(ItineraryMetrics::measure(&itinerary, &broken(&["bedford av "])).touches_inaccessible);
        assert!(!ItineraryMetrics::measure(&itinerary, &broken(&["lorimer st"])).touches_inaccessible);
    }

    #[test]
    fn unnamed_stop_still_evaluates_rest() {
        let mut ride = TransitStep::transit("", "Court Sq", 600);
        ride.departure_stop = None;

        let itinerary =
            Itinerary::single_leg("G", vec![TransitStep::walking(240), ride]);
        let m = ItineraryMetrics::measure(&itinerary, &broken(&["court sq"]));

        assert_eq!(m.walk_minutes, 4.0);
        assert!(m.touches_inaccessible);
    }

    #[test]
    fn only_first_leg_is_scored() {
        let itinerary = Itinerary::new(
            "two legs",
            vec![
                Leg::new(vec![TransitStep::transit("A", "B", 600)]),
                Leg::new(vec![
                    TransitStep::walking(6000),
                    TransitStep::transit("Broken", "C", 600),
                ]),
            ],
        );
        let m = ItineraryMetrics::measure(&itinerary, &broken(&["broken"]));

        assert_eq!(m.walk_minutes, 0.0);
        assert!(!m.touches_inaccessible);
    }

    #[test]
    fn score_formula() {
        let itinerary = Itinerary::single_leg(
            "two rides",
            vec![
                TransitStep::walking(600),
                TransitStep::transit("A", "B", 600),
                TransitStep::transit("B", "C", 600),
            ],
        );

        let scored = score(&itinerary, 0, &InaccessibleStations::new(), &config());
        assert_eq!(scored.walk_minutes, 10.0);
        assert_eq!(scored.transfer_count, 1);
        assert_eq!(scored.score, 10.0 - TRANSFER_WEIGHT);
        assert_eq!(scored.score, 7.0);
    }

    #[test]
    fn transfer_lowers_score_but_blocks_preference() {
        let direct = Itinerary::single_leg(
            "direct",
            vec![TransitStep::walking(600), TransitStep::transit("A", "B", 600)],
        );
        let change = Itinerary::single_leg(
            "change",
            vec![
                TransitStep::walking(600),
                TransitStep::transit("A", "B", 600),
                TransitStep::transit("B", "C", 600),
            ],
        );
        let outages = InaccessibleStations::new();

        let direct = score(&direct, 0, &outages, &config());
        let change = score(&change, 1, &outages, &config());

        assert_eq!(direct.score, 10.0);
        assert_eq!(change.score, 7.0);
        assert!(direct.is_preferred);
        assert!(!change.is_preferred);
    }

    #[test]
    fn huge_walk_durations_saturate() {
        let itinerary = Itinerary::single_leg(
            "forever",
            vec![
                TransitStep::walking(u64::MAX),
                TransitStep::walking(u64::MAX),
                TransitStep::transit("A", "B", 60),
            ],
        );

        let m = ItineraryMetrics::measure(&itinerary, &InaccessibleStations::new());
        assert_eq!(m.walk_minutes, u64::MAX as f64 / 60.0);
        assert!(!score(&itinerary, 0, &InaccessibleStations::new(), &config()).is_preferred);
    }

    #[test]
    fn accessibility_penalty_applies_only_when_prioritized() {
        let itinerary =
            Itinerary::single_leg("L", vec![TransitStep::transit("Union Sq", "Bedford Av", 600)]);
        let outages = broken(&["union sq"]);

        let on = score(&itinerary, 0, &outages, &config());
        assert_eq!(on.score, INACCESSIBLE_PENALTY);
        assert!(on.touches_inaccessible);
        assert!(!on.is_preferred);

        let off_config = ScoringConfig::new(30.0, false).unwrap();
        let off = score(&itinerary, 0, &outages, &off_config);
        assert_eq!(off.score, 0.0);
        assert!(off.touches_inaccessible);
        assert!(off.is_preferred);
    }

    #[test]
    fn preferred_requires_direct_and_in_budget() {
        let direct = Itinerary::single_leg(
            "direct",
            vec![TransitStep::walking(1800), TransitStep::transit("A", "B", 600)],
        );
        assert!(score(&direct, 0, &InaccessibleStations::new(), &config()).is_preferred);

        let long_walk = Itinerary::single_leg(
            "long walk",
            vec![TransitStep::walking(1860), TransitStep::transit("A", "B", 600)],
        );
        assert!(!score(&long_walk, 0, &InaccessibleStations::new(), &config()).is_preferred);

        let change = Itinerary::single_leg(
            "change",
            vec![
                TransitStep::transit("A", "B", 600),
                TransitStep::transit("B", "C", 600),
            ],
        );
        assert!(!score(&change, 0, &InaccessibleStations::new(), &config()).is_preferred);
    }

    #[test]
    fn scored_borrows_itinerary() {
        let itinerary = Itinerary::single_leg("Q", vec![TransitStep::transit("A", "B", 60)]);
        let scored = score(&itinerary, 7, &InaccessibleStations::new(), &config());

        assert!(std::ptr::eq(scored.itinerary, &itinerary));
        assert_eq!(scored.index, 7);
    }
}
