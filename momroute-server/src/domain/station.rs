//! Station identity types.

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;

use serde::Serialize;

/// A normalized station name used to join outage data with itinerary stops.
///
/// Both the outage feed and the directions provider refer to stations by
/// free-text name, with inconsistent casing and padding. A `StationKey` is
/// always trimmed and lowercased, so two keys compare equal exactly when
/// their source names agree after normalization.
///
/// # Examples
///
/// ```
/// use momroute_server::domain::StationKey;
///
/// let key = StationKey::parse(" Union Sq ").unwrap();
/// assert_eq!(key.as_str(), "union sq");
///
/// // Blank names carry no identity
/// assert!(StationKey::parse("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    /// Apply the station-name normalization: trim, then case-fold.
    ///
    /// Idempotent: normalizing an already-normalized name returns it unchanged.
    pub fn normalize_name(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Build a key from a raw station name.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let name = Self::normalize_name(raw);
        if name.is_empty() {
            None
        } else {
            Some(StationKey(name))
        }
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of stations whose elevators are currently out of service.
///
/// Rebuilt from scratch on every poll of the outage feed and handed to the
/// scorer as a plain value. It has no identity beyond the scoring pass it is
/// used for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InaccessibleStations {
    stations: HashSet<StationKey>,
}

impl InaccessibleStations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw station names, normalizing each one.
    ///
    /// Blank names are dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|n| StationKey::parse(n.as_ref()))
            .collect()
    }

    /// Add a station. Returns `false` if it was already present.
    pub fn insert(&mut self, key: StationKey) -> bool {
        self.stations.insert(key)
    }

    /// Whether the given station currently lacks elevator service.
    pub fn contains(&self, key: &StationKey) -> bool {
        self.stations.contains(key)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, StationKey> {
        self.stations.iter()
    }

    /// Station keys in alphabetical order, for stable output.
    pub fn sorted(&self) -> Vec<StationKey> {
        let mut keys: Vec<StationKey> = self.stations.iter().cloned().collect();
        keys.sort();
        keys
    }
}

impl FromIterator<StationKey> for InaccessibleStations {
    fn from_iter<T: IntoIterator<Item = StationKey>>(iter: T) -> Self {
        Self {
            stations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InaccessibleStations {
    type Item = &'a StationKey;
    type IntoIter = hash_set::Iter<'a, StationKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let key = StationKey::parse("  Times Sq-42 St\t").unwrap();
        assert_eq!(key.as_str(), "times sq-42 st");
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(StationKey::parse("").is_none());
        assert!(StationKey::parse("   ").is_none());
        assert!(StationKey::parse("\n\t").is_none());
    }

    #[test]
    fn differently_cased_names_are_equal() {
        let a = StationKey::parse("UNION SQ").unwrap();
        let b = StationKey::parse(" union sq ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_and_debug() {
        let key = StationKey::parse("Jay St-MetroTech").unwrap();
        assert_eq!(format!("{}", key), "jay st-metrotech");
        assert_eq!(format!("{:?}", key), "StationKey(jay st-metrotech)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = StationKey::parse("Court Sq").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"court sq\"");
    }

    #[test]
    fn set_from_names_collapses_duplicates() {
        let set = InaccessibleStations::from_names(["Union Sq", "union sq ", "  ", "Fulton St"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&StationKey::parse("union sq").unwrap()));
        assert!(set.contains(&StationKey::parse("FULTON ST").unwrap()));
    }

    #[test]
    fn sorted_is_alphabetical() {
        let set = InaccessibleStations::from_names(["Canal St", "Astor Pl", "Bowery"]);
        let sorted = set.sorted();
        let names: Vec<&str> = sorted.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["astor pl", "bowery", "canal st"]);
    }

    #[test]
    fn empty_set() {
        let set = InaccessibleStations::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.sorted().is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing twice gives the same result as normalizing once
        #[test]
        fn normalization_is_idempotent(s in "\\PC*") {
            let once = StationKey::normalize_name(&s);
            let twice = StationKey::normalize_name(&once);
            prop_assert_eq!(once, twice);
        }

        /// Surrounding whitespace never changes the key
        #[test]
        fn padding_is_ignored(name in "[A-Za-z0-9 -]{1,20}", pad_l in "[ \t]{0,3}", pad_r in "[ \t]{0,3}") {
            let padded = format!("{pad_l}{name}{pad_r}");
            prop_assert_eq!(StationKey::parse(&padded), StationKey::parse(&name));
        }

        /// ASCII case never changes the key
        #[test]
        fn ascii_case_is_ignored(name in "[A-Za-z ]{1,20}") {
            prop_assert_eq!(
                StationKey::parse(&name.to_uppercase()),
                StationKey::parse(&name.to_lowercase())
            );
        }
    }
}
