//! The externally supplied station registry.
//!
//! The registry defines the canonical westbound station ordering (the
//! eastbound ordering is its exact reverse) and maps raw feed stop ids to
//! stable station keys. The core never mutates it and never invents or
//! omits registry stations when shaping a timetable.

use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{Direction, StationKey};

/// One station on the line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Station {
    /// Stable key the timetables are filed under.
    pub key: StationKey,
    /// Human-readable name.
    pub name: String,
}

/// Ordered station list plus the stop-id lookup.
///
/// # Examples
///
/// ```
/// use timetable_builder::stations::{Station, StationRegistry};
/// use timetable_builder::domain::{Direction, StationKey};
///
/// let registry = StationRegistry::new(
///     vec![
///         Station { key: StationKey::new("west-end"), name: "West End".into() },
///         Station { key: StationKey::new("east-end"), name: "East End".into() },
///     ],
///     [("101".to_string(), StationKey::new("west-end")),
///      ("102".to_string(), StationKey::new("east-end"))].into(),
/// );
///
/// let westbound: Vec<_> = registry.ordered_keys(Direction::Westbound).collect();
/// let eastbound: Vec<_> = registry.ordered_keys(Direction::Eastbound).collect();
/// assert_eq!(westbound.first(), eastbound.last());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StationRegistry {
    /// Stations in canonical westbound order.
    stations: Vec<Station>,
    /// Feed stop id → station key. Stop ids absent here are dropped.
    stop_ids: HashMap<String, StationKey>,
}

impl StationRegistry {
    /// Build a registry from an ordered station list and a stop-id map.
    pub fn new(stations: Vec<Station>, stop_ids: HashMap<String, StationKey>) -> Self {
        Self { stations, stop_ids }
    }

    /// Number of stations on the line.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// True when the registry holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station keys in canonical registry order (westbound).
    pub fn keys(&self) -> impl Iterator<Item = &StationKey> {
        self.stations.iter().map(|s| &s.key)
    }

    /// Station keys in travel order for a direction: registry order for
    /// westbound, reversed for eastbound.
    pub fn ordered_keys(&self, direction: Direction) -> Box<dyn Iterator<Item = &StationKey> + '_> {
        match direction {
            Direction::Westbound => Box::new(self.stations.iter().map(|s| &s.key)),
            Direction::Eastbound => Box::new(self.stations.iter().rev().map(|s| &s.key)),
        }
    }

    /// Resolve a raw feed stop id to a station key.
    pub fn station_for_stop(&self, stop_id: &str) -> Option<&StationKey> {
        self.stop_ids.get(stop_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StationRegistry {
        let stations = ["alpha", "bravo", "charlie"]
            .iter()
            .map(|k| Station {
                key: StationKey::new(*k),
                name: k.to_uppercase(),
            })
            .collect();
        let stop_ids = HashMap::from([
            ("1".to_string(), StationKey::new("alpha")),
            ("2".to_string(), StationKey::new("bravo")),
            ("3".to_string(), StationKey::new("charlie")),
        ]);
        StationRegistry::new(stations, stop_ids)
    }

    #[test]
    fn eastbound_is_exact_reverse_of_westbound() {
        let reg = registry();
        let west: Vec<_> = reg.ordered_keys(Direction::Westbound).collect();
        let mut east: Vec<_> = reg.ordered_keys(Direction::Eastbound).collect();
        east.reverse();
        assert_eq!(west, east);
    }

    #[test]
    fn stop_lookup() {
        let reg = registry();
        assert_eq!(reg.station_for_stop("2"), Some(&StationKey::new("bravo")));
        assert_eq!(reg.station_for_stop("99"), None);
    }

    #[test]
    fn deserializes_from_config_json() {
        let json = r#"{
            "stations": [
                {"key": "alpha", "name": "Alpha"},
                {"key": "bravo", "name": "Bravo"}
            ],
            "stop_ids": {"10": "alpha", "20": "bravo"}
        }"#;
        let reg: StationRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.station_for_stop("20"), Some(&StationKey::new("bravo")));
    }
}
