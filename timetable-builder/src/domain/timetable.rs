//! Timetable output shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::day_type::ScheduleKey;
use super::station::StationKey;

/// Departure lists for both directions, keyed by station.
///
/// This is the innermost timetable shape: the feed builder produces one
/// per schedule key, and the notice extractor produces exactly one.
/// Serializes as `{"westbound": {station: [times]}, "eastbound": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionalTimes {
    pub westbound: BTreeMap<StationKey, Vec<String>>,
    pub eastbound: BTreeMap<StationKey, Vec<String>>,
}

impl DirectionalTimes {
    /// Build the fully populated shape: an empty departure list for every
    /// given station, in both directions. The shape is never derived from
    /// which departure rows happen to exist.
    pub fn with_stations<'a>(keys: impl IntoIterator<Item = &'a StationKey>) -> Self {
        let mut times = Self::default();
        for key in keys {
            times.westbound.insert(key.clone(), Vec::new());
            times.eastbound.insert(key.clone(), Vec::new());
        }
        times
    }

    /// The station map for one direction.
    pub fn direction(&self, direction: Direction) -> &BTreeMap<StationKey, Vec<String>> {
        match direction {
            Direction::Westbound => &self.westbound,
            Direction::Eastbound => &self.eastbound,
        }
    }

    /// Mutable station map for one direction.
    pub fn direction_mut(&mut self, direction: Direction) -> &mut BTreeMap<StationKey, Vec<String>> {
        match direction {
            Direction::Westbound => &mut self.westbound,
            Direction::Eastbound => &mut self.eastbound,
        }
    }

    /// True when no station in either direction holds any departure.
    pub fn is_all_empty(&self) -> bool {
        self.westbound.values().all(Vec::is_empty) && self.eastbound.values().all(Vec::is_empty)
    }

    /// Sort every departure list ascending by plain string comparison.
    ///
    /// Correct for zero-padded `HH:MM` strings, including hours of 24 and
    /// above. Idempotent; does not deduplicate.
    pub fn sort_all(&mut self) {
        for list in self.westbound.values_mut().chain(self.eastbound.values_mut()) {
            list.sort();
        }
    }
}

/// The full calendar timetable: schedule key → direction → station →
/// ordered departure times.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timetable {
    entries: BTreeMap<ScheduleKey, DirectionalTimes>,
}

impl Timetable {
    /// Look up the departures filed under a schedule key.
    pub fn get(&self, key: &ScheduleKey) -> Option<&DirectionalTimes> {
        self.entries.get(key)
    }

    /// Iterate over all schedule keys and their departures.
    pub fn iter(&self) -> impl Iterator<Item = (&ScheduleKey, &DirectionalTimes)> {
        self.entries.iter()
    }

    /// Number of schedule keys present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no schedule key is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entry_or_shape(
        &mut self,
        key: ScheduleKey,
        shape: impl FnOnce() -> DirectionalTimes,
    ) -> &mut DirectionalTimes {
        self.entries.entry(key).or_insert_with(shape)
    }

    pub(crate) fn get_mut(&mut self, key: &ScheduleKey) -> Option<&mut DirectionalTimes> {
        self.entries.get_mut(key)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut DirectionalTimes> {
        self.entries.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<StationKey> {
        names.iter().map(|n| StationKey::new(*n)).collect()
    }

    #[test]
    fn with_stations_populates_both_directions() {
        let stations = keys(&["a", "b", "c"]);
        let times = DirectionalTimes::with_stations(&stations);

        for dir in [Direction::Westbound, Direction::Eastbound] {
            let map = times.direction(dir);
            assert_eq!(map.len(), 3);
            assert!(map.values().all(Vec::is_empty));
        }
    }

    #[test]
    fn all_empty_detects_any_departure() {
        let stations = keys(&["a", "b"]);
        let mut times = DirectionalTimes::with_stations(&stations);
        assert!(times.is_all_empty());

        times
            .direction_mut(Direction::Eastbound)
            .get_mut(&StationKey::new("b"))
            .unwrap()
            .push("08:01".to_string());
        assert!(!times.is_all_empty());
    }

    #[test]
    fn sort_all_is_idempotent_and_keeps_duplicates() {
        let stations = keys(&["a"]);
        let mut times = DirectionalTimes::with_stations(&stations);
        let list = times
            .direction_mut(Direction::Westbound)
            .get_mut(&StationKey::new("a"))
            .unwrap();
        list.extend(["08:05", "08:01", "08:01", "24:10", "23:59"].map(String::from));

        times.sort_all();
        let sorted = times.direction(Direction::Westbound)[&StationKey::new("a")].clone();
        assert_eq!(sorted, vec!["08:01", "08:01", "08:05", "23:59", "24:10"]);

        times.sort_all();
        assert_eq!(
            times.direction(Direction::Westbound)[&StationKey::new("a")],
            sorted
        );
    }

    #[test]
    fn timetable_serializes_as_nested_maps() {
        let stations = keys(&["a"]);
        let mut timetable = Timetable::default();
        timetable.entry_or_shape(ScheduleKey::classify("weekday"), || {
            DirectionalTimes::with_stations(&stations)
        });

        let json = serde_json::to_value(&timetable).unwrap();
        assert!(json["weekday"]["westbound"]["a"].as_array().unwrap().is_empty());
        assert!(json["weekday"]["eastbound"]["a"].as_array().unwrap().is_empty());
    }
}
