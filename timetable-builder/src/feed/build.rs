//! Projection of feed rows into the calendar timetable.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Direction, DirectionalTimes, ScheduleKey, Timetable, clip_to_hhmm};
use crate::stations::StationRegistry;

use super::rows::{CalendarRow, StopTimeRow, TripRow};

/// Configuration for interpreting feed tables.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Raw `direction_id` indicator → travel direction. Rows whose
    /// indicator is absent here are skipped.
    pub directions: HashMap<String, Direction>,
}

impl FeedConfig {
    /// Create a configuration with an explicit direction map.
    pub fn new(directions: HashMap<String, Direction>) -> Self {
        Self { directions }
    }

    /// Resolve a raw direction indicator.
    pub fn direction_for(&self, indicator: &str) -> Option<Direction> {
        self.directions.get(indicator).copied()
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            directions: HashMap::from([
                ("0".to_string(), Direction::Westbound),
                ("1".to_string(), Direction::Eastbound),
            ]),
        }
    }
}

/// Build the calendar timetable from already-parsed feed rows.
///
/// Every service in the calendar resolves to a schedule key (a fixed day
/// type, or a special key slugified from the service id). The timetable
/// shape is fully populated up front: every resolved key carries an empty
/// departure list for every registry station in both directions, before
/// any stop-time row is projected in. Stop-time rows referencing unknown
/// trips, stops, directions, or services are skipped; this is feed
/// tolerance, not an error. After projection every station list is sorted
/// ascending by plain string comparison (hours of 24 and above sort
/// correctly by construction) and duplicates are kept.
pub fn build_schedule(
    registry: &StationRegistry,
    config: &FeedConfig,
    calendar: &[CalendarRow],
    trips: &[TripRow],
    stop_times: &[StopTimeRow],
) -> Timetable {
    // Trip id → (owning service, raw direction indicator).
    let trip_index: HashMap<&str, (&str, &str)> = trips
        .iter()
        .map(|t| {
            (
                t.trip_id.as_str(),
                (t.service_id.as_str(), t.direction_id.as_str()),
            )
        })
        .collect();

    // Service id → schedule key. A service is never dropped here: ids
    // matching no day-type keyword become special keys.
    let services: HashMap<&str, ScheduleKey> = calendar
        .iter()
        .map(|row| (row.service_id.as_str(), ScheduleKey::classify(&row.service_id)))
        .collect();

    let mut timetable = Timetable::default();
    for key in services.values() {
        timetable.entry_or_shape(key.clone(), || {
            DirectionalTimes::with_stations(registry.keys())
        });
    }

    for row in stop_times {
        let Some((service_id, indicator)) = trip_index.get(row.trip_id.as_str()) else {
            debug!(trip_id = %row.trip_id, "skipping stop time: unknown trip");
            continue;
        };
        let Some(station) = registry.station_for_stop(&row.stop_id) else {
            debug!(stop_id = %row.stop_id, "skipping stop time: unknown stop");
            continue;
        };
        let Some(direction) = config.direction_for(indicator) else {
            debug!(indicator = %indicator, "skipping stop time: unrecognized direction");
            continue;
        };
        let Some(key) = services.get(service_id) else {
            debug!(service_id = %service_id, "skipping stop time: service not in calendar");
            continue;
        };
        let Some(times) = timetable.get_mut(key) else {
            continue;
        };
        let Some(list) = times.direction_mut(direction).get_mut(station) else {
            continue;
        };
        list.push(clip_to_hhmm(&row.departure_time).to_string());
    }

    for times in timetable.values_mut() {
        times.sort_all();
    }

    timetable
}
