//! Domain types for timetable reconstruction.
//!
//! This module contains the core model types shared by the feed builder
//! and the notice extractor. Types that carry invariants enforce them at
//! construction time, so downstream code can trust their validity.

mod day_type;
mod departure;
mod direction;
mod station;
mod timetable;

pub use day_type::{DayType, ScheduleKey, slugify};
pub use departure::{ClockTime12, Meridiem, TimeError, clip_to_hhmm};
pub use direction::Direction;
pub use station::StationKey;
pub use timetable::{DirectionalTimes, Timetable};
