//! Calendar Schedule Builder.
//!
//! Ingests the static feed's calendar, trips, and stop-times tables and
//! produces a nested timetable keyed by schedule key (day type or special
//! key), direction, and station. Pure over already-parsed rows; see
//! [`read_rows`] for turning table text into rows.

mod build;
mod error;
mod rows;

pub use build::{FeedConfig, build_schedule};
pub use error::FeedError;
pub use rows::{CalendarRow, StopTimeRow, TripRow, read_rows};
