//! Timetable reconstruction for a two-direction commuter rail line.
//!
//! Rebuilds structured departure timetables from two semi-trusted sources:
//! a machine-readable static feed (calendar / trips / stop-times tables),
//! and "special schedule" notices published as unstructured text with no
//! preserved layout. The [`feed`] module projects feed rows into a
//! per-day-type, per-direction, per-station timetable; the [`notice`]
//! module heuristically recovers the same shape from a flat token stream.
//!
//! Both builders are pure functions over already-materialized input.
//! Fetching, caching, and persistence belong to the caller.

pub mod domain;
pub mod feed;
pub mod notice;
pub mod special;
pub mod stations;
