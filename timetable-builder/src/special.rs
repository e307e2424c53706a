//! Special schedule records.
//!
//! A special schedule is an extraction result isolated by effective date
//! and tagged with document provenance, so the persistence layer can
//! merge newly extracted schedules with stored ones and prune entries
//! whose date has passed. Publication URLs conventionally embed the
//! effective date as a `YYYY-MM-DD` substring.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::DirectionalTimes;

/// A special schedule extracted from one notice document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialSchedule {
    /// The single service date this schedule applies to.
    pub effective_date: NaiveDate,
    /// The extracted two-direction timetable.
    pub schedule: DirectionalTimes,
    /// Where the source document was published.
    pub source_url: String,
    /// Human-readable label for the notice.
    pub label: String,
}

impl SpecialSchedule {
    /// True once the service date has passed.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.effective_date < today
    }
}

/// Extract the effective date from a document URL.
///
/// Scans for embedded `YYYY-MM-DD` substrings and returns the first one
/// that is a real calendar date; a URL without one yields `None`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timetable_builder::special::effective_date_from_url;
///
/// assert_eq!(
///     effective_date_from_url("https://example.com/notices/special-2026-07-04.pdf"),
///     NaiveDate::from_ymd_opt(2026, 7, 4),
/// );
/// assert_eq!(effective_date_from_url("https://example.com/notices/latest.pdf"), None);
/// ```
pub fn effective_date_from_url(url: &str) -> Option<NaiveDate> {
    static DATE: OnceLock<Regex> = OnceLock::new();
    let pattern = DATE.get_or_init(|| {
        Regex::new(r"\d{4}-\d{2}-\d{2}").expect("date pattern is a valid regex")
    });

    pattern
        .find_iter(url)
        .find_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
}
