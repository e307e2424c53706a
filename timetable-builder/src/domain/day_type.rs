//! Service classification: day types and special keys.
//!
//! Every calendar service resolves to exactly one schedule key. Services
//! whose identifier names a day type (by case-insensitive substring) get
//! that day type; everything else becomes a special key derived by
//! slugifying the raw identifier. A service is never dropped for failing
//! to match a keyword.

use std::fmt;

use serde::{Serialize, Serializer};

/// One of the three fixed day types a service can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayType {
    Weekday,
    Saturday,
    Sunday,
}

impl DayType {
    /// Classification keywords, checked in order; the first substring
    /// match wins.
    const KEYWORDS: [(&'static str, DayType); 3] = [
        ("weekday", DayType::Weekday),
        ("saturday", DayType::Saturday),
        ("sunday", DayType::Sunday),
    ];

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Saturday => "saturday",
            DayType::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key a service's departures are filed under in the timetable:
/// either a fixed day type or a slug derived from the service id.
///
/// # Examples
///
/// ```
/// use timetable_builder::domain::{DayType, ScheduleKey};
///
/// assert_eq!(
///     ScheduleKey::classify("2026_Weekday_Service"),
///     ScheduleKey::Day(DayType::Weekday),
/// );
/// assert_eq!(
///     ScheduleKey::classify("Presidents Day 2026"),
///     ScheduleKey::Special("presidents-day-2026".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScheduleKey {
    Day(DayType),
    Special(String),
}

impl ScheduleKey {
    /// Classify a raw service identifier.
    ///
    /// Day-type keywords are matched case-insensitively as substrings,
    /// first match wins. Identifiers matching no keyword are always
    /// resolved as a special key, never discarded. Distinct identifiers
    /// that slugify identically collide silently.
    pub fn classify(service_id: &str) -> Self {
        let lowered = service_id.to_ascii_lowercase();
        for (keyword, day) in DayType::KEYWORDS {
            if lowered.contains(keyword) {
                return ScheduleKey::Day(day);
            }
        }
        ScheduleKey::Special(slugify(service_id))
    }

    /// Returns the string form used as a timetable map key.
    pub fn as_str(&self) -> &str {
        match self {
            ScheduleKey::Day(day) => day.as_str(),
            ScheduleKey::Special(slug) => slug,
        }
    }
}

impl fmt::Display for ScheduleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScheduleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Slugify an identifier: lowercase, runs of non-alphanumeric characters
/// collapsed to a single `-`, separators trimmed at both ends.
///
/// # Examples
///
/// ```
/// use timetable_builder::domain::slugify;
///
/// assert_eq!(slugify("July 4th (Observed)"), "july-4th-observed");
/// assert_eq!(slugify("--Holiday--"), "holiday");
/// ```
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}
