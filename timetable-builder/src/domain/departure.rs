//! Departure time handling.
//!
//! Feed departure times arrive as `HH:MM:SS` strings where `HH` may
//! legally exceed 23 for service running past midnight; they are clipped
//! to `HH:MM` and kept as literal strings so lexicographic order matches
//! chronological order ("24:10" sorts after "23:59"). Notice times arrive
//! as ambiguous 12-hour clock readings and are normalized to 24-hour
//! `HH:MM` here.

use std::fmt;

/// Error returned when constructing an invalid clock reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Clip a feed departure time to its first five characters (`HH:MM`).
///
/// Hours of 24 and above are preserved literally, not wrapped modulo 24:
/// the later string sort still orders them correctly relative to same-day
/// values.
///
/// # Examples
///
/// ```
/// use timetable_builder::domain::clip_to_hhmm;
///
/// assert_eq!(clip_to_hhmm("08:05:00"), "08:05");
/// assert_eq!(clip_to_hhmm("24:10:00"), "24:10");
/// assert_eq!(clip_to_hhmm("08:05"), "08:05");
/// ```
pub fn clip_to_hhmm(raw: &str) -> &str {
    raw.get(..5).unwrap_or(raw)
}

/// Meridiem marker on a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A validated 12-hour clock reading recovered from notice text.
///
/// Hour is 1-12; minute is 0-59. Conversion to 24-hour form applies the
/// standard rules: 12 AM maps to hour 00, 12 PM stays 12, and any other
/// PM hour gains 12.
///
/// # Examples
///
/// ```
/// use timetable_builder::domain::{ClockTime12, Meridiem};
///
/// let t = ClockTime12::new(12, 5, Meridiem::Am).unwrap();
/// assert_eq!(t.to_hhmm(), "00:05");
///
/// let t = ClockTime12::new(7, 30, Meridiem::Pm).unwrap();
/// assert_eq!(t.to_hhmm(), "19:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime12 {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl ClockTime12 {
    /// Construct a clock reading, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> Result<Self, TimeError> {
        if !(1..=12).contains(&hour) {
            return Err(TimeError::new("hour must be 1-12"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }

    /// The hour on a 24-hour clock (0-23).
    pub fn hour24(&self) -> u32 {
        match (self.hour, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h,
            (h, Meridiem::Pm) => h + 12,
        }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour24() * 60 + self.minute
    }

    /// Render as zero-padded 24-hour `HH:MM`.
    pub fn to_hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour24(), self.minute)
    }
}

impl fmt::Display for ClockTime12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hhmm())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every valid reading lands in the 24-hour range.
        #[test]
        fn hour24_in_range(hour in 1u32..=12, minute in 0u32..60, pm in any::<bool>()) {
            let m = if pm { Meridiem::Pm } else { Meridiem::Am };
            let t = ClockTime12::new(hour, minute, m).unwrap();
            prop_assert!(t.hour24() < 24);
            prop_assert!(t.minutes_since_midnight() < 24 * 60);
        }

        /// Rendered form is always five characters of zero-padded HH:MM.
        #[test]
        fn hhmm_shape(hour in 1u32..=12, minute in 0u32..60, pm in any::<bool>()) {
            let m = if pm { Meridiem::Pm } else { Meridiem::Am };
            let s = ClockTime12::new(hour, minute, m).unwrap().to_hhmm();
            prop_assert_eq!(s.len(), 5);
            prop_assert_eq!(s.as_bytes()[2], b':');
        }

        /// AM and PM readings of the same hour never collide, except that
        /// the mapping keeps them 12 hours apart.
        #[test]
        fn meridiem_offset(hour in 1u32..=12, minute in 0u32..60) {
            let am = ClockTime12::new(hour, minute, Meridiem::Am).unwrap();
            let pm = ClockTime12::new(hour, minute, Meridiem::Pm).unwrap();
            prop_assert_eq!(
                pm.minutes_since_midnight() - am.minutes_since_midnight(),
                12 * 60
            );
        }
    }
}
