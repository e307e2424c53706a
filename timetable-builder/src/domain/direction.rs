//! Travel direction.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two canonical travel directions on the line.
///
/// The station registry's canonical ordering runs westbound; the
/// eastbound ordering is its exact reverse.
///
/// # Examples
///
/// ```
/// use timetable_builder::domain::Direction;
///
/// assert_eq!(Direction::Westbound.as_str(), "westbound");
/// assert_eq!(Direction::Westbound.opposite(), Direction::Eastbound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Westbound,
    Eastbound,
}

impl Direction {
    /// Returns the other direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Westbound => Direction::Eastbound,
            Direction::Eastbound => Direction::Westbound,
        }
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Westbound => "westbound",
            Direction::Eastbound => "eastbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
