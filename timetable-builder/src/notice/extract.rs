//! Heuristic schedule extraction from notice text.

use regex::Regex;
use tracing::debug;

use crate::domain::{Direction, DirectionalTimes};
use crate::stations::StationRegistry;

use super::boundary::{BOUNDARY_THRESHOLD_MINS, find_direction_boundary};
use super::layout::{self, Layout};
use super::token::{Token, Tokenizer};

/// Error raised while constructing an extractor.
///
/// Extraction itself never errors: documents that cannot be read yield
/// `None`, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    /// A configured pattern did not compile.
    #[error("invalid extractor pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration for the notice extractor.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Literal section heading marking where the second direction's
    /// table begins in the delimited layout.
    pub heading: String,

    /// Direction of the table introduced by the heading. The span before
    /// the heading (or the first segment of an undelimited stream)
    /// belongs to the opposite direction.
    pub heading_direction: Direction,

    /// The single non-ASCII marker character denoting a skip-stop.
    pub skip_marker: char,

    /// Boilerplate patterns stripped before tokenizing, so prose is not
    /// misread as time tokens.
    pub noise_patterns: Vec<String>,

    /// Minimum backwards time jump, in minutes, that marks the direction
    /// boundary in an undelimited stream.
    pub boundary_threshold_mins: i64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            heading: "EASTBOUND".to_string(),
            heading_direction: Direction::Eastbound,
            skip_marker: '–',
            noise_patterns: vec![
                // Service-suspension notices.
                r"(?i)(?:trains?|service)\s+(?:do(?:es)?\s+not|will\s+not)\s+(?:stop|operate)[^.\n]*[.\n]?".to_string(),
                // Skip-marker legend lines.
                r"(?i)=\s*(?:train\s+)?(?:does\s+not\s+stop|no\s+stop)[^.\n]*[.\n]?".to_string(),
            ],
            boundary_threshold_mins: BOUNDARY_THRESHOLD_MINS,
        }
    }
}

/// Recovers a two-direction, per-station timetable from a flat stream of
/// notice text tokens.
#[derive(Debug, Clone)]
pub struct ScheduleExtractor {
    registry: StationRegistry,
    tokenizer: Tokenizer,
    noise: Vec<Regex>,
    heading: String,
    heading_direction: Direction,
    boundary_threshold_mins: i64,
}

impl ScheduleExtractor {
    /// Build an extractor for a station registry.
    pub fn new(registry: StationRegistry, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let noise = config
            .noise_patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            registry,
            tokenizer: Tokenizer::new(config.skip_marker)?,
            noise,
            heading: config.heading,
            heading_direction: config.heading_direction,
            boundary_threshold_mins: config.boundary_threshold_mins,
        })
    }

    /// Extract a departure timetable from raw notice text.
    ///
    /// Returns `None` when no direction boundary can be located in an
    /// undelimited stream, or when every station in both directions ends
    /// up empty. Both are "no special schedule in this document", never
    /// an error.
    pub fn extract(&self, raw_text: &str) -> Option<DirectionalTimes> {
        let text = self.strip_noise(raw_text);

        let (first, second) = match layout::detect(&text, &self.heading, &self.tokenizer) {
            Layout::Delimited { first, second } => {
                debug!(
                    first_tokens = first.len(),
                    second_tokens = second.len(),
                    "delimited layout"
                );
                (first, second)
            }
            Layout::Undelimited(stream) => {
                debug!(tokens = stream.len(), "undelimited layout");
                let boundary = find_direction_boundary(
                    &stream,
                    self.registry.len(),
                    self.boundary_threshold_mins,
                )?;
                let mut first = stream;
                let second = first.split_off(boundary);
                (first, second)
            }
        };

        let mut result = DirectionalTimes::with_stations(self.registry.keys());
        self.assign(&mut result, self.heading_direction.opposite(), &first);
        self.assign(&mut result, self.heading_direction, &second);

        if result.is_all_empty() {
            debug!("extraction produced no usable departures");
            return None;
        }
        Some(result)
    }

    fn strip_noise(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for pattern in &self.noise {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
        cleaned
    }

    /// Assign a direction's token stream to stations by position modulo
    /// station count, walking that direction's travel order. A skip-stop
    /// token consumes a station slot without contributing a time.
    fn assign(&self, out: &mut DirectionalTimes, direction: Direction, tokens: &[Token]) {
        let order: Vec<_> = self.registry.ordered_keys(direction).collect();
        if order.is_empty() {
            return;
        }

        let map = out.direction_mut(direction);
        for (position, token) in tokens.iter().enumerate() {
            if let Token::Time(time) = token {
                let key = order[position % order.len()];
                if let Some(list) = map.get_mut(key) {
                    list.push(time.to_hhmm());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationKey;
    use crate::stations::Station;
    use std::collections::HashMap;

    fn registry(keys: &[&str]) -> StationRegistry {
        let stations = keys
            .iter()
            .map(|k| Station {
                key: StationKey::new(*k),
                name: k.to_uppercase(),
            })
            .collect();
        StationRegistry::new(stations, HashMap::new())
    }

    fn extractor(keys: &[&str]) -> ScheduleExtractor {
        ScheduleExtractor::new(registry(keys), ExtractorConfig::default()).unwrap()
    }

    fn times<'a>(result: &'a DirectionalTimes, dir: Direction, key: &str) -> &'a [String] {
        &result.direction(dir)[&StationKey::new(key)]
    }

    #[test]
    fn delimited_layout_keeps_directions_apart() {
        let ex = extractor(&["alpha", "bravo"]);
        let text = "WESTBOUND 9:00 AM 9:05 AM 10:00 AM 10:05 AM\n\
                    EASTBOUND 5:00 PM 5:05 PM";
        let result = ex.extract(text).unwrap();

        // Westbound walks registry order.
        assert_eq!(times(&result, Direction::Westbound, "alpha"), ["09:00", "10:00"]);
        assert_eq!(times(&result, Direction::Westbound, "bravo"), ["09:05", "10:05"]);
        // Eastbound walks the reverse order.
        assert_eq!(times(&result, Direction::Eastbound, "bravo"), ["17:00"]);
        assert_eq!(times(&result, Direction::Eastbound, "alpha"), ["17:05"]);
    }

    #[test]
    fn undelimited_layout_splits_at_detected_boundary() {
        let ex = extractor(&["alpha", "bravo"]);
        // No heading: westbound tail then eastbound head.
        let text = "10:00 PM 10:10 PM 6:00 AM 6:10 AM";
        let result = ex.extract(text).unwrap();

        assert_eq!(times(&result, Direction::Westbound, "alpha"), ["22:00"]);
        assert_eq!(times(&result, Direction::Westbound, "bravo"), ["22:10"]);
        assert_eq!(times(&result, Direction::Eastbound, "bravo"), ["06:00"]);
        assert_eq!(times(&result, Direction::Eastbound, "alpha"), ["06:10"]);
    }

    #[test]
    fn undelimited_without_boundary_yields_none() {
        let ex = extractor(&["alpha", "bravo"]);
        // Monotone times: no backwards jump anywhere.
        assert_eq!(ex.extract("6:00 AM 6:10 AM 7:00 AM 7:10 AM"), None);
    }

    #[test]
    fn skip_stop_advances_the_station_cursor() {
        let ex = extractor(&["alpha", "bravo"]);
        let text = "WESTBOUND – 9:05 AM\nEASTBOUND 5:00 PM 5:05 PM";
        let result = ex.extract(text).unwrap();

        // The marker consumed alpha's slot; only bravo got a time.
        assert_eq!(times(&result, Direction::Westbound, "alpha"), [] as [&str; 0]);
        assert_eq!(times(&result, Direction::Westbound, "bravo"), ["09:05"]);
    }

    #[test]
    fn appearance_order_is_not_resorted() {
        let ex = extractor(&["alpha"]);
        let text = "WESTBOUND 9:00 PM 6:00 AM\nEASTBOUND 7:00 AM";
        let result = ex.extract(text).unwrap();

        // 21:00 stays before 06:00: document order, not sorted.
        assert_eq!(times(&result, Direction::Westbound, "alpha"), ["21:00", "06:00"]);
    }

    #[test]
    fn noise_is_stripped_before_tokenizing() {
        let ex = extractor(&["alpha", "bravo"]);
        // The suspension notice contains a time that must not become a
        // token, which would otherwise shift every assignment after it.
        let text = "Trains will not stop at Bravo after 9:45 PM.\n\
                    WESTBOUND 9:00 AM 9:05 AM\nEASTBOUND 5:00 PM 5:05 PM";
        let result = ex.extract(text).unwrap();

        assert_eq!(times(&result, Direction::Westbound, "alpha"), ["09:00"]);
        assert_eq!(times(&result, Direction::Westbound, "bravo"), ["09:05"]);
    }

    #[test]
    fn empty_registry_fails_the_validity_gate() {
        let ex = extractor(&[]);
        assert_eq!(ex.extract("WESTBOUND 9:00 AM\nEASTBOUND 5:00 PM"), None);
    }

    #[test]
    fn blank_document_yields_none() {
        let ex = extractor(&["alpha", "bravo"]);
        assert_eq!(ex.extract(""), None);
        assert_eq!(ex.extract("No departures are listed here."), None);
    }

    #[test]
    fn wraps_around_station_count_for_multiple_table_rows() {
        let ex = extractor(&["alpha", "bravo"]);
        let text = "WESTBOUND 9:00 AM 9:05 AM 10:00 AM 10:05 AM 11:00 AM 11:05 AM\n\
                    EASTBOUND 5:00 PM 5:05 PM";
        let result = ex.extract(text).unwrap();

        assert_eq!(
            times(&result, Direction::Westbound, "alpha"),
            ["09:00", "10:00", "11:00"]
        );
        assert_eq!(
            times(&result, Direction::Westbound, "bravo"),
            ["09:05", "10:05", "11:05"]
        );
    }

    #[test]
    fn invalid_noise_pattern_is_a_construction_error() {
        let config = ExtractorConfig {
            noise_patterns: vec!["(unclosed".to_string()],
            ..ExtractorConfig::default()
        };
        assert!(ScheduleExtractor::new(registry(&["alpha"]), config).is_err());
    }
}
