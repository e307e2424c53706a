//! Heuristic Text Schedule Extractor.
//!
//! Recovers a two-direction, per-station departure timetable from a
//! special-schedule notice reduced to flat text. No positional metadata
//! survives document-to-text conversion, so structure is inferred from
//! token order, the section heading convention, and numeric heuristics.
//! Extraction is conservative: when the direction boundary cannot be
//! located, or nothing usable comes out, the result is `None` rather than
//! a guess.

mod boundary;
mod extract;
mod layout;
mod token;

pub use boundary::{BOUNDARY_THRESHOLD_MINS, find_direction_boundary};
pub use extract::{ExtractorConfig, ExtractorError, ScheduleExtractor};
pub use layout::{Layout, detect as detect_layout};
pub use token::{Token, Tokenizer};
