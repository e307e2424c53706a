//! Time-token grammar for extracted notice text.
//!
//! Document-to-text conversion loses all layout, so the only structure
//! left is token order. A token is either a 12-hour clock reading or the
//! single designated skip-stop marker. The grammar is deliberately
//! lenient about the meridiem marker: the space before it may or may not
//! survive extraction, and a trailing letter ("AM" vs bare "A") may or
//! may not be present.

use regex::Regex;

use crate::domain::{ClockTime12, Meridiem};

use super::ExtractorError;

/// One token recovered from notice text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A departure time.
    Time(ClockTime12),
    /// The train does not call at this position in the sequence. The
    /// token consumes a station slot but contributes no time.
    Skip,
}

impl Token {
    /// The clock reading, if this token is a time.
    pub fn time(&self) -> Option<ClockTime12> {
        match self {
            Token::Time(t) => Some(*t),
            Token::Skip => None,
        }
    }
}

/// Compiled token grammar.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    /// Compile the grammar for a given skip-stop marker character.
    pub fn new(skip_marker: char) -> Result<Self, ExtractorError> {
        // Hour 1-12 with optional leading zero, two-digit minute,
        // optional whitespace, one meridiem letter, optional trailing
        // letter. Alternated with the literal skip marker.
        let pattern = format!(
            r"\b(1[0-2]|0?[1-9]):([0-5][0-9])\s?([AaPp])[A-Za-z]?|{}",
            regex::escape(&skip_marker.to_string()),
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Extract all tokens from a span of text, in appearance order.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| match caps.get(1) {
                None => Some(Token::Skip),
                Some(hour) => {
                    let hour = hour.as_str().parse().ok()?;
                    let minute = caps.get(2)?.as_str().parse().ok()?;
                    let meridiem = match caps.get(3)?.as_str() {
                        "p" | "P" => Meridiem::Pm,
                        _ => Meridiem::Am,
                    };
                    ClockTime12::new(hour, minute, meridiem).ok().map(Token::Time)
                }
            })
            .collect()
    }
}
