//! Layout decision for notice documents.
//!
//! Two table layouts survive document-to-text conversion. In the
//! delimited layout a literal section heading marks where the second
//! direction's table begins, so the text splits cleanly. In the
//! undelimited layout the two tables run together and the split must be
//! found numerically, by boundary detection over one token stream. The
//! decision is explicit and each variant carries its own token stream,
//! keeping boundary detection isolated from heading dispatch.

use super::token::{Token, Tokenizer};

/// The detected document layout with its token stream(s).
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// The section heading split the text into two spans that each
    /// contain at least one time token. `first` is the span before the
    /// heading, `second` the span after.
    Delimited { first: Vec<Token>, second: Vec<Token> },
    /// No usable heading split; all tokens as one ordered stream.
    Undelimited(Vec<Token>),
}

/// Decide the layout of a notice document.
///
/// The delimited layout is used only when the heading is present and
/// both resulting spans hold at least one time token; anything else
/// falls back to the undelimited stream.
pub fn detect(text: &str, heading: &str, tokenizer: &Tokenizer) -> Layout {
    if let Some(at) = text.find(heading) {
        let first = tokenizer.tokenize(&text[..at]);
        let second = tokenizer.tokenize(&text[at + heading.len()..]);
        if has_time(&first) && has_time(&second) {
            return Layout::Delimited { first, second };
        }
    }
    Layout::Undelimited(tokenizer.tokenize(text))
}

fn has_time(tokens: &[Token]) -> bool {
    tokens.iter().any(|t| t.time().is_some())
}
