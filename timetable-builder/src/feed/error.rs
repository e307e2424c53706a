//! Feed errors.

/// Error raised while reading static feed tables.
///
/// These are structural failures: the table could not be parsed into
/// rows, or a required column is missing. No partial timetable is ever
/// produced from them. Rows that merely reference unknown trips,
/// stations, or directions are not errors; they are skipped during
/// projection.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The table text could not be parsed, or a required column is
    /// missing from a row.
    #[error("malformed feed table: {0}")]
    Malformed(#[from] csv::Error),

    /// The table could not be read at all.
    #[error("failed to read feed table: {0}")]
    Io(#[from] std::io::Error),
}
