//! Static feed row types.
//!
//! Only the columns the builder consumes are declared; extra feed columns
//! are ignored by the reader. A missing required column fails
//! deserialization for the whole table, which is the intended fatal
//! behavior for structurally broken input.

use std::io;

use serde::Deserialize;

use super::error::FeedError;

/// One row of the service calendar table.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRow {
    pub service_id: String,
}

/// One row of the trips table.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRow {
    pub trip_id: String,
    pub service_id: String,
    pub direction_id: String,
}

/// One row of the stop-times table.
///
/// `departure_time` is `HH:MM:SS` where the hour may exceed 23 for
/// service continuing past midnight.
#[derive(Debug, Clone, Deserialize)]
pub struct StopTimeRow {
    pub trip_id: String,
    pub stop_id: String,
    pub departure_time: String,
}

/// Read a whole feed table into typed rows.
///
/// Any unparsable row is fatal for the table: the caller gets an error
/// and no partial row collection.
pub fn read_rows<T, R>(reader: R) -> Result<Vec<T>, FeedError>
where
    T: serde::de::DeserializeOwned,
    R: io::Read,
{
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}
