//! Direction boundary detection for undelimited token streams.

use tracing::debug;

use super::token::Token;

/// Default threshold for the backwards jump that marks the direction
/// boundary, in minutes (6 hours).
pub const BOUNDARY_THRESHOLD_MINS: i64 = 6 * 60;

/// Locate the index where an undelimited stream switches direction.
///
/// The stream interleaves one direction's full table followed by the
/// other's, with `stride` tokens (one per station) per table row. The
/// switch shows up as a large backwards time jump between a late time in
/// the first table's tail and an early time in the second table's head.
/// Scanning stride-aligned positions, the time at `i - stride` is
/// compared with the time at `i`; the first position where the earlier
/// token exceeds the later one by more than `threshold_mins` is the
/// boundary. Positions where either token is a skip-stop marker cannot be
/// compared and are passed over.
///
/// Returns `None` when no stride-aligned position qualifies; the caller
/// treats that as extraction failure rather than guessing a split.
///
/// # Examples
///
/// ```
/// use timetable_builder::domain::{ClockTime12, Meridiem};
/// use timetable_builder::notice::{BOUNDARY_THRESHOLD_MINS, Token, find_direction_boundary};
///
/// let t = |h, m, mer| Token::Time(ClockTime12::new(h, m, mer).unwrap());
/// let stream = [
///     t(10, 0, Meridiem::Pm), t(10, 10, Meridiem::Pm),  // first direction's tail
///     t(6, 0, Meridiem::Am), t(6, 10, Meridiem::Am),    // second direction's head
/// ];
/// assert_eq!(
///     find_direction_boundary(&stream, 2, BOUNDARY_THRESHOLD_MINS),
///     Some(2),
/// );
/// ```
pub fn find_direction_boundary(
    tokens: &[Token],
    stride: usize,
    threshold_mins: i64,
) -> Option<usize> {
    if stride == 0 {
        return None;
    }

    let mut at = stride;
    while at < tokens.len() {
        if let (Some(earlier), Some(later)) =
            (tokens[at - stride].time(), tokens[at].time())
        {
            let drop = earlier.minutes_since_midnight() as i64
                - later.minutes_since_midnight() as i64;
            if drop > threshold_mins {
                debug!(boundary = at, drop_mins = drop, "direction boundary found");
                return Some(at);
            }
        }
        at += stride;
    }

    debug!("no direction boundary in token stream");
    None
}
