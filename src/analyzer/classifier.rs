//! Line classification for marker matching and timestamp extraction.
//!
//! A relevant log line looks like:
//!
//! ```text
//! 2024-01-15 14:23:45 2FA - Email sent to user@example.com
//! ```
//!
//! Classification triggers on the marker substring; the leading date and
//! time tokens are used for daily and hourly bucketing.

use crate::constants::{DATE_FORMAT, MARKER, MAX_HOUR};
use chrono::NaiveDate;

/// Date and hour bucket extracted from a matching log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Validated `YYYY-MM-DD` date token
    pub date: String,
    /// Hour-of-day bucket, absent when the time token did not yield one
    pub hour: Option<u8>,
}

/// Classify a single log line.
///
/// Returns `None` when the line does not contain the marker, or when the
/// line's first whitespace-delimited field is not a valid `YYYY-MM-DD`
/// date; such lines are dropped from every tally. A matching line with a
/// valid date but an unparseable or out-of-range hour still classifies;
/// only `hour` is absent.
///
/// Pure function of the line text; no I/O, no side effects.
pub fn classify(line: &str) -> Option<LineMatch> {
    if !line.contains(MARKER) {
        return None;
    }

    let mut fields = line.split_whitespace();
    let date_token = fields.next()?;
    NaiveDate::parse_from_str(date_token, DATE_FORMAT).ok()?;

    // Second field is an HH:MM:SS-shaped token; only the hour matters.
    let hour = fields.next().and_then(parse_hour);

    Some(LineMatch {
        date: date_token.to_string(),
        hour,
    })
}

/// Parse the hour from an `HH:MM:SS`-shaped token.
///
/// Takes the substring before the first `:` (the whole token when there is
/// no colon) and accepts only values in `[0, MAX_HOUR]`.
fn parse_hour(time_token: &str) -> Option<u8> {
    let hour_part = time_token.split(':').next()?;
    let hour: u8 = hour_part.parse().ok()?;
    (hour <= MAX_HOUR).then_some(hour)
}
