//! Date and time input parsing.

use chrono::NaiveDateTime;

use crate::error::{PicoPlacaError, Result};

/// Combined input format: `YYYY-MM-DD HH:MM`, 24-hour clock.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Join a `YYYY-MM-DD` date and an `HH:MM` time into one timestamp.
///
/// The year must be exactly four unsigned digits; chrono's `%Y` alone would
/// also take `23-10-02` (year 23) or `+2023-10-02`.
///
/// # Errors
/// Returns `PicoPlacaError::InvalidDateTimeFormat` carrying the joined input
/// when either part does not parse.
pub fn parse_datetime(date: &str, time: &str) -> Result<NaiveDateTime> {
    let joined = format!("{} {}", date, time);
    if !has_four_digit_year(date.as_bytes()) {
        return Err(PicoPlacaError::InvalidDateTimeFormat(joined));
    }
    NaiveDateTime::parse_from_str(&joined, DATETIME_FORMAT)
        .map_err(|_| PicoPlacaError::InvalidDateTimeFormat(joined))
}

fn has_four_digit_year(date: &[u8]) -> bool {
    date.len() > 4 && date[..4].iter().all(u8::is_ascii_digit) && date[4] == b'-'
}
