//! Calendar-day helpers for `YYYY-MM-DD` strings.

use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::error::CoreError;

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Rejects anything jiff would otherwise accept as a date (compact `YYYYMMDD`,
/// trailing time components) as well as impossible days like `2024-02-30`.
pub fn parse_day(value: &str) -> Result<Date, CoreError> {
    let invalid = || CoreError::InvalidDate {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    value.parse::<Date>().map_err(|_| invalid())
}

/// The current calendar day in UTC.
pub fn today_utc() -> Date {
    jiff::Timestamp::now().to_zoned(TimeZone::UTC).date()
}
