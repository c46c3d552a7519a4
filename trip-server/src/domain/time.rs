//! Start-time parsing and fractional-hour arithmetic.
//!
//! Trip requests carry an ISO-8601 start timestamp. The simulator works in
//! fractional hours, so this module also converts hours to `chrono`
//! durations at microsecond resolution.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// Error returned when a start timestamp cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid start time {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Timestamps used throughout a simulation.
pub type Timestamp = DateTime<FixedOffset>;

/// Formats with an offset that RFC 3339 parsing does not cover.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Formats accepted for timestamps without an offset, interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Byte position of the date/time separator in `YYYY-MM-DDTHH:MM`.
const SEPARATOR_INDEX: usize = 10;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Parse an ISO-8601 start timestamp.
///
/// A trailing `Z` is normalised to `+00:00` before parsing, so both
/// `2024-01-01T08:00:00Z` and `2024-01-01T08:00:00+00:00` are accepted.
/// Seconds are optional, and a space may stand in for the `T` separator.
/// Timestamps with no offset at all (`2024-01-01T08:00`, as produced by
/// HTML `datetime-local` inputs) are taken to be UTC, and a bare date is
/// midnight UTC.
///
/// # Examples
///
/// ```
/// use trip_server::domain::parse_start_time;
///
/// let t = parse_start_time("2024-01-01T08:00:00Z").unwrap();
/// assert_eq!(t.to_rfc3339(), "2024-01-01T08:00:00+00:00");
///
/// let t = parse_start_time("2024-01-01T08:00:00-05:00").unwrap();
/// assert_eq!(t.offset().local_minus_utc(), -5 * 3600);
///
/// assert!(parse_start_time("next tuesday").is_err());
/// ```
pub fn parse_start_time(s: &str) -> Result<Timestamp, TimeError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(TimeError::new(s, "empty timestamp"));
    }

    let mut normalized = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };
    if normalized.get(SEPARATOR_INDEX..=SEPARATOR_INDEX) == Some(" ") {
        normalized.replace_range(SEPARATOR_INDEX..=SEPARATOR_INDEX, "T");
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(t);
    }

    for format in OFFSET_FORMATS {
        if let Ok(t) = DateTime::parse_from_str(&normalized, format) {
            return Ok(t);
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    Err(TimeError::new(s, "expected ISO-8601 date and time"))
}

/// Convert fractional hours to a duration, rounded to the microsecond.
///
/// Negative and non-finite inputs yield a zero duration.
pub fn hours_to_duration(hours: f64) -> Duration {
    if !hours.is_finite() || hours <= 0.0 {
        return Duration::zero();
    }
    Duration::microseconds((hours * MICROS_PER_HOUR).round() as i64)
}

/// Convert a duration back to fractional hours.
pub fn duration_to_hours(duration: Duration) -> f64 {
    duration.num_microseconds().unwrap_or(i64::MAX) as f64 / MICROS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_zulu_suffix() {
        let t = parse_start_time("2024-01-01T08:00:00Z").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 0);
        assert_eq!(t.hour(), 8);
        assert_eq!(t.day(), 1);
    }

    #[test]
    fn parses_explicit_offset() {
        let t = parse_start_time("2024-06-15T22:30:00+02:00").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 7200);
        assert_eq!(t.hour(), 22);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parses_fractional_seconds() {
        let t = parse_start_time("2024-01-01T08:00:00.250Z").unwrap();
        assert_eq!(t.nanosecond(), 250_000_000);
    }

    #[test]
    fn naive_timestamps_are_utc() {
        let t = parse_start_time("2024-01-01T08:00:00").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 0);
        assert_eq!(t.hour(), 8);

        let t = parse_start_time("2024-01-01T08:15").unwrap();
        assert_eq!(t.minute(), 15);
    }

    #[test]
    fn seconds_are_optional_with_offset() {
        let t = parse_start_time("2024-01-01T08:00Z").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-01T08:00:00+00:00");

        let t = parse_start_time("2024-01-01T08:00+02:00").unwrap();
        assert_eq!(t.offset().local_minus_utc(), 7200);
        assert_eq!(t.hour(), 8);
    }

    #[test]
    fn bare_date_is_midnight_utc() {
        let t = parse_start_time("2024-01-01").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn space_separator_is_accepted() {
        let t = parse_start_time("2024-01-01 08:00:00").unwrap();
        assert_eq!(t.to_rfc3339(), "2024-01-01T08:00:00+00:00");

        let t = parse_start_time("2024-01-01 08:00:00-05:00").unwrap();
        assert_eq!(t.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(t.hour(), 8);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_start_time("  2024-01-01T08:00:00Z ").is_ok());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "   ", "08:00", "2024-13-01T08:00:00Z", "2024-01-01T", "yesterday"] {
            assert!(parse_start_time(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn error_message_names_input() {
        let err = parse_start_time("soon").unwrap_err();
        assert_eq!(err.input(), "soon");
        assert_eq!(
            err.to_string(),
            "invalid start time \"soon\": expected ISO-8601 date and time"
        );
    }

    #[test]
    fn hour_conversion() {
        assert_eq!(hours_to_duration(0.25), Duration::minutes(15));
        assert_eq!(hours_to_duration(1.0), Duration::hours(1));
        assert_eq!(hours_to_duration(0.0), Duration::zero());
        assert_eq!(hours_to_duration(-3.0), Duration::zero());
        assert_eq!(hours_to_duration(f64::NAN), Duration::zero());
        assert_eq!(duration_to_hours(Duration::minutes(30)), 0.5);
    }
}
