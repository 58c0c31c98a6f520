//! Approach time parsing and formatting
//!
//! Source data carries minute precision only. Seconds are never rendered and
//! are zeroed on parse.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Calendar form used by the NASA close-approach feed, e.g. `1900-Jan-01 00:00`
const CALENDAR_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Numeric form used for output and accepted on input, e.g. `1900-01-01 00:00`
const NUMERIC_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date-only form used by date filters
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an approach time in either calendar or numeric form.
pub fn parse_approach_time(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, CALENDAR_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, NUMERIC_FORMAT))
        .map(truncate_to_minute)
}

/// Formats an approach time as `YYYY-MM-DD HH:MM`.
pub fn format_approach_time(time: &NaiveDateTime) -> String {
    time.format(NUMERIC_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_form() {
        let t = parse_approach_time("1900-Jan-01 00:00").unwrap();
        assert_eq!(format_approach_time(&t), "1900-01-01 00:00");
    }

    #[test]
    fn test_parse_numeric_form() {
        let t = parse_approach_time("2020-12-31 23:59").unwrap();
        assert_eq!(format_approach_time(&t), "2020-12-31 23:59");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_approach_time("yesterday").is_err());
        assert!(parse_approach_time("2020-13-01 00:00").is_err());
    }

    #[test]
    fn test_truncate_drops_seconds() {
        let t = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        let truncated = truncate_to_minute(t);
        assert_eq!(truncated.second(), 0);
        assert_eq!(truncated.minute(), 30);
    }

    #[test]
    fn test_parse_date() {
        let d = parse_date("2020-01-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(parse_date("2020-Jan-01").is_err());
    }
}
