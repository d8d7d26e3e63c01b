//! Shared WhatsApp parsing utilities.
//!
//! Patterns and timestamp normalization used by both the WhatsApp parser and
//! platform detection.
//!
//! Recognized line shape: `[15/3/24, 9:05 PM] Alice: hello`

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

/// Full message line: `[<date>, <time>] <sender>: <text>`.
///
/// The time group is captured loosely (anything up to the closing bracket) so
/// that a line with an unreadable time still yields a record; whether a
/// timestamp can be built is decided by [`TIME_PATTERN`].
pub static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{1,2}/\d{1,2}/\d{2,4}),?[^\S\n]+([^\]\n]+)\][^\S\n]*([^:\n]+):[^\S\n]*(.+)")
        .unwrap()
});

/// Inner time pattern: `H:MM`, optional `:SS`, optional AM/PM marker.
pub static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s?([AP]M))?").unwrap()
});

/// Detection pattern: a bracketed slash date followed by a clock time.
pub static DETECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d{1,2}/\d{1,2}/\d{2,4},?\s+\d{1,2}:\d{2}").unwrap());

/// Two-digit years below this value are read as `2000 + year`.
const CENTURY_PIVOT: i32 = 100;

/// Parses a `D/M/Y` date string.
///
/// Day and month may have one or two digits; a year below 100 is shifted into
/// the 2000s (`24` becomes `2024`).
pub fn parse_whatsapp_date(date_str: &str) -> Option<NaiveDate> {
    let mut parts = date_str.split('/').map(|p| p.trim().parse::<i32>());
    let day = parts.next()?.ok()?;
    let month = parts.next()?.ok()?;
    let year = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }

    let year = if year < CENTURY_PIVOT { 2000 + year } else { year };
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Parses a clock time with optional seconds and an optional AM/PM marker.
///
/// `PM` adds twelve hours except at 12; `12 AM` is midnight. Missing seconds
/// default to zero.
pub fn parse_whatsapp_time(time_str: &str) -> Option<NaiveTime> {
    let caps = TIME_PATTERN.captures(time_str)?;

    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    let second = caps
        .get(3)
        .map_or(Ok(0), |m| m.as_str().parse::<u32>())
        .ok()?;

    if let Some(period) = caps.get(4) {
        let pm = period.as_str().eq_ignore_ascii_case("pm");
        if pm && hour != 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
    }

    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Builds a UTC timestamp from the captured date and time strings.
///
/// Returns `None` when either part can't be read or names an impossible
/// calendar instant.
pub fn parse_whatsapp_timestamp(date_str: &str, time_str: &str) -> Option<DateTime<Utc>> {
    let date = parse_whatsapp_date(date_str)?;
    let time = parse_whatsapp_time(time_str)?;
    Some(date.and_time(time).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_two_digit_year() {
        let date = parse_whatsapp_date("01/02/24").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_four_digit_year_untouched() {
        assert_eq!(parse_whatsapp_date("5/6/1999").unwrap().year(), 1999);
    }

    #[test]
    fn test_invalid_calendar_date() {
        assert!(parse_whatsapp_date("31/02/24").is_none());
        assert!(parse_whatsapp_date("1/13/24").is_none());
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(parse_whatsapp_time("11:15 PM").unwrap().hour(), 23);
        assert_eq!(parse_whatsapp_time("12:00 AM").unwrap().hour(), 0);
        assert_eq!(parse_whatsapp_time("12:00 PM").unwrap().hour(), 12);
        assert_eq!(parse_whatsapp_time("9:05 am").unwrap().hour(), 9);
        assert_eq!(parse_whatsapp_time("9:05pm").unwrap().hour(), 21);
    }

    #[test]
    fn test_narrow_space_before_marker() {
        let time = parse_whatsapp_time("9:05\u{202f}PM").unwrap();
        assert_eq!(time.hour(), 21);
    }

    #[test]
    fn test_seconds() {
        let time = parse_whatsapp_time("10:30:45").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (10, 30, 45));
        assert_eq!(parse_whatsapp_time("10:30").unwrap().second(), 0);
    }

    #[test]
    fn test_unreadable_time() {
        assert!(parse_whatsapp_time("noon").is_none());
        assert!(parse_whatsapp_time("25:00").is_none());
        assert!(parse_whatsapp_timestamp("1/1/24", "noon").is_none());
    }

    #[test]
    fn test_line_pattern_groups() {
        let caps = LINE_PATTERN
            .captures("[15/3/24, 9:05 PM] Alice: hello: world")
            .unwrap();
        assert_eq!(&caps[1], "15/3/24");
        assert_eq!(&caps[2], "9:05 PM");
        assert_eq!(&caps[3], "Alice");
        assert_eq!(&caps[4], "hello: world");
    }

    #[test]
    fn test_detect_pattern() {
        assert!(DETECT_PATTERN.is_match("[1/15/24, 10:30:45 AM] Alice: Hi"));
        assert!(DETECT_PATTERN.is_match("[1/15/24 10:30] Alice: Hi"));
        assert!(!DETECT_PATTERN.is_match("[15.01.2024 10:30:45] Alice: Hi"));
    }
}
