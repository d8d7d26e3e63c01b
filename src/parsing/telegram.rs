//! Shared Telegram parsing utilities.
//!
//! Telegram text exports use a fixed-width, fully numeric header:
//! `[15.01.2024 10:30:45] Alice: hello`

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

/// Full message line: `[DD.MM.YYYY HH:MM:SS] <sender>: <text>`.
pub static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\d{2}\.\d{2}\.\d{4})[^\S\n]+(\d{2}:\d{2}:\d{2})\][^\S\n]*([^:\n]+):[^\S\n]*(.+)")
        .unwrap()
});

/// Detection pattern: a bracketed dot date with a full 24-hour time.
pub static DETECT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d{2}\.\d{2}\.\d{4}\s+\d{2}:\d{2}:\d{2}\]").unwrap());

/// Splits `s` on `sep` into exactly three numbers.
fn split_triplet(s: &str, sep: char) -> Option<(u32, u32, u32)> {
    let mut parts = s.split(sep).map(str::parse::<u32>);
    let a = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    let c = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b, c))
}

/// Builds a UTC timestamp from `DD.MM.YYYY` and `HH:MM:SS`.
///
/// Any out-of-range field gives `None`; the caller keeps the record anyway.
pub fn parse_telegram_timestamp(date_str: &str, time_str: &str) -> Option<DateTime<Utc>> {
    let (day, month, year) = split_triplet(date_str, '.')?;
    let (hour, minute, second) = split_triplet(time_str, ':')?;

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?
        .and_hms_opt(hour, minute, second)
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_telegram_timestamp("15.01.2024", "10:30:45").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap());
    }

    #[test]
    fn test_out_of_range_fields() {
        assert!(parse_telegram_timestamp("32.01.2024", "10:30:45").is_none());
        assert!(parse_telegram_timestamp("15.13.2024", "10:30:45").is_none());
        assert!(parse_telegram_timestamp("15.01.2024", "24:00:00").is_none());
        assert!(parse_telegram_timestamp("29.02.2023", "10:00:00").is_none());
    }

    #[test]
    fn test_line_pattern_is_strict() {
        assert!(LINE_PATTERN.is_match("[15.01.2024 10:30:45] Alice: Hi"));
        assert!(!LINE_PATTERN.is_match("[15.01.24 10:30:45] Alice: Hi"));
        assert!(!LINE_PATTERN.is_match("[15.01.2024 10:30] Alice: Hi"));
        assert!(!LINE_PATTERN.is_match("[5.1.2024 10:30:45] Alice: Hi"));
    }

    #[test]
    fn test_detect_pattern() {
        assert!(DETECT_PATTERN.is_match("x [15.01.2024 10:30:45] y"));
        assert!(!DETECT_PATTERN.is_match("[15/01/2024, 10:30:45]"));
    }
}
