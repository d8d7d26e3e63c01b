//! Shared parsing utilities.
//!
//! Compiled patterns and timestamp normalization used by the parsers in
//! [`crate::parsers`] and by platform detection in [`crate::detect`]. The
//! patterns are immutable statics; every call builds its own match iterator.

pub mod telegram;
pub mod whatsapp;

pub use telegram::parse_telegram_timestamp;
pub use whatsapp::{parse_whatsapp_date, parse_whatsapp_time, parse_whatsapp_timestamp};

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::ParsedMessage;

/// Runs a four-group line pattern (`date`, `time`, `sender`, `text`) over
/// `content` and builds one record per match.
///
/// Matches whose sender or text is blank after trimming are dropped.
pub(crate) fn extract_with<F>(pattern: &Regex, content: &str, timestamp: F) -> Vec<ParsedMessage>
where
    F: Fn(&str, &str) -> Option<DateTime<Utc>>,
{
    let mut messages = Vec::new();

    for caps in pattern.captures_iter(content) {
        let date = caps.get(1).map_or("", |m| m.as_str());
        let time = caps.get(2).map_or("", |m| m.as_str());
        let sender = caps.get(3).map_or("", |m| m.as_str().trim());
        let text = caps.get(4).map_or("", |m| m.as_str().trim());

        if sender.is_empty() || text.is_empty() {
            continue;
        }

        let ts = timestamp(date, time.trim());
        if ts.is_none() {
            tracing::trace!(date, time, sender, "timestamp could not be normalized");
        }

        messages.push(ParsedMessage::with_metadata(ts, sender, text));
    }

    messages
}
