//! Parser for unstructured, pasted conversations.
//!
//! There is nothing to match on, so every non-blank line becomes one message
//! and speakers alternate by position. No diarization is attempted.

use chrono::{DateTime, Utc};

use crate::ParsedMessage;
use crate::config::ManualConfig;
use crate::parser::{Parser, Platform};

/// Parser for freeform text.
///
/// All records from one call share the wall-clock time of that call, since
/// the text carries no per-line time information.
///
/// # Example
///
/// ```rust
/// use chatmirror::parser::Parser;
/// use chatmirror::parsers::ManualParser;
///
/// let messages = ManualParser::new().parse_str("hello\n\nworld");
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].sender, "You");
/// assert_eq!(messages[1].sender, "Them");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualParser {
    config: ManualConfig,
}

impl ManualParser {
    /// Creates a parser with the default `You` / `Them` labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom speaker labels.
    pub fn with_config(config: ManualConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ManualConfig {
        &self.config
    }

    /// Parses `content`, stamping every record with `now`.
    pub fn parse_at(&self, content: &str, now: DateTime<Utc>) -> Vec<ParsedMessage> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| ParsedMessage::with_metadata(Some(now), self.config.sender_for(i), line))
            .collect()
    }
}

impl Parser for ManualParser {
    fn name(&self) -> &'static str {
        "Manual"
    }

    fn platform(&self) -> Platform {
        Platform::Manual
    }

    fn parse_str(&self, content: &str) -> Vec<ParsedMessage> {
        self.parse_at(content, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_lines_excluded() {
        let messages = ManualParser::new().parse_str("hello\n\nworld");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "hello");
        assert_eq!(messages[1].text, "world");
    }

    #[test]
    fn test_alternation_uses_filtered_index() {
        let messages = ManualParser::new().parse_str("a\n\n   \nb\nc\n\nd");
        let senders: Vec<&str> = messages.iter().map(|m| m.sender.as_str()).collect();
        assert_eq!(senders, ["You", "Them", "You", "Them"]);
    }

    #[test]
    fn test_shared_parse_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let messages = ManualParser::new().parse_at("one\ntwo\nthree", now);
        assert!(messages.iter().all(|m| m.timestamp == Some(now)));
    }

    #[test]
    fn test_lines_trimmed() {
        let messages = ManualParser::new().parse_str("   padded   \r\n\tTabbed\t");
        assert_eq!(messages[0].text, "padded");
        assert_eq!(messages[1].text, "Tabbed");
    }

    #[test]
    fn test_custom_labels() {
        let parser = ManualParser::with_config(ManualConfig::new().with_senders("Me", "Grandma"));
        let messages = parser.parse_str("hi\nhello dear");
        assert_eq!(messages[0].sender, "Me");
        assert_eq!(messages[1].sender, "Grandma");
        assert_eq!(parser.config().first_sender, "Me");
    }

    #[test]
    fn test_text_identical_across_runs() {
        let parser = ManualParser::new();
        let a = parser.parse_str("x\ny");
        let b = parser.parse_str("x\ny");
        let strip = |v: &[ParsedMessage]| -> Vec<(String, String)> {
            v.iter().map(|m| (m.sender.clone(), m.text.clone())).collect()
        };
        assert_eq!(strip(&a), strip(&b));
    }
}
