//! Telegram text export parser.
//!
//! Recognized line shape: `[15.01.2024 10:30:45] Alice: hello`
//!
//! The header is fixed-width: two-digit day and month, four-digit year,
//! 24-hour time with mandatory seconds.

use regex::Regex;

use crate::ParsedMessage;
use crate::parser::{Parser, Platform};
use crate::parsing::{self, telegram};

/// Parser for Telegram text exports.
///
/// # Example
///
/// ```rust
/// use chatmirror::parser::Parser;
/// use chatmirror::parsers::TelegramParser;
///
/// let messages = TelegramParser::new().parse_str("[15.01.2024 10:30:45] Alice: Hello");
/// assert_eq!(messages[0].sender, "Alice");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TelegramParser {
    pattern: &'static Regex,
}

impl TelegramParser {
    /// Creates a parser using the shared compiled line pattern.
    pub fn new() -> Self {
        Self {
            pattern: &telegram::LINE_PATTERN,
        }
    }
}

impl Default for TelegramParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for TelegramParser {
    fn name(&self) -> &'static str {
        "Telegram"
    }

    fn platform(&self) -> Platform {
        Platform::Telegram
    }

    fn parse_str(&self, content: &str) -> Vec<ParsedMessage> {
        parsing::extract_with(self.pattern, content, telegram::parse_telegram_timestamp)
    }
}
