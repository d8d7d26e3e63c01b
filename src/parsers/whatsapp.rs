//! WhatsApp text export parser.
//!
//! Recognized line shape:
//! - `[15/3/24, 9:05 PM] Alice: hello`
//! - `[15/03/2024, 21:05:30] Alice: hello`
//!
//! Dates are day/month/year. Two-digit years land in the 2000s. A line whose
//! bracketed time can't be read still yields a record, without a timestamp.

use regex::Regex;

use crate::ParsedMessage;
use crate::parser::{Parser, Platform};
use crate::parsing::{self, whatsapp};

/// Parser for WhatsApp text exports.
///
/// # Example
///
/// ```rust
/// use chatmirror::parser::Parser;
/// use chatmirror::parsers::WhatsAppParser;
///
/// let parser = WhatsAppParser::new();
/// let messages = parser.parse_str("[1/1/24, noon] Bob: hi");
/// assert_eq!(messages.len(), 1);
/// assert!(messages[0].timestamp.is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WhatsAppParser {
    pattern: &'static Regex,
}

impl WhatsAppParser {
    /// Creates a parser using the shared compiled line pattern.
    pub fn new() -> Self {
        Self {
            pattern: &whatsapp::LINE_PATTERN,
        }
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for WhatsAppParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn platform(&self) -> Platform {
        Platform::WhatsApp
    }

    fn parse_str(&self, content: &str) -> Vec<ParsedMessage> {
        parsing::extract_with(self.pattern, content, whatsapp::parse_whatsapp_timestamp)
    }
}
