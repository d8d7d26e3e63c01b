//! Unified parser trait and platform dispatch.
//!
//! # Example
//!
//! ```rust
//! use chatmirror::parser::{Platform, parse};
//!
//! let messages = parse("[15/3/24, 9:05 PM] Alice: hello", Platform::WhatsApp);
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender, "Alice");
//! ```
//!
//! # Platform Selection
//!
//! Use [`Platform`] to pick a parser at runtime:
//!
//! ```rust
//! use chatmirror::parser::{Platform, create_parser};
//!
//! let parser = create_parser(Platform::Telegram);
//! assert_eq!(parser.name(), "Telegram");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ParsedMessage;
use crate::error::ChatmirrorError;
use crate::parsers::{ManualParser, TelegramParser, WhatsAppParser};

/// Extraction strategy selected by the caller.
///
/// Exactly three tags exist. Anything else is rejected by
/// [`FromStr`](std::str::FromStr) before a parser is ever built.
///
/// ```rust
/// use chatmirror::parser::Platform;
/// use std::str::FromStr;
///
/// assert_eq!(Platform::from_str("whatsapp").unwrap(), Platform::WhatsApp);
/// assert_eq!(Platform::from_str("tg").unwrap(), Platform::Telegram);
/// assert!(Platform::from_str("signal").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// WhatsApp text export: `[D/M/YY, H:MM AM] Sender: Text`
    #[serde(alias = "wa")]
    WhatsApp,

    /// Telegram text export: `[DD.MM.YYYY HH:MM:SS] Sender: Text`
    #[serde(alias = "tg")]
    Telegram,

    /// Freeform pasted text with alternating speakers
    Manual,
}

impl Platform {
    /// Returns the lowercase tag used on the wire and in storage.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::Telegram => "telegram",
            Platform::Manual => "manual",
        }
    }

    /// Returns all accepted names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["whatsapp", "wa", "telegram", "tg", "manual"]
    }

    /// Returns all platforms.
    pub fn all() -> &'static [Platform] {
        &[Platform::WhatsApp, Platform::Telegram, Platform::Manual]
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::WhatsApp => write!(f, "WhatsApp"),
            Platform::Telegram => write!(f, "Telegram"),
            Platform::Manual => write!(f, "Manual"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = ChatmirrorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" | "wa" => Ok(Platform::WhatsApp),
            "telegram" | "tg" => Ok(Platform::Telegram),
            "manual" => Ok(Platform::Manual),
            _ => Err(ChatmirrorError::invalid_platform(s)),
        }
    }
}

/// Common interface of the per-platform parsers.
///
/// Parsing text never fails: unrecognized lines are skipped and unreadable
/// dates become `None` timestamps. Only reading from disk can return an error.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl Parser for MyParser {
///     fn name(&self) -> &'static str { "MyParser" }
///     fn platform(&self) -> Platform { Platform::Manual }
///
///     fn parse_str(&self, content: &str) -> Vec<ParsedMessage> {
///         content.lines().map(|l| ParsedMessage::new("Me", l)).collect()
///     }
/// }
/// ```
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the platform this parser handles.
    fn platform(&self) -> Platform;

    /// Extracts every message from `content`, in source order.
    fn parse_str(&self, content: &str) -> Vec<ParsedMessage>;

    /// Reads a text export from disk and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatmirrorError::Io`] if the file can't be read.
    fn parse(&self, path: &Path) -> Result<Vec<ParsedMessage>, ChatmirrorError> {
        let content = fs::read_to_string(path)?;
        Ok(self.parse_str(&content))
    }

    /// Convenience wrapper around [`parse`](Parser::parse) taking a `&str` path.
    fn parse_file(&self, path: &str) -> Result<Vec<ParsedMessage>, ChatmirrorError> {
        self.parse(Path::new(path))
    }
}

/// Creates the parser for `platform`.
pub fn create_parser(platform: Platform) -> Box<dyn Parser> {
    match platform {
        Platform::WhatsApp => Box::new(WhatsAppParser::new()),
        Platform::Telegram => Box::new(TelegramParser::new()),
        Platform::Manual => Box::new(ManualParser::new()),
    }
}

/// Parses `content` with the strategy selected by `platform`.
///
/// Pure apart from manual mode, which stamps every record with the time of
/// the call.
pub fn parse(content: &str, platform: Platform) -> Vec<ParsedMessage> {
    match platform {
        Platform::WhatsApp => WhatsAppParser::new().parse_str(content),
        Platform::Telegram => TelegramParser::new().parse_str(content),
        Platform::Manual => ManualParser::new().parse_str(content),
    }
}
