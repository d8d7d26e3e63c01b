//! The parsed message record.
//!
//! Every parser turns its input into a sequence of [`ParsedMessage`] values,
//! in source order. A record is a plain value: it has no identity of its own
//! and is handed back to the caller, which decides how to persist it.
//!
//! # Examples
//!
//! ```
//! use chatmirror::ParsedMessage;
//!
//! let msg = ParsedMessage::new("Alice", "Hello, world!");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.text(), "Hello, world!");
//! assert!(msg.timestamp().is_none());
//! ```
//!
//! ## Serialization
//!
//! The timestamp is always serialized, as an RFC 3339 string or `null`:
//!
//! ```
//! use chatmirror::ParsedMessage;
//!
//! let json = serde_json::to_string(&ParsedMessage::new("Alice", "Hi"))?;
//! assert_eq!(json, r#"{"timestamp":null,"sender":"Alice","text":"Hi"}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message extracted from a chat export.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<DateTime<Utc>>` | When the message was sent, `None` if the line's date could not be read |
/// | `sender` | `String` | Display name of the author, trimmed |
/// | `text` | `String` | Message body, trimmed; may contain colons |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// When the message was sent.
    ///
    /// `None` is a partial-success signal: the line was recognized but its
    /// date or time could not be turned into a point in time.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Display name of the message author.
    pub sender: String,

    /// Message body.
    pub text: String,
}

impl ParsedMessage {
    /// Creates a record without a timestamp.
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Creates a record with all fields specified.
    pub fn with_metadata(
        timestamp: Option<DateTime<Utc>>,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Builder method to set the timestamp.
    ///
    /// ```rust
    /// use chatmirror::ParsedMessage;
    /// use chrono::Utc;
    ///
    /// let msg = ParsedMessage::new("Alice", "Hello").with_timestamp(Utc::now());
    /// assert!(msg.timestamp().is_some());
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns the timestamp as an RFC 3339 string with second precision.
    pub fn timestamp_rfc3339(&self) -> Option<String> {
        self.timestamp
            .map(|ts| ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}
