//! # Chatmirror
//!
//! A Rust library for turning exported chat transcripts into ordered,
//! timestamped message records.
//!
//! ## Overview
//!
//! Chatmirror understands three kinds of input:
//! - **WhatsApp**: `[D/M/YY, H:MM(:SS) (AM|PM)] Sender: text` text exports
//! - **Telegram**: `[DD.MM.YYYY HH:MM:SS] Sender: text` text exports
//! - **Manual**: anything else, one message per non-blank line with
//!   alternating speakers
//!
//! Parsing never fails. Lines that don't match are skipped, and a line whose
//! date can't be read still yields a record with no timestamp.
//!
//! Around the parsers sit the pieces a chat-memory service needs: platform
//! detection, upload limits, persistence rows, prompts for a hosted language
//! model that describes the conversation, and exports.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatmirror::prelude::*;
//!
//! let text = "[15/3/24, 9:05 PM] Alice: dinner at 8?\n[15/3/24, 9:06 PM] Bob: sure: see you";
//! let messages = parse(text, Platform::WhatsApp);
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[1].text, "sure: see you");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Platform`](parser::Platform), the [`Parser`](parser::Parser) trait, [`parse`](parser::parse)
//! - [`parsers`] - [`WhatsAppParser`], [`TelegramParser`], [`ManualParser`]
//! - [`parsing`] - shared patterns and timestamp normalization
//! - [`detect`] - guessing the platform of unlabeled text
//! - [`ingest`] - size limits, detection and parsing in one call
//! - [`session`] - rows and metadata for persistence
//! - [`analysis`] - requests to and responses from the analysis model
//! - [`persona`] - prompts for chatting with the analysed persona
//! - [`core`] - statistics and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - configuration values
//! - [`error`] - [`ChatmirrorError`], [`Result`]
//! - [`cli`] - CLI types (with the `cli` feature)

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod detect;
pub mod error;
pub mod format;
pub mod ingest;
pub mod message;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod persona;
pub mod session;

pub use error::{ChatmirrorError, Result};
pub use message::ParsedMessage;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatmirror::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ParsedMessage;

    pub use crate::error::{ChatmirrorError, Result};

    pub use crate::parser::{Parser, Platform, create_parser, parse};
    pub use crate::parsers::{ManualParser, TelegramParser, WhatsAppParser};

    pub use crate::config::{DetectConfig, IngestConfig, ManualConfig};
    pub use crate::detect::{detect_platform, detect_platform_with};
    pub use crate::ingest::{ParsedChat, ingest, ingest_file};

    pub use crate::core::ConversationStats;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
