//! Chat export parsers, one per platform.
//!
//! Each parser implements [`Parser`](crate::parser::Parser).
//!
//! # Available Parsers
//!
//! - [`WhatsAppParser`] - bracketed slash-date text exports
//! - [`TelegramParser`] - bracketed dot-date text exports
//! - [`ManualParser`] - unstructured text, alternating speakers
//!
//! # Example
//!
//! ```rust
//! use chatmirror::parser::Parser;
//! use chatmirror::parsers::TelegramParser;
//!
//! let messages = TelegramParser::new().parse_str("[15.01.2024 10:30:45] Alice: Hi");
//! assert_eq!(messages[0].text, "Hi");
//! ```

mod manual;
mod telegram;
mod whatsapp;

pub use manual::ManualParser;
pub use telegram::TelegramParser;
pub use whatsapp::WhatsAppParser;
