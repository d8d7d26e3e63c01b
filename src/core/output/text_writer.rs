//! Plain-text output writer.
//!
//! Each message becomes a block:
//!
//! ```text
//! [2024-03-15 21:05:00] Alice:
//! hello
//!
//! ```
//!
//! The brackets stay empty when the timestamp is unknown.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::ParsedMessage;
use crate::error::Result;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders messages as plain-text blocks.
pub fn to_text(messages: &[ParsedMessage]) -> String {
    let mut out = String::new();
    for msg in messages {
        let timestamp = msg
            .timestamp
            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default();
        out.push_str(&format!("[{timestamp}] {}:\n{}\n\n", msg.sender, msg.text));
    }
    out
}

/// Writes messages as plain-text blocks.
pub fn write_text(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(messages).as_bytes())?;
    Ok(())
}
