//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::ParsedMessage;
use crate::error::Result;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-03-15T21:05:00Z", "sender": "Alice", "text": "Hello"},
///   {"timestamp": null, "sender": "Bob", "text": "Hi"}
/// ]
/// ```
pub fn write_json(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
pub fn to_json(messages: &[ParsedMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}
