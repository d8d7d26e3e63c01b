//! JSON Lines (JSONL) output writer.
//!
//! One message per line, which suits retrieval pipelines and line-oriented
//! tools such as `jq`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::ParsedMessage;
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// ```jsonl
/// {"timestamp":"2024-03-15T21:05:00Z","sender":"Alice","text":"Hello"}
/// {"timestamp":null,"sender":"Bob","text":"Hi"}
/// ```
pub fn write_jsonl(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for msg in messages {
        serde_json::to_writer(&mut writer, msg)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts messages to a JSONL string, one object per line.
pub fn to_jsonl(messages: &[ParsedMessage]) -> Result<String> {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&serde_json::to_string(msg)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let messages = vec![
            ParsedMessage::new("Alice", "Hello"),
            ParsedMessage::new("Bob", "Hi"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        write_jsonl(&messages, temp_file.path()).unwrap();

        let file = std::fs::File::open(temp_file.path()).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["text"], "Hello");
        assert!(first["timestamp"].is_null());
    }

    #[test]
    fn test_jsonl_no_array_syntax() {
        let content = to_jsonl(&[ParsedMessage::new("Alice", "Hello")]).unwrap();
        assert!(!content.starts_with('['));
        assert!(content.ends_with('\n'));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_jsonl_escapes_newlines() {
        let content = to_jsonl(&[ParsedMessage::new("Alice", "two\nlines")]).unwrap();
        assert_eq!(content.lines().count(), 1);
    }
}
