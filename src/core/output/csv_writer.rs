//! CSV output writer.

use std::fs::File;
use std::path::Path;

use crate::ParsedMessage;
use crate::error::Result;

const HEADER: [&str; 3] = ["Timestamp", "Sender", "Text"];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Text`
/// - Timestamp: RFC 3339, empty when unknown
/// - Encoding: UTF-8
pub fn write_csv(messages: &[ParsedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(file);

    write_records(&mut writer, messages)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(messages: &[ParsedMessage]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    write_records(&mut writer, messages)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    messages: &[ParsedMessage],
) -> Result<()> {
    writer.write_record(HEADER)?;
    for msg in messages {
        let timestamp = msg.timestamp_rfc3339().unwrap_or_default();
        writer.write_record([timestamp.as_str(), msg.sender.as_str(), msg.text.as_str()])?;
    }
    Ok(())
}
