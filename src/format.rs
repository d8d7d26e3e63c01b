//! Output formats for parsed messages.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatmirror::Result<()> {
//! use chatmirror::ParsedMessage;
//! use chatmirror::format::{OutputFormat, to_format_string};
//!
//! let messages = vec![
//!     ParsedMessage::new("Alice", "Hello!"),
//!     ParsedMessage::new("Bob", "Hi there!"),
//! ];
//!
//! let format = OutputFormat::from_path("output.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! let jsonl = to_format_string(&messages, format)?;
//! assert_eq!(jsonl.lines().count(), 2);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ParsedMessage;
use crate::error::{ChatmirrorError, Result};

/// Output format for parsed messages.
///
/// - [`Json`](OutputFormat::Json) - array of records, the native shape
/// - [`Jsonl`](OutputFormat::Jsonl) - one record per line
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited table
/// - [`Txt`](OutputFormat::Txt) - readable plain text
///
/// ```rust
/// use chatmirror::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// JSON array of messages
    #[default]
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,

    /// Plain-text blocks
    Txt,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Csv => "csv",
            OutputFormat::Txt => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson", "csv", "txt", "text"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Json,
            OutputFormat::Jsonl,
            OutputFormat::Csv,
            OutputFormat::Txt,
        ]
    }

    /// Returns the MIME type for this format.
    ///
    /// ```rust
    /// use chatmirror::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Txt => "text/plain",
        }
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self::from_name(&ext).ok_or_else(|| {
            ChatmirrorError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: json, jsonl, csv, txt"),
            )
        })
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "jsonl" | "ndjson" => Some(OutputFormat::Jsonl),
            "csv" => Some(OutputFormat::Csv),
            "txt" | "text" => Some(OutputFormat::Txt),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Txt => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatmirrorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(&s.trim().to_lowercase()).ok_or_else(|| {
            ChatmirrorError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{s}'. Expected one of: {}",
                    OutputFormat::all_names().join(", ")
                ),
            )
        })
    }
}

fn missing_feature(format: OutputFormat) -> ChatmirrorError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        _ => "json-output",
    };
    ChatmirrorError::invalid_format(
        "output",
        format!("Output format {format} requires the '{feature}' feature to be enabled"),
    )
}

/// Writes messages to a file in the specified format.
///
/// # Errors
///
/// Returns an error if the required feature for the format is not enabled or
/// the file cannot be written.
pub fn write_to_format(
    messages: &[ParsedMessage],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(messages, path),
        OutputFormat::Txt => crate::core::output::write_text(messages, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts messages to a string in the specified format.
pub fn to_format_string(messages: &[ParsedMessage], format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(messages),
        OutputFormat::Txt => Ok(crate::core::output::to_text(messages)),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
