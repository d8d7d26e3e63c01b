//! Output format writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter, requires `csv-output`
//! - [`write_json`] / [`to_json`] - JSON array of messages, requires `json-output`
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line, requires `json-output`
//! - [`write_text`] / [`to_text`] - readable plain text
//! - [`to_transcript`] / [`to_session_json`] - whole-session exports, the JSON one requires `json-output`
//!
//! Every writer keeps messages in source order. Timestamps are RFC 3339 in
//! machine formats and `null` (or empty) when unknown.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatmirror::Result<()> {
//! use chatmirror::ParsedMessage;
//! use chatmirror::core::output::{to_csv, write_json, write_jsonl};
//!
//! let messages = vec![
//!     ParsedMessage::new("Alice", "Hello!"),
//!     ParsedMessage::new("Bob", "Hi there!"),
//! ];
//!
//! write_json(&messages, "output.json")?;
//! write_jsonl(&messages, "output.jsonl")?;
//! let csv_string = to_csv(&messages)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod export;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use export::{export_filename, sanitize_filename, to_transcript};
#[cfg(feature = "json-output")]
pub use export::to_session_json;
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};
