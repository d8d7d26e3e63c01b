//! Work done on messages after parsing.
//!
//! - [`stats`] - sender and weekday counts
//! - [`output`] - format writers and session exports

pub mod output;
pub mod stats;

pub use stats::{ConversationStats, SenderCount};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use output::{to_text, write_text};
