//! Turning an upload into messages.
//!
//! The parser itself accepts anything; this module applies the policy around
//! it: input size limits, platform resolution, and treating an empty result as
//! a user-facing "no messages found" error.
//!
//! # Example
//!
//! ```rust
//! use chatmirror::config::IngestConfig;
//! use chatmirror::ingest::ingest;
//! use chatmirror::parser::Platform;
//!
//! let chat = ingest(
//!     "[15/3/24, 9:05 PM] Alice: hello\n[15/3/24, 9:06 PM] Bob: hi there",
//!     None,
//!     &IngestConfig::default(),
//! )?;
//! assert_eq!(chat.platform, Platform::WhatsApp);
//! assert_eq!(chat.messages.len(), 2);
//! # Ok::<(), chatmirror::ChatmirrorError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ParsedMessage;
use crate::config::IngestConfig;
use crate::detect::detect_platform_with;
use crate::error::{ChatmirrorError, Result};
use crate::parser::{Parser, Platform, create_parser};
use crate::parsers::ManualParser;

/// The outcome of a successful ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChat {
    /// Strategy that produced the messages
    pub platform: Platform,
    /// Messages in source order, never empty
    pub messages: Vec<ParsedMessage>,
}

impl ParsedChat {
    /// Number of parsed messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false` for a value returned by [`ingest`].
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Checks `content` against the configured character limits.
pub fn validate_content(content: &str, config: &IngestConfig) -> Result<()> {
    let chars = content.trim().chars().count();

    if chars < config.min_chars {
        return Err(ChatmirrorError::invalid_input(format!(
            "Chat text must be at least {} characters (got {chars})",
            config.min_chars
        )));
    }
    if chars > config.max_chars {
        return Err(ChatmirrorError::invalid_input(format!(
            "Chat text must be less than {} characters (got {chars})",
            config.max_chars
        )));
    }

    Ok(())
}

/// Validates, resolves the platform, and parses `content`.
///
/// When `platform` is `None` it is detected according to `config.detect`.
///
/// # Errors
///
/// - [`ChatmirrorError::InvalidInput`] if the text is too short or too long
/// - [`ChatmirrorError::NoMessages`] if nothing could be extracted
pub fn ingest(
    content: &str,
    platform: Option<Platform>,
    config: &IngestConfig,
) -> Result<ParsedChat> {
    validate_content(content, config)?;

    let platform = match platform {
        Some(p) => p,
        None => detect_platform_with(content, &config.detect),
    };

    info!(%platform, chars = content.len(), "parsing chat");

    let messages = match platform {
        Platform::Manual => ManualParser::with_config(config.manual.clone()).parse_str(content),
        other => create_parser(other).parse_str(content),
    };

    if messages.is_empty() {
        warn!(%platform, "no messages found");
        return Err(ChatmirrorError::no_messages(platform));
    }

    let untimed = messages.iter().filter(|m| m.timestamp.is_none()).count();
    if untimed > 0 {
        debug!(untimed, "messages without a readable timestamp");
    }
    info!(count = messages.len(), "parsed messages");

    Ok(ParsedChat { platform, messages })
}

/// Reads a text export from disk and ingests it.
///
/// Files whose extension is not in `config.allowed_extensions`, and files
/// larger than `config.max_file_bytes`, are rejected before reading.
pub fn ingest_file(
    path: &Path,
    platform: Option<Platform>,
    config: &IngestConfig,
) -> Result<ParsedChat> {
    if !config.accepts_file(path) {
        return Err(ChatmirrorError::invalid_input(format!(
            "Unsupported file type: {}. Expected one of: .{}",
            path.display(),
            config.allowed_extensions.join(", .")
        )));
    }

    let size = fs::metadata(path)?.len();
    if size > config.max_file_bytes {
        return Err(ChatmirrorError::invalid_input(format!(
            "File is {size} bytes; the limit is {} bytes",
            config.max_file_bytes
        )));
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|source| ChatmirrorError::Utf8 {
        context: format!("reading {}", path.display()),
        source,
    })?;

    ingest(&content, platform, config)
}
