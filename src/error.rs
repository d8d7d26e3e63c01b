//! Unified error types for chatmirror.
//!
//! This module provides a single [`ChatmirrorError`] enum that covers every
//! failure the library can report. The parser itself never fails on malformed
//! text; errors come from the layers around it (reading files, validating
//! uploads, interpreting AI responses, writing output).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::Platform;

/// A specialized [`Result`] type for chatmirror operations.
///
/// # Example
///
/// ```rust
/// use chatmirror::error::Result;
/// use chatmirror::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatmirrorError>;

/// The error type for all chatmirror operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatmirrorError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A platform tag other than `whatsapp`, `telegram` or `manual` was supplied.
    #[error("Unsupported platform '{tag}'. Expected one of: {expected}")]
    InvalidPlatform {
        /// The rejected tag
        tag: String,
        /// Comma-separated list of accepted tags
        expected: String,
    },

    /// The caller-supplied input violates an upload limit.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Human-readable explanation
        message: String,
    },

    /// Parsing succeeded but produced zero records.
    #[error("No messages found in the {platform} chat. Please check the format.")]
    NoMessages {
        /// The platform strategy that was applied
        platform: Platform,
    },

    /// A value doesn't match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The language model returned something that can't be used.
    #[error("Unusable analysis response: {message}{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Analysis {
        /// What went wrong
        message: String,
        /// The file the response was read from, if any
        path: Option<PathBuf>,
    },

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatmirrorError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatmirrorError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatmirrorError {
    /// Creates an unsupported-platform error.
    pub fn invalid_platform(tag: impl Into<String>) -> Self {
        ChatmirrorError::InvalidPlatform {
            tag: tag.into(),
            expected: Platform::all_names().join(", "),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ChatmirrorError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a "no messages found" error.
    pub fn no_messages(platform: Platform) -> Self {
        ChatmirrorError::NoMessages { platform }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatmirrorError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an analysis error.
    pub fn analysis(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatmirrorError::Analysis {
            message: message.into(),
            path,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatmirrorError::Io(_))
    }

    /// Returns `true` if this is an unsupported-platform error.
    pub fn is_invalid_platform(&self) -> bool {
        matches!(self, ChatmirrorError::InvalidPlatform { .. })
    }

    /// Returns `true` if this is an input-validation error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChatmirrorError::InvalidInput { .. })
    }

    /// Returns `true` if parsing produced no records.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatmirrorError::NoMessages { .. })
    }

    /// Returns `true` if this is an analysis-response error.
    pub fn is_analysis(&self) -> bool {
        matches!(self, ChatmirrorError::Analysis { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
