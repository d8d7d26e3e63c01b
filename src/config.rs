//! Configuration types for parsing, ingest, analysis and persistence.
//!
//! Every struct here is a plain value with sensible defaults and `with_*`
//! builder methods. None of them depend on the CLI.
//!
//! - [`ManualConfig`] - speaker labels for unstructured text
//! - [`DetectConfig`] - how platform detection decides
//! - [`IngestConfig`] - upload limits plus the two above
//! - [`AnalysisConfig`] - language-model request settings
//! - [`SessionConfig`] - persistence batching
//!
//! # Example
//!
//! ```rust
//! use chatmirror::config::{DetectConfig, IngestConfig};
//!
//! let config = IngestConfig::new()
//!     .with_max_chars(100_000)
//!     .with_detect(DetectConfig::density(0.5));
//! assert_eq!(config.max_chars, 100_000);
//! ```

use serde::{Deserialize, Serialize};

/// Speaker labels used when text carries no structure.
///
/// Non-blank lines alternate between the two labels, starting with
/// [`first_sender`](Self::first_sender).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualConfig {
    /// Label for lines at even positions (default: `You`)
    pub first_sender: String,

    /// Label for lines at odd positions (default: `Them`)
    pub second_sender: String,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            first_sender: "You".to_string(),
            second_sender: "Them".to_string(),
        }
    }
}

impl ManualConfig {
    /// Creates a configuration with the default labels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both speaker labels.
    #[must_use]
    pub fn with_senders(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_sender = first.into();
        self.second_sender = second.into();
        self
    }

    /// Returns the label for the `index`-th non-blank line.
    pub fn sender_for(&self, index: usize) -> &str {
        if index % 2 == 0 {
            &self.first_sender
        } else {
            &self.second_sender
        }
    }
}

/// How [`detect_platform_with`](crate::detect::detect_platform_with) picks a platform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum DetectionMode {
    /// A single structural match anywhere in the text decides.
    #[default]
    FirstMatch,

    /// At least `min_ratio` of the non-blank lines must match a platform.
    Density {
        /// Required share of matching lines, in `0.0..=1.0`
        min_ratio: f64,
    },
}

/// Configuration for platform detection.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectConfig {
    /// Detection strategy (default: first match)
    pub mode: DetectionMode,
}

impl DetectConfig {
    /// Creates the default first-match configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a density-based configuration.
    ///
    /// `min_ratio` is clamped into `0.0..=1.0`.
    pub fn density(min_ratio: f64) -> Self {
        Self {
            mode: DetectionMode::Density {
                min_ratio: min_ratio.clamp(0.0, 1.0),
            },
        }
    }
}

/// Limits and strategy for turning an upload into messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Minimum number of characters after trimming (default: 10)
    pub min_chars: usize,

    /// Maximum number of characters after trimming (default: 500,000)
    pub max_chars: usize,

    /// Maximum size of an uploaded file in bytes (default: 10MB)
    pub max_file_bytes: u64,

    /// Accepted file extensions, compared case-insensitively (default: `txt`, `log`, `chat`).
    /// An empty list accepts any file.
    pub allowed_extensions: Vec<String>,

    /// Platform detection settings, used when no platform is given
    pub detect: DetectConfig,

    /// Speaker labels for manual mode
    pub manual: ManualConfig,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            min_chars: 10,
            max_chars: 500_000,
            max_file_bytes: 10 * 1024 * 1024, // 10MB
            allowed_extensions: ["txt", "log", "chat"].map(String::from).to_vec(),
            detect: DetectConfig::default(),
            manual: ManualConfig::default(),
        }
    }
}

impl IngestConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum character count.
    #[must_use]
    pub fn with_min_chars(mut self, min: usize) -> Self {
        self.min_chars = min;
        self
    }

    /// Sets the maximum character count.
    #[must_use]
    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = max;
        self
    }

    /// Sets the maximum file size.
    #[must_use]
    pub fn with_max_file_bytes(mut self, max: u64) -> Self {
        self.max_file_bytes = max;
        self
    }

    /// Sets the accepted file extensions, without the leading dot.
    #[must_use]
    pub fn with_allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Returns `true` if a file with this path may be ingested.
    pub fn accepts_file(&self, path: &std::path::Path) -> bool {
        if self.allowed_extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)))
    }

    /// Sets the detection configuration.
    #[must_use]
    pub fn with_detect(mut self, detect: DetectConfig) -> Self {
        self.detect = detect;
        self
    }

    /// Sets the manual-mode speaker labels.
    #[must_use]
    pub fn with_manual(mut self, manual: ManualConfig) -> Self {
        self.manual = manual;
        self
    }
}

/// Settings for the conversation-analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Model identifier sent to the completion endpoint
    pub model: String,

    /// Number of leading messages included in the prompt (default: 100)
    pub excerpt_limit: usize,

    /// System instruction for the analyst model
    pub system_prompt: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: "google/gemini-2.5-flash".to_string(),
            excerpt_limit: 100,
            system_prompt: "You are an expert conversation analyst. Respond only with valid JSON."
                .to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets how many messages go into the prompt.
    #[must_use]
    pub fn with_excerpt_limit(mut self, limit: usize) -> Self {
        self.excerpt_limit = limit;
        self
    }
}

/// Settings for persisting parsed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Rows per insert batch (default: 100)
    pub batch_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { batch_size: 100 }
    }
}

impl SessionConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }
}
