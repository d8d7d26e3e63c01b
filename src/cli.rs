//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`Source`] - where the input came from, or `auto`
//! - [`OutputFormat`] - output format options
//!
//! ```rust
//! use chatmirror::cli::Source;
//! use chatmirror::parser::Platform;
//!
//! assert_eq!(Source::Auto.platform(), None);
//! assert_eq!(Source::WhatsApp.platform(), Some(Platform::WhatsApp));
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DetectConfig, IngestConfig, ManualConfig};
use crate::parser::Platform;

/// Parse chat exports from WhatsApp, Telegram or plain text into
/// timestamped message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatmirror")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatmirror chat.txt
    chatmirror chat.txt -p wa -o messages.csv
    chatmirror notes.txt -p manual --you Me --them Grandma -f txt
    chatmirror chat.txt --min-density 0.5 --analysis-prompt request.json
    chatmirror chat.txt --analysis-response reply.json --export session.json")]
pub struct Args {
    /// Path to the chat export
    pub input: PathBuf,

    /// Export platform, detected from the content when `auto`
    #[arg(short, long, value_enum, default_value = "auto")]
    pub platform: Source,

    /// Path to the output file; messages are printed to stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format, inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Require this share of lines to match a platform during detection (0.0-1.0)
    #[arg(long, value_name = "RATIO")]
    pub min_density: Option<f64>,

    /// Sender label for even lines of a manual transcript
    #[arg(long, value_name = "NAME")]
    pub you: Option<String>,

    /// Sender label for odd lines of a manual transcript
    #[arg(long, value_name = "NAME")]
    pub them: Option<String>,

    /// Write the analysis request body to this file
    #[arg(long, value_name = "PATH")]
    pub analysis_prompt: Option<PathBuf>,

    /// Read a saved analysis response body from this file
    #[arg(long, value_name = "PATH")]
    pub analysis_response: Option<PathBuf>,

    /// Write the impersonation system prompt to this file
    #[arg(long, value_name = "PATH")]
    pub persona_prompt: Option<PathBuf>,

    /// Export the whole session (JSON for .json, a transcript otherwise)
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Ingest settings derived from the flags.
    pub fn ingest_config(&self) -> IngestConfig {
        let mut config = IngestConfig::new();

        if let Some(ratio) = self.min_density {
            config = config.with_detect(DetectConfig::density(ratio));
        }

        if self.you.is_some() || self.them.is_some() {
            let defaults = ManualConfig::default();
            config = config.with_manual(ManualConfig::new().with_senders(
                self.you.clone().unwrap_or(defaults.first_sender),
                self.them.clone().unwrap_or(defaults.second_sender),
            ));
        }

        config
    }
}

/// Platform selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Detect from the content
    #[default]
    Auto,

    /// WhatsApp text export
    #[value(name = "whatsapp", alias = "wa")]
    #[serde(alias = "wa")]
    WhatsApp,

    /// Telegram text export
    #[value(alias = "tg")]
    #[serde(alias = "tg")]
    Telegram,

    /// One message per line
    Manual,
}

impl Source {
    /// The forced platform, or `None` for detection.
    pub fn platform(self) -> Option<Platform> {
        match self {
            Source::Auto => None,
            Source::WhatsApp => Some(Platform::WhatsApp),
            Source::Telegram => Some(Platform::Telegram),
            Source::Manual => Some(Platform::Manual),
        }
    }
}

impl From<Source> for Option<Platform> {
    fn from(source: Source) -> Self {
        source.platform()
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.platform() {
            Some(platform) => write!(f, "{platform}"),
            None => write!(f, "Auto"),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,

    /// Readable plain text
    #[value(alias = "text")]
    Txt,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Txt => crate::format::OutputFormat::Txt,
        }
    }
}
