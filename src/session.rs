//! Rows and metadata for persisting a parsed chat.
//!
//! Storage itself lives elsewhere; this module only shapes the data. Messages
//! become [`MessageRow`]s with a global `message_order`, split into insert
//! batches, and the chat as a whole becomes a [`NewSession`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::ParsedMessage;
use crate::analysis::{ConversationAnalysis, PersonalityTraits};
use crate::config::SessionConfig;
use crate::parser::Platform;

/// One stored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRow {
    /// Display name of the author
    pub sender_name: String,
    /// Message body
    pub message_text: String,
    /// RFC 3339 timestamp; the insert time when the source had none
    pub timestamp: String,
    /// Position of the message in the original export
    pub message_order: usize,
}

impl MessageRow {
    /// Builds the row for the message at position `order`.
    pub fn from_message(msg: &ParsedMessage, order: usize, now: DateTime<Utc>) -> Self {
        Self {
            sender_name: msg.sender.clone(),
            message_text: msg.text.clone(),
            timestamp: msg
                .timestamp
                .unwrap_or(now)
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            message_order: order,
        }
    }
}

/// Splits `messages` into insert batches of at most `batch_size` rows.
///
/// `message_order` runs continuously across batches. A `batch_size` of zero
/// is treated as one.
pub fn message_batches(
    messages: &[ParsedMessage],
    batch_size: usize,
    now: DateTime<Utc>,
) -> Vec<Vec<MessageRow>> {
    let batch_size = batch_size.max(1);

    messages
        .chunks(batch_size)
        .enumerate()
        .map(|(batch, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(i, msg)| MessageRow::from_message(msg, batch * batch_size + i, now))
                .collect()
        })
        .collect()
}

/// [`message_batches`] with the batch size from `config`.
pub fn batches_for(
    messages: &[ParsedMessage],
    config: &SessionConfig,
    now: DateTime<Utc>,
) -> Vec<Vec<MessageRow>> {
    message_batches(messages, config.batch_size, now)
}

/// Trims a filename; blank names count as absent.
fn clean_filename(filename: Option<&str>) -> Option<&str> {
    filename.map(str::trim).filter(|name| !name.is_empty())
}

/// Display name for a session: the uploaded filename, or `"<platform> Chat"`.
pub fn session_name(filename: Option<&str>, platform: Platform) -> String {
    match clean_filename(filename) {
        Some(name) => name.to_string(),
        None => format!("{} Chat", platform.tag()),
    }
}

/// Filename used for pasted text: `"<platform>-chat-<unix millis>.txt"`.
pub fn default_filename(platform: Platform, now: DateTime<Utc>) -> String {
    format!("{}-chat-{}.txt", platform.tag(), now.timestamp_millis())
}

/// Metadata for a newly created chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSession {
    /// Display name
    pub session_name: String,
    /// Uploaded filename, if any
    pub original_filename: Option<String>,
    /// Platform tag
    pub chat_platform: Platform,
    /// Number of parsed messages
    pub total_messages: usize,
    /// Trait scores from the analysis, empty when analysis failed
    pub personality_traits: PersonalityTraits,
    /// Full analysis, if one was obtained
    pub conversation_insights: Option<ConversationAnalysis>,
    /// Whether an analysis was obtained
    pub analysis_complete: bool,
}

impl NewSession {
    /// Assembles the session record for a parsed chat.
    pub fn new(
        filename: Option<&str>,
        platform: Platform,
        total_messages: usize,
        analysis: Option<ConversationAnalysis>,
    ) -> Self {
        Self {
            session_name: session_name(filename, platform),
            original_filename: clean_filename(filename).map(str::to_string),
            chat_platform: platform,
            total_messages,
            personality_traits: analysis
                .as_ref()
                .map(|a| a.personality_traits.clone())
                .unwrap_or_default(),
            analysis_complete: analysis.is_some(),
            conversation_insights: analysis,
        }
    }
}
