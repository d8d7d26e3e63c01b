//! Conversation analysis through a hosted language model.
//!
//! The model is an opaque collaborator reached over an OpenAI-style chat
//! completion API. This module builds the request body and interprets the
//! response body; sending it is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use chatmirror::ParsedMessage;
//! use chatmirror::analysis::{analysis_request, parse_analysis};
//! use chatmirror::config::AnalysisConfig;
//!
//! let messages = vec![ParsedMessage::new("Alice", "haha you're the best")];
//! let request = analysis_request(&messages, &AnalysisConfig::default());
//! assert_eq!(request.messages.len(), 2);
//!
//! let reply = "```json\n{\"overall_tone\": \"playful\"}\n```";
//! let analysis = parse_analysis(reply)?;
//! assert_eq!(analysis.overall_tone.as_deref(), Some("playful"));
//! # Ok::<(), chatmirror::ChatmirrorError>(())
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ParsedMessage;
use crate::config::AnalysisConfig;
use crate::error::{ChatmirrorError, Result};

/// Markdown code fence around a JSON payload.
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").unwrap());

/// Author of a chat completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions for the model
    System,
    /// The human side of the conversation
    User,
    /// Earlier model replies
    Assistant,
}

/// One message of a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote it
    pub role: ChatRole,
    /// What was written
    pub content: String,
}

impl ChatMessage {
    /// Creates a message with the given role.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }
}

/// Body of a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation so far
    pub messages: Vec<ChatMessage>,
}

/// Trait scores as reported by the model.
///
/// Models answer with `"7"`, `7` or `"7/10"` interchangeably, so every field is
/// kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonalityTraits {
    /// Warmth, 1-10
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub warmth: Option<String>,
    /// Humor, 1-10
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub humor: Option<String>,
    /// Directness, 1-10
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub directness: Option<String>,
    /// Emotional expressiveness, 1-10
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub emotional_expression: Option<String>,
}

/// What the model inferred about the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationAnalysis {
    /// Trait scores
    #[serde(default)]
    pub personality_traits: PersonalityTraits,
    /// Phrases the participants repeat
    #[serde(default)]
    pub common_phrases: Vec<String>,
    /// One-line description of the general mood
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub overall_tone: Option<String>,
    /// How the participants tend to write
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Unique senders in order of first appearance.
pub fn participants(messages: &[ParsedMessage]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for msg in messages {
        if !seen.contains(&msg.sender.as_str()) {
            seen.push(&msg.sender);
        }
    }
    seen
}

/// Builds the analyst prompt from the first `limit` messages.
pub fn build_analysis_prompt(messages: &[ParsedMessage], limit: usize) -> String {
    let excerpt = messages
        .iter()
        .take(limit)
        .map(|m| format!("{}: {}", m.sender, m.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze this conversation and describe the personality and communication style of the participants ({participants}). Focus on:
1. Personality traits (warmth, humor, directness, emotional expression)
2. Phrases and expressions they repeat
3. Emotional tone and sentiment
4. How they tend to respond

Conversation excerpt:
{excerpt}

Answer with JSON in exactly this shape:
{{
  "personality_traits": {{
    "warmth": "score 1-10",
    "humor": "score 1-10",
    "directness": "score 1-10",
    "emotional_expression": "description"
  }},
  "common_phrases": ["phrase1", "phrase2"],
  "overall_tone": "description",
  "communication_style": "description"
}}"#,
        participants = participants(messages).join(", "),
    )
}

/// Builds the full completion request for analysing `messages`.
pub fn analysis_request(messages: &[ParsedMessage], config: &AnalysisConfig) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(config.system_prompt.clone()),
            ChatMessage::user(build_analysis_prompt(messages, config.excerpt_limit)),
        ],
    }
}

/// Extracts `choices[0].message.content` from a completion response body.
pub fn completion_content(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
}

/// Parses the model's answer, with or without a Markdown code fence.
pub fn parse_analysis(content: &str) -> Result<ConversationAnalysis> {
    let payload = CODE_FENCE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map_or(content.trim(), |m| m.as_str());

    serde_json::from_str(payload).map_err(|e| {
        tracing::warn!(error = %e, "analysis response is not valid JSON");
        ChatmirrorError::analysis(format!("expected a JSON object: {e}"), None)
    })
}

/// Interprets a whole completion response body.
pub fn interpret_completion(body: &Value) -> Result<ConversationAnalysis> {
    let content = completion_content(body)
        .ok_or_else(|| ChatmirrorError::analysis("response has no message content", None))?;
    parse_analysis(content)
}

/// Reads a saved completion response body from disk and interprets it.
pub fn load_completion(path: &Path) -> Result<ConversationAnalysis> {
    let raw = fs::read_to_string(path)?;
    let body: Value = serde_json::from_str(&raw)?;

    interpret_completion(&body).map_err(|err| match err {
        ChatmirrorError::Analysis { message, .. } => {
            ChatmirrorError::analysis(message, Some(path.to_path_buf()))
        }
        other => other,
    })
}
