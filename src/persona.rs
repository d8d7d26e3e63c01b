//! Prompts for chatting with an impersonation of the original correspondent.
//!
//! A stored [`ConversationAnalysis`] becomes a system prompt; each new turn
//! is sent together with the prior exchange.

use serde::{Deserialize, Serialize};

use crate::analysis::{ChatMessage, ChatRequest, ChatRole, ConversationAnalysis};
use crate::error::{ChatmirrorError, Result};

/// One earlier turn of the impersonation chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryTurn {
    /// Who spoke: the user or the persona
    pub role: ChatRole,
    /// What was said
    pub content: String,
}

impl From<HistoryTurn> for ChatMessage {
    fn from(turn: HistoryTurn) -> Self {
        ChatMessage::new(turn.role, turn.content)
    }
}

/// Builds the impersonation system prompt.
///
/// Missing traits fall back to neutral descriptions, so a session whose
/// analysis failed still gets a usable persona.
pub fn persona_prompt(analysis: Option<&ConversationAnalysis>) -> String {
    let default = ConversationAnalysis::default();
    let analysis = analysis.unwrap_or(&default);
    let traits = &analysis.personality_traits;

    let fallback_to = |value: &Option<String>, fallback: &'static str| -> String {
        value.clone().unwrap_or_else(|| fallback.to_string())
    };

    let phrases = if analysis.common_phrases.is_empty() {
        String::new()
    } else {
        format!(
            "Common phrases they use: {}",
            analysis.common_phrases.join(", ")
        )
    };

    format!(
        "You are roleplaying as someone from a past conversation. Here's what we know about this person:

Personality Traits:
- Warmth: {warmth}
- Humor: {humor}
- Directness: {directness}
- Emotional Expression: {emotional}

Communication Style: {style}
Overall Tone: {tone}

{phrases}

IMPORTANT: Reply the way this person would, in short messages (1-3 sentences). Use their communication style, their phrases and their emotional tone. Stay natural and conversational.",
        warmth = fallback_to(&traits.warmth, "moderate"),
        humor = fallback_to(&traits.humor, "moderate"),
        directness = fallback_to(&traits.directness, "moderate"),
        emotional = fallback_to(&traits.emotional_expression, "balanced"),
        style = fallback_to(&analysis.communication_style, "natural and authentic"),
        tone = fallback_to(&analysis.overall_tone, "friendly"),
    )
}

/// Builds the completion request for the next impersonated reply.
///
/// Order: system prompt, prior turns as given, then the new user message.
pub fn chat_request(
    model: &str,
    system_prompt: &str,
    history: Vec<HistoryTurn>,
    user_message: &str,
) -> Result<ChatRequest> {
    let user_message = user_message.trim();
    if user_message.is_empty() {
        return Err(ChatmirrorError::invalid_input("user message is empty"));
    }

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.into_iter().map(ChatMessage::from));
    messages.push(ChatMessage::user(user_message));

    Ok(ChatRequest {
        model: model.to_string(),
        messages,
    })
}
