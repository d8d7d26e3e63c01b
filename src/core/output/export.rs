//! Whole-session exports: a readable transcript, and a JSON archive with
//! `json-output`.

use chrono::{DateTime, Utc};
#[cfg(feature = "json-output")]
use serde::Serialize;

use super::text_writer::to_text;
use crate::ParsedMessage;
#[cfg(feature = "json-output")]
use crate::analysis::{ConversationAnalysis, PersonalityTraits};
#[cfg(feature = "json-output")]
use crate::error::Result;
#[cfg(feature = "json-output")]
use crate::parser::Platform;
use crate::session::NewSession;

const SEPARATOR_WIDTH: usize = 50;

/// Replaces everything except ASCII letters and digits with `_` and lowercases.
///
/// ```rust
/// use chatmirror::core::output::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Mom & Dad.txt"), "mom___dad_txt");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Filename for an export of `session` with the given extension.
pub fn export_filename(session: &NewSession, extension: &str) -> String {
    format!("{}.{extension}", sanitize_filename(&session.session_name))
}

/// Renders a session as a plain-text transcript with a header.
pub fn to_transcript(
    session: &NewSession,
    messages: &[ParsedMessage],
    exported_at: DateTime<Utc>,
) -> String {
    let mut out = format!(
        "Conversation: {}\nPlatform: {}\nTotal Messages: {}\nExported: {}\n{}\n\n",
        session.session_name,
        session.chat_platform,
        session.total_messages,
        exported_at.format("%Y-%m-%d %H:%M:%S UTC"),
        "=".repeat(SEPARATOR_WIDTH),
    );
    out.push_str(&to_text(messages));
    out
}

#[cfg(feature = "json-output")]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionSummary<'a> {
    name: &'a str,
    platform: Platform,
    total_messages: usize,
    analysis_complete: bool,
    personality_traits: &'a PersonalityTraits,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_insights: Option<&'a ConversationAnalysis>,
}

#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct SessionExport<'a> {
    session: SessionSummary<'a>,
    messages: &'a [ParsedMessage],
}

/// Renders a session and its messages as a pretty-printed JSON document.
///
/// ```json
/// {
///   "session": {"name": "...", "platform": "whatsapp", "totalMessages": 2, ...},
///   "messages": [{"timestamp": null, "sender": "Alice", "text": "hi"}]
/// }
/// ```
#[cfg(feature = "json-output")]
pub fn to_session_json(session: &NewSession, messages: &[ParsedMessage]) -> Result<String> {
    let export = SessionExport {
        session: SessionSummary {
            name: &session.session_name,
            platform: session.chat_platform,
            total_messages: session.total_messages,
            analysis_complete: session.analysis_complete,
            personality_traits: &session.personality_traits,
            conversation_insights: session.conversation_insights.as_ref(),
        },
        messages,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Platform;
    use chrono::TimeZone;

    fn session() -> NewSession {
        NewSession::new(Some("Family Chat.txt"), Platform::WhatsApp, 2, None)
    }

    fn messages() -> Vec<ParsedMessage> {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 21, 5, 0).unwrap();
        vec![
            ParsedMessage::new("Alice", "hello").with_timestamp(ts),
            ParsedMessage::new("Bob", "hi"),
        ]
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Family Chat.txt"), "family_chat_txt");
        assert_eq!(sanitize_filename("Ünïcode"), "_n_code");
        assert_eq!(sanitize_filename(""), "");
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename(&session(), "json"), "family_chat_txt.json");
    }

    #[test]
    fn test_transcript_header() {
        let exported = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let text = to_transcript(&session(), &messages(), exported);

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Conversation: Family Chat.txt"));
        assert_eq!(lines.next(), Some("Platform: WhatsApp"));
        assert_eq!(lines.next(), Some("Total Messages: 2"));
        assert_eq!(lines.next(), Some("Exported: 2024-06-01 08:00:00 UTC"));
        assert_eq!(lines.next(), Some("=".repeat(50).as_str()));
        assert!(text.contains("[2024-03-15 21:05:00] Alice:\nhello\n\n[] Bob:\nhi\n\n"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_session_json_shape() {
        let json = to_session_json(&session(), &messages()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["session"]["name"], "Family Chat.txt");
        assert_eq!(value["session"]["platform"], "whatsapp");
        assert_eq!(value["session"]["totalMessages"], 2);
        assert_eq!(value["session"]["analysisComplete"], false);
        assert!(value["session"].get("conversationInsights").is_none());
        assert_eq!(value["messages"][0]["timestamp"], "2024-03-15T21:05:00Z");
        assert!(value["messages"][1]["timestamp"].is_null());
    }
}
