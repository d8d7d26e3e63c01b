//! Summary statistics over a parsed chat.

use std::collections::HashMap;

use chrono::Datelike;
use serde::Serialize;

use crate::ParsedMessage;

/// Per-sender message count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenderCount {
    /// Sender name as it appears in the records
    pub sender: String,
    /// Messages from this sender
    pub messages: usize,
}

/// Counts describing a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    /// Number of messages
    pub total: usize,
    /// Number of distinct senders
    pub unique_senders: usize,
    /// Busiest senders, most messages first
    pub top_senders: Vec<SenderCount>,
    /// Messages per weekday, Sunday first; untimed messages are not counted
    pub by_weekday: [usize; 7],
}

impl ConversationStats {
    /// Default number of entries in [`top_senders`](Self::top_senders).
    pub const DEFAULT_TOP: usize = 5;

    /// Computes stats keeping at most [`Self::DEFAULT_TOP`] top senders.
    pub fn from_messages(messages: &[ParsedMessage]) -> Self {
        Self::with_top(messages, Self::DEFAULT_TOP)
    }

    /// Computes stats keeping at most `limit` top senders.
    ///
    /// Senders with equal counts are ordered by name.
    pub fn with_top(messages: &[ParsedMessage], limit: usize) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut by_weekday = [0usize; 7];

        for msg in messages {
            *counts.entry(msg.sender.as_str()).or_insert(0) += 1;
            if let Some(ts) = msg.timestamp {
                by_weekday[ts.weekday().num_days_from_sunday() as usize] += 1;
            }
        }

        let unique_senders = counts.len();
        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let top_senders = ranked
            .into_iter()
            .take(limit)
            .map(|(sender, messages)| SenderCount {
                sender: sender.to_string(),
                messages,
            })
            .collect();

        Self {
            total: messages.len(),
            unique_senders,
            top_senders,
            by_weekday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty() {
        let stats = ConversationStats::from_messages(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique_senders, 0);
        assert!(stats.top_senders.is_empty());
        assert_eq!(stats.by_weekday, [0; 7]);
    }

    #[test]
    fn test_top_senders_order() {
        let messages = vec![
            ParsedMessage::new("Carol", "1"),
            ParsedMessage::new("Bob", "2"),
            ParsedMessage::new("Alice", "3"),
            ParsedMessage::new("Bob", "4"),
            ParsedMessage::new("Alice", "5"),
            ParsedMessage::new("Bob", "6"),
        ];
        let stats = ConversationStats::with_top(&messages, 2);

        assert_eq!(stats.total, 6);
        assert_eq!(stats.unique_senders, 3);
        assert_eq!(
            stats.top_senders,
            [
                SenderCount { sender: "Bob".into(), messages: 3 },
                SenderCount { sender: "Alice".into(), messages: 2 },
            ]
        );
    }

    #[test]
    fn test_weekday_histogram() {
        // 2024-03-17 is a Sunday
        let sunday = Utc.with_ymd_and_hms(2024, 3, 17, 9, 0, 0).unwrap();
        let wednesday = Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap();
        let messages = vec![
            ParsedMessage::new("A", "x").with_timestamp(sunday),
            ParsedMessage::new("A", "y").with_timestamp(wednesday),
            ParsedMessage::new("B", "z").with_timestamp(wednesday),
            ParsedMessage::new("B", "untimed"),
        ];
        let stats = ConversationStats::from_messages(&messages);
        assert_eq!(stats.by_weekday, [1, 0, 0, 2, 0, 0, 0]);
    }
}
