//! Property-based tests for chatmirror.
//!
//! These tests generate export lines from their parts and check that parsing
//! recovers the parts.

use proptest::prelude::*;

use chatmirror::core::output::sanitize_filename;
use chatmirror::parser::{Platform, parse};
use chrono::{NaiveDate, Utc};

/// Senders never contain a colon; padding is added separately
fn arb_sender() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob".to_string(),
        "Mom".to_string(),
        "User 123".to_string(),
        "Иван".to_string(),
        "🎉 Party".to_string(),
    ])
}

/// Message bodies, some with colons and brackets
fn arb_text() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "Hi there!".to_string(),
        "dinner: 8pm?".to_string(),
        "see [1/2/24, 10:00] above".to_string(),
        "Привет мир".to_string(),
        "🔥💀 emoji".to_string(),
        "a:b:c".to_string(),
    ])
}

/// Fragments for arbitrary, mostly malformed input
fn arb_noise() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "[", "]", ":", "/", ".", ",", " ", "\n", "\r\n", "1", "24", "2024", "12", "PM",
            "am", "Alice", "текст", "🎉", "\u{202f}",
        ]),
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

#[derive(Debug, Clone)]
struct WhatsAppLine {
    day: u32,
    month: u32,
    year: i32,
    two_digit_year: bool,
    hour12: u32,
    minute: u32,
    second: Option<u32>,
    pm: bool,
    sender: String,
    text: String,
}

impl WhatsAppLine {
    fn render(&self) -> String {
        let year = if self.two_digit_year { self.year - 2000 } else { self.year };
        let seconds = self.second.map(|s| format!(":{s:02}")).unwrap_or_default();
        let period = if self.pm { "PM" } else { "AM" };
        format!(
            "[{}/{}/{year:02}, {}:{:02}{seconds} {period}] {}: {}",
            self.day, self.month, self.hour12, self.minute, self.sender, self.text
        )
    }

    fn expected_hour(&self) -> u32 {
        match (self.hour12, self.pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        }
    }
}

fn arb_whatsapp_line() -> impl Strategy<Value = WhatsAppLine> {
    (
        (1u32..=28, 1u32..=12, 2000i32..2100, any::<bool>()),
        (1u32..=12, 0u32..60, prop::option::of(0u32..60), any::<bool>()),
        (arb_sender(), arb_text()),
    )
        .prop_map(
            |((day, month, year, two_digit_year), (hour12, minute, second, pm), (sender, text))| {
                WhatsAppLine {
                    day,
                    month,
                    year,
                    two_digit_year,
                    hour12,
                    minute,
                    second,
                    pm,
                    sender,
                    text,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // WHATSAPP
    // ============================================

    /// Every generated line yields exactly its own record
    #[test]
    fn whatsapp_lines_roundtrip(lines in prop::collection::vec(arb_whatsapp_line(), 1..20)) {
        let content = lines.iter().map(WhatsAppLine::render).collect::<Vec<_>>().join("\n");
        let messages = parse(&content, Platform::WhatsApp);

        prop_assert_eq!(messages.len(), lines.len());
        for (line, msg) in lines.iter().zip(&messages) {
            prop_assert_eq!(&msg.sender, &line.sender);
            prop_assert_eq!(&msg.text, &line.text);

            let expected = NaiveDate::from_ymd_opt(line.year, line.month, line.day)
                .and_then(|d| d.and_hms_opt(line.expected_hour(), line.minute, line.second.unwrap_or(0)))
                .map(|naive| naive.and_utc());
            prop_assert_eq!(msg.timestamp, expected);
        }
    }

    // ============================================
    // TELEGRAM
    // ============================================

    /// Generated Telegram lines keep sender, text and time
    #[test]
    fn telegram_lines_roundtrip(
        entries in prop::collection::vec(
            ((1u32..=28, 1u32..=12, 1990i32..2100), (0u32..24, 0u32..60, 0u32..60), arb_sender(), arb_text()),
            1..20,
        )
    ) {
        let content = entries
            .iter()
            .map(|((d, mo, y), (h, mi, s), sender, text)| {
                format!("[{d:02}.{mo:02}.{y} {h:02}:{mi:02}:{s:02}] {sender}: {text}")
            })
            .collect::<Vec<_>>()
            .join("\n");
        let messages = parse(&content, Platform::Telegram);

        prop_assert_eq!(messages.len(), entries.len());
        for (((d, mo, y), (h, mi, s), sender, text), msg) in entries.iter().zip(&messages) {
            prop_assert_eq!(&msg.sender, sender);
            prop_assert_eq!(&msg.text, text);
            let expected = NaiveDate::from_ymd_opt(*y, *mo, *d)
                .and_then(|date| date.and_hms_opt(*h, *mi, *s))
                .map(|naive| naive.and_utc());
            prop_assert_eq!(msg.timestamp, expected);
        }
    }

    // ============================================
    // MANUAL
    // ============================================

    /// Blank lines are dropped and speakers alternate over what remains
    #[test]
    fn manual_alternates(lines in prop::collection::vec((arb_text(), any::<bool>()), 0..30)) {
        let content = lines
            .iter()
            .map(|(text, blank_after)| if *blank_after { format!("{text}\n   ") } else { text.clone() })
            .collect::<Vec<_>>()
            .join("\n");
        let messages = parse(&content, Platform::Manual);

        prop_assert_eq!(messages.len(), lines.len());
        for (i, msg) in messages.iter().enumerate() {
            let expected = if i % 2 == 0 { "You" } else { "Them" };
            prop_assert_eq!(msg.sender.as_str(), expected);
            prop_assert_eq!(&msg.text, &lines[i].0);
            prop_assert!(msg.timestamp.is_some_and(|ts| ts <= Utc::now()));
        }
    }

    // ============================================
    // ROBUSTNESS
    // ============================================

    /// Arbitrary input never panics and never yields blank fields
    #[test]
    fn parse_never_panics(content in arb_noise()) {
        for platform in Platform::all() {
            for msg in parse(&content, *platform) {
                prop_assert!(!msg.sender.trim().is_empty());
                prop_assert!(!msg.text.trim().is_empty());
                prop_assert_eq!(msg.text.trim(), msg.text.as_str());
            }
        }
    }

    /// Structured parsing is a pure function of its input
    #[test]
    fn parse_is_deterministic(content in arb_noise()) {
        prop_assert_eq!(parse(&content, Platform::WhatsApp), parse(&content, Platform::WhatsApp));
        prop_assert_eq!(parse(&content, Platform::Telegram), parse(&content, Platform::Telegram));
    }

    // ============================================
    // EXPORT
    // ============================================

    /// Sanitized names only use `[a-z0-9_]` and keep their length in chars
    #[test]
    fn sanitize_filename_charset(name in arb_noise()) {
        let clean = sanitize_filename(&name);
        prop_assert_eq!(clean.chars().count(), name.chars().count());
        prop_assert!(clean.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
    }
}
