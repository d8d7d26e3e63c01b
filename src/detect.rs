//! Platform detection for uploads that don't say where they came from.
//!
//! The default heuristic mirrors what upload front ends usually do: if any
//! bracketed slash date appears anywhere, the text is WhatsApp; otherwise if
//! any bracketed dot date appears, it is Telegram; otherwise it is manual.
//!
//! One stray date-like string in otherwise freeform text is enough to
//! misclassify it. [`DetectionMode::Density`] is the stricter alternative: a
//! platform wins only if a minimum share of the non-blank lines match it.
//!
//! # Example
//!
//! ```rust
//! use chatmirror::detect::{detect_platform, detect_platform_with};
//! use chatmirror::config::DetectConfig;
//! use chatmirror::parser::Platform;
//!
//! let text = "see you at the usual place\n[1/2/24, 10:00] pinned reminder\nok";
//! assert_eq!(detect_platform(text), Platform::WhatsApp);
//! assert_eq!(detect_platform_with(text, &DetectConfig::density(0.5)), Platform::Manual);
//! ```

use crate::config::{DetectConfig, DetectionMode};
use crate::parser::Platform;
use crate::parsing::{telegram, whatsapp};

/// Share of non-blank lines matching each structured format.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineDensity {
    /// Non-blank lines inspected
    pub lines: usize,
    /// Lines containing a WhatsApp header
    pub whatsapp: usize,
    /// Lines containing a Telegram header
    pub telegram: usize,
}

impl LineDensity {
    /// Counts matching lines in `content`.
    pub fn measure(content: &str) -> Self {
        let mut density = Self::default();

        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            density.lines += 1;
            if whatsapp::DETECT_PATTERN.is_match(line) {
                density.whatsapp += 1;
            }
            if telegram::DETECT_PATTERN.is_match(line) {
                density.telegram += 1;
            }
        }

        density
    }

    /// Returns the share of lines matching `platform` (`0.0` for manual or no lines).
    pub fn ratio(&self, platform: Platform) -> f64 {
        if self.lines == 0 {
            return 0.0;
        }
        let hits = match platform {
            Platform::WhatsApp => self.whatsapp,
            Platform::Telegram => self.telegram,
            Platform::Manual => return 0.0,
        };
        hits as f64 / self.lines as f64
    }
}

/// Classifies `content` using the first-match heuristic.
pub fn detect_platform(content: &str) -> Platform {
    if whatsapp::DETECT_PATTERN.is_match(content) {
        Platform::WhatsApp
    } else if telegram::DETECT_PATTERN.is_match(content) {
        Platform::Telegram
    } else {
        Platform::Manual
    }
}

/// Classifies `content` according to `config`.
///
/// In density mode the platform with the higher matching share wins if it
/// reaches `min_ratio`; WhatsApp wins ties, as in first-match mode.
pub fn detect_platform_with(content: &str, config: &DetectConfig) -> Platform {
    let platform = match config.mode {
        DetectionMode::FirstMatch => detect_platform(content),
        DetectionMode::Density { min_ratio } => {
            let density = LineDensity::measure(content);
            let wa = density.ratio(Platform::WhatsApp);
            let tg = density.ratio(Platform::Telegram);

            let (best, ratio) = if wa >= tg {
                (Platform::WhatsApp, wa)
            } else {
                (Platform::Telegram, tg)
            };

            tracing::debug!(
                lines = density.lines,
                whatsapp = wa,
                telegram = tg,
                min_ratio,
                "measured line density"
            );

            if ratio > 0.0 && ratio >= min_ratio {
                best
            } else {
                Platform::Manual
            }
        }
    };

    tracing::debug!(%platform, "detected platform");
    platform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_whatsapp() {
        let text = "[1/15/24, 10:30:45 AM] Alice: Hello\n[1/15/24, 10:31:00 AM] Bob: Hi";
        assert_eq!(detect_platform(text), Platform::WhatsApp);
    }

    #[test]
    fn test_detect_telegram() {
        let text = "[15.01.2024 10:30:45] Alice: Hello\n[15.01.2024 10:31:00] Bob: Hi";
        assert_eq!(detect_platform(text), Platform::Telegram);
    }

    #[test]
    fn test_detect_manual() {
        assert_eq!(detect_platform("hey\nhow are you?\nfine"), Platform::Manual);
        assert_eq!(detect_platform(""), Platform::Manual);
    }

    #[test]
    fn test_whatsapp_wins_over_telegram() {
        let text = "[15.01.2024 10:30:45] Alice: Hello\n[1/2/24, 10:00] Bob: Hi";
        assert_eq!(detect_platform(text), Platform::WhatsApp);
    }

    #[test]
    fn test_first_match_misclassifies_stray_date() {
        let text = "hey\nremember [3/4/22, 9:00] that day?\nyes\nof course\n";
        assert_eq!(detect_platform(text), Platform::WhatsApp);
        assert_eq!(
            detect_platform_with(text, &DetectConfig::density(0.5)),
            Platform::Manual
        );
    }

    #[test]
    fn test_first_match_config_delegates() {
        let text = "[15.01.2024 10:30:45] Alice: Hello";
        assert_eq!(
            detect_platform_with(text, &DetectConfig::new()),
            Platform::Telegram
        );
    }

    #[test]
    fn test_density_picks_majority() {
        let text = "[15.01.2024 10:30:45] A: 1\n[15.01.2024 10:30:46] B: 2\n[1/2/24, 10:00] C: 3\n";
        assert_eq!(
            detect_platform_with(text, &DetectConfig::density(0.5)),
            Platform::Telegram
        );
    }

    #[test]
    fn test_density_zero_ratio_still_needs_a_match() {
        assert_eq!(
            detect_platform_with("plain\ntext", &DetectConfig::density(0.0)),
            Platform::Manual
        );
    }

    #[test]
    fn test_line_density_counts() {
        let density = LineDensity::measure("[1/2/24, 10:00] A: x\n\nfree text\n");
        assert_eq!(density.lines, 2);
        assert_eq!(density.whatsapp, 1);
        assert_eq!(density.telegram, 0);
        assert!((density.ratio(Platform::WhatsApp) - 0.5).abs() < f64::EPSILON);
        assert!(density.ratio(Platform::Manual).abs() < f64::EPSILON);
    }
}
