//! Keyword classification of section titles into presentation styles.
//!
//! The table is ordered and evaluated top to bottom; the first row with a
//! keyword contained in the lowercased title wins. Titles often match more
//! than one row ("Positive Patterns" matches both "pattern" and "positive"),
//! so row order is load-bearing and pinned by tests.

use serde::{Deserialize, Serialize};

/// Icon vocabulary for insight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Waveform,
    Bolt,
    ThumbsUp,
    Lightbulb,
    WarningTriangle,
    Heart,
    Moon,
    Pills,
    Link,
    Document,
    Sparkle,
}

/// Accent color vocabulary for insight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tint {
    Blue,
    Orange,
    Green,
    Yellow,
    Red,
    Pink,
    Indigo,
    Purple,
    Cyan,
}

/// Presentation style of an insight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyle {
    pub icon: Icon,
    pub tint: Tint,
}

impl CardStyle {
    const fn new(icon: Icon, tint: Tint) -> Self {
        Self { icon, tint }
    }
}

/// Style for titles matching no keyword, and for the fallback section.
pub const DEFAULT_STYLE: CardStyle = CardStyle::new(Icon::Sparkle, Tint::Purple);

/// Ordered keyword rows. First match wins.
const KEYWORD_ROWS: &[(&[&str], CardStyle)] = &[
    (&["pattern"], CardStyle::new(Icon::Waveform, Tint::Blue)),
    (&["trigger"], CardStyle::new(Icon::Bolt, Tint::Orange)),
    (
        &["help", "positive", "working"],
        CardStyle::new(Icon::ThumbsUp, Tint::Green),
    ),
    (
        &["suggest", "recommend", "tip", "advice"],
        CardStyle::new(Icon::Lightbulb, Tint::Yellow),
    ),
    (
        &["warning", "concern"],
        CardStyle::new(Icon::WarningTriangle, Tint::Red),
    ),
    (&["mood", "emotion"], CardStyle::new(Icon::Heart, Tint::Pink)),
    (&["sleep"], CardStyle::new(Icon::Moon, Tint::Indigo)),
    (
        &["medication", "medicine"],
        CardStyle::new(Icon::Pills, Tint::Purple),
    ),
    (
        &["correlation", "connection"],
        CardStyle::new(Icon::Link, Tint::Cyan),
    ),
    (
        &["summary", "overview"],
        CardStyle::new(Icon::Document, Tint::Green),
    ),
];

/// Classify a section title. Case-insensitive substring containment.
pub fn classify(title: &str) -> CardStyle {
    let lower = title.to_lowercase();
    for (keywords, style) in KEYWORD_ROWS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *style;
        }
    }
    DEFAULT_STYLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_each_row() {
        assert_eq!(classify("Patterns"), CardStyle::new(Icon::Waveform, Tint::Blue));
        assert_eq!(classify("Triggers"), CardStyle::new(Icon::Bolt, Tint::Orange));
        assert_eq!(
            classify("What's Working"),
            CardStyle::new(Icon::ThumbsUp, Tint::Green)
        );
        assert_eq!(
            classify("Suggestions"),
            CardStyle::new(Icon::Lightbulb, Tint::Yellow)
        );
        assert_eq!(
            classify("Areas of Concern"),
            CardStyle::new(Icon::WarningTriangle, Tint::Red)
        );
        assert_eq!(classify("Mood Trends"), CardStyle::new(Icon::Heart, Tint::Pink));
        assert_eq!(classify("Sleep Quality"), CardStyle::new(Icon::Moon, Tint::Indigo));
        assert_eq!(
            classify("Medication Effects"),
            CardStyle::new(Icon::Pills, Tint::Purple)
        );
        assert_eq!(
            classify("Correlations"),
            CardStyle::new(Icon::Link, Tint::Cyan)
        );
        assert_eq!(classify("Summary"), CardStyle::new(Icon::Document, Tint::Green));
    }

    #[test]
    fn first_row_wins_on_multiple_matches() {
        // "pattern" is listed before "positive".
        assert_eq!(
            classify("Positive Patterns"),
            CardStyle::new(Icon::Waveform, Tint::Blue)
        );
        // "trigger" is listed before "warning".
        assert_eq!(
            classify("Trigger Warnings"),
            CardStyle::new(Icon::Bolt, Tint::Orange)
        );
        // "mood" is listed before "summary".
        assert_eq!(classify("Mood Summary"), CardStyle::new(Icon::Heart, Tint::Pink));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify("SLEEP HYGIENE"), classify("sleep hygiene"));
        assert_eq!(classify("TIPS"), CardStyle::new(Icon::Lightbulb, Tint::Yellow));
    }

    #[test]
    fn substring_containment_not_word_match() {
        // "helpful" contains "help".
        assert_eq!(
            classify("Helpful Habits"),
            CardStyle::new(Icon::ThumbsUp, Tint::Green)
        );
    }

    #[test]
    fn unmatched_title_gets_default() {
        assert_eq!(classify("Miscellaneous"), DEFAULT_STYLE);
        assert_eq!(classify(""), DEFAULT_STYLE);
    }

    #[test]
    fn style_serializes_kebab_case() {
        let json = serde_json::to_value(DEFAULT_STYLE).unwrap();
        assert_eq!(json["icon"], "sparkle");
        assert_eq!(json["tint"], "purple");
    }
}
