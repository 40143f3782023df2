use serde::{Deserialize, Serialize};

use crate::classify::{classify, CardStyle};

/// One titled block of parsed analysis output.
///
/// `bullets` preserves insertion order; `paragraph` is the space-joined run
/// of plain lines belonging to the section. Emphasis markers are already
/// stripped from all three fields by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSection {
    pub title: String,
    pub bullets: Vec<String>,
    pub paragraph: String,
}

impl InsightSection {
    /// Presentation style derived from the title. Computed, never stored —
    /// not part of the semantic content.
    pub fn style(&self) -> CardStyle {
        classify(&self.title)
    }

    /// Plain-text rendering used for clipboard export and journal entries.
    ///
    /// Title, blank line, paragraph (if non-empty) followed by a blank line,
    /// then each bullet on its own "• "-prefixed line. Content round-trips
    /// verbatim; only the structural joining differs from the card form.
    pub fn full_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\n");
        if !self.paragraph.is_empty() {
            out.push_str(&self.paragraph);
            out.push_str("\n\n");
        }
        for bullet in &self.bullets {
            out.push_str("• ");
            out.push_str(bullet);
            out.push('\n');
        }
        out.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Icon, Tint};

    fn section(title: &str, bullets: &[&str], paragraph: &str) -> InsightSection {
        InsightSection {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            paragraph: paragraph.to_string(),
        }
    }

    #[test]
    fn full_text_with_paragraph_and_bullets() {
        let s = section("Patterns", &["A", "B"], "P");
        assert_eq!(s.full_text(), "Patterns\n\nP\n\n• A\n• B");
    }

    #[test]
    fn full_text_bullets_only() {
        let s = section("Tips", &["Rest more"], "");
        assert_eq!(s.full_text(), "Tips\n\n• Rest more");
    }

    #[test]
    fn full_text_paragraph_only_has_no_trailing_blank() {
        let s = section("Summary", &[], "All good.");
        assert_eq!(s.full_text(), "Summary\n\nAll good.");
    }

    #[test]
    fn full_text_does_not_reformat_content() {
        let s = section("Notes", &["keep  spacing"], "odd  spacing stays");
        assert!(s.full_text().contains("odd  spacing stays"));
        assert!(s.full_text().contains("• keep  spacing"));
    }

    #[test]
    fn style_follows_title() {
        let s = section("Sleep Patterns", &[], "x");
        // "pattern" row outranks "sleep".
        assert_eq!(s.style().icon, Icon::Waveform);
        assert_eq!(s.style().tint, Tint::Blue);
    }
}
