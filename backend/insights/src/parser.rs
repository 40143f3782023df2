//! Line pass that segments analysis markdown into titled sections.
//!
//! The dialect is looser than CommonMark: providers emit `#`-style headings,
//! bold lines standing in for headings, `-`/`*`/`•`/`N.` list items, and
//! free paragraphs. Everything else falls through as paragraph text with
//! emphasis characters stripped. One forward pass, accumulate then flush on
//! each heading; never fails, never panics.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::section::InsightSection;

/// Title of the single section emitted when no heading structure is found.
pub const FALLBACK_TITLE: &str = "Insights";

static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// What one trimmed line means to the section loop.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    /// Starts a new section; the cleaned title may be empty.
    Heading(String),
    /// A list item with non-empty cleaned content.
    Bullet(String),
    /// Plain non-empty paragraph text.
    Text(String),
    /// Blank line, horizontal rule, or content that cleaned to nothing.
    Skip,
}

/// Remove emphasis characters (`**`, `__`, `*`, `_`, backtick).
///
/// Character-level, not block-aware: unmatched markers are stripped too.
fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | '_' | '`')).collect()
}

fn classify_line(line: &str) -> Line {
    if line.is_empty() || line == "---" {
        return Line::Skip;
    }

    // `#`-prefixed heading, any depth.
    if let Some(rest) = line.strip_prefix('#') {
        let title = strip_emphasis(rest.trim_start_matches('#')).trim().to_string();
        return Line::Heading(title);
    }

    // Bold line standing in for a heading. A literal ':' marks an inline
    // "**Label:** value" lead-in instead, which stays paragraph text.
    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") && !line.contains(':') {
        return Line::Heading(strip_emphasis(line).trim().to_string());
    }

    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(marker) {
            let item = strip_emphasis(rest).trim().to_string();
            return if item.is_empty() { Line::Skip } else { Line::Bullet(item) };
        }
    }
    if let Some(m) = NUMBERED_RE.find(line) {
        let item = strip_emphasis(&line[m.end()..]).trim().to_string();
        return if item.is_empty() { Line::Skip } else { Line::Bullet(item) };
    }

    let text = strip_emphasis(line).trim().to_string();
    if text.is_empty() {
        Line::Skip
    } else {
        Line::Text(text)
    }
}

/// Accumulator for the section under construction.
#[derive(Debug, Default)]
struct SectionBuilder {
    title: String,
    bullets: Vec<String>,
    paragraph: String,
}

impl SectionBuilder {
    fn push_text(&mut self, text: &str) {
        if !self.paragraph.is_empty() {
            self.paragraph.push(' ');
        }
        self.paragraph.push_str(text);
    }

    /// Finalize into a section. None when the accumulator has no title or no
    /// body; such sections are dropped silently.
    fn finish(self) -> Option<InsightSection> {
        if self.title.is_empty() || (self.bullets.is_empty() && self.paragraph.is_empty()) {
            return None;
        }
        Some(InsightSection {
            title: self.title,
            bullets: self.bullets,
            paragraph: self.paragraph,
        })
    }
}

/// Parse analysis markdown into an ordered sequence of sections.
///
/// Section order matches heading order in the source. Empty input yields an
/// empty vec; non-empty input that produces no sections is wrapped into one
/// fallback section titled [`FALLBACK_TITLE`].
pub fn parse(markdown: &str) -> Vec<InsightSection> {
    let mut sections = Vec::new();
    let mut current = SectionBuilder::default();

    for raw in markdown.lines() {
        match classify_line(raw.trim()) {
            Line::Heading(title) => {
                sections.extend(std::mem::take(&mut current).finish());
                current.title = title;
            }
            Line::Bullet(item) => current.bullets.push(item),
            Line::Text(text) => current.push_text(&text),
            Line::Skip => {}
        }
    }
    sections.extend(current.finish());

    if sections.is_empty() {
        let cleaned = strip_emphasis(markdown).trim().to_string();
        if !cleaned.is_empty() {
            sections.push(InsightSection {
                title: FALLBACK_TITLE.to_string(),
                bullets: Vec::new(),
                paragraph: cleaned,
            });
        }
    }
    sections
}
