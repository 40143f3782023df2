//! Terminal output utilities: ANSI formatting, notes, and insight-card
//! rendering.

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Insight cards
// ---------------------------------------------------------------------------

use insights::{Icon, InsightSection, Tint};

/// Terminal glyph for a card icon.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Waveform => "∿",
        Icon::Bolt => "↯",
        Icon::ThumbsUp => "✚",
        Icon::Lightbulb => "✶",
        Icon::WarningTriangle => "⚠",
        Icon::Heart => "♥",
        Icon::Moon => "☾",
        Icon::Pills => "℞",
        Icon::Link => "⇄",
        Icon::Document => "▤",
        Icon::Sparkle => "✧",
    }
}

/// Nearest ANSI color for a card tint.
pub fn tint_code(tint: Tint) -> &'static str {
    match tint {
        Tint::Blue | Tint::Indigo => BLUE,
        Tint::Orange | Tint::Yellow => YELLOW,
        Tint::Green => GREEN,
        Tint::Red => RED,
        Tint::Pink | Tint::Purple => MAGENTA,
        Tint::Cyan => CYAN,
    }
}

/// Render one insight section as a terminal card.
pub fn render_card(section: &InsightSection, color: bool) -> String {
    let style = section.style();
    let mut out = String::new();

    if color {
        let tint = tint_code(style.tint);
        out.push_str(&format!(
            "{tint}{BOLD}{} {}{RESET}\n",
            icon_glyph(style.icon),
            section.title
        ));
    } else {
        out.push_str(&format!("{} {}\n", icon_glyph(style.icon), section.title));
    }

    if !section.paragraph.is_empty() {
        out.push_str("  ");
        out.push_str(&section.paragraph);
        out.push('\n');
    }
    for bullet in &section.bullets {
        if color {
            out.push_str(&format!("  {DIM}•{RESET} {bullet}\n"));
        } else {
            out.push_str(&format!("  • {bullet}\n"));
        }
    }
    out
}

/// Render all sections, blank line between cards.
pub fn render_cards(sections: &[InsightSection], color: bool) -> String {
    sections
        .iter()
        .map(|s| render_card(s, color))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, bullets: &[&str], paragraph: &str) -> InsightSection {
        InsightSection {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            paragraph: paragraph.to_string(),
        }
    }

    #[test]
    fn strip_ansi_removes_codes() {
        let colored = format!("{RED}{BOLD}x{RESET}");
        assert_eq!(strip_ansi(&colored), "x");
    }

    #[test]
    fn card_without_color_is_plain() {
        let card = render_card(&section("Patterns", &["A"], "P"), false);
        assert_eq!(card, "∿ Patterns\n  P\n  • A\n");
    }

    #[test]
    fn colored_card_strips_back_to_plain() {
        let s = section("Triggers", &["late nights"], "");
        let colored = render_card(&s, true);
        assert_eq!(strip_ansi(&colored), render_card(&s, false));
    }

    #[test]
    fn cards_join_with_blank_line() {
        let rendered = render_cards(
            &[section("Patterns", &[], "a"), section("Mood", &[], "b")],
            false,
        );
        assert!(rendered.contains("\n\n♥ Mood"));
    }
}
