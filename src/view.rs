//! Plain-text card rendering for terminal output.

use std::fmt::Write as _;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::DashboardView;
use crate::state::{NewsItem, ViewState};

/// Default wrap width for card bodies.
pub const DEFAULT_WIDTH: usize = 80;

/// Message shown when filters match nothing.
pub const EMPTY_MESSAGE: &str = "No articles found for the selected filter.";

/// What: Greedy word wrap measured in terminal cells.
///
/// Inputs:
/// - `text`: Text to wrap
/// - `width`: Maximum display width per line (at least 1)
///
/// Output:
/// - Lines whose display width does not exceed `width`, unless a single
///   word is wider, in which case it is split by character.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0usize;
    for word in text.split_whitespace() {
        let word_w = word.width();
        if line_w > 0 && line_w + 1 + word_w <= width {
            line.push(' ');
            line.push_str(word);
            line_w += 1 + word_w;
            continue;
        }
        if line_w > 0 {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }
        if word_w <= width {
            line.push_str(word);
            line_w = word_w;
            continue;
        }
        // Hard-split words wider than the line.
        for ch in word.chars() {
            let cw = ch.width().unwrap_or(0);
            if line_w + cw > width && line_w > 0 {
                lines.push(std::mem::take(&mut line));
                line_w = 0;
            }
            line.push(ch);
            line_w += cw;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// What: Render one item as an indented text card.
///
/// Inputs:
/// - `item`: Item to render
/// - `width`: Total width available
///
/// Output:
/// - Multi-line string: `[kind] title`, bullets, "Why it matters", URL.
#[must_use]
pub fn render_card(item: &NewsItem, width: usize) -> String {
    let mut out = String::new();
    let head = format!("[{}] {}", item.kind, item.title);
    for line in wrap(&head, width) {
        let _ = writeln!(out, "{line}");
    }
    let inner = width.saturating_sub(4);
    for bullet in &item.bullets {
        for (i, line) in wrap(bullet, inner).iter().enumerate() {
            let mark = if i == 0 { "  - " } else { "    " };
            let _ = writeln!(out, "{mark}{line}");
        }
    }
    if let Some(why) = item.why_it_matters.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = writeln!(out, "  Why it matters:");
        for line in wrap(why, inner) {
            let _ = writeln!(out, "    {line}");
        }
    }
    if let Some(url) = item.url.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "  {url}");
    }
    out
}

/// What: Render the whole dashboard view.
///
/// Inputs:
/// - `view`: Current view from the controller
/// - `width`: Wrap width
///
/// Output:
/// - Header with stats and timestamp followed by cards, or a state message.
#[must_use]
pub fn render_view(view: &DashboardView<'_>, width: usize) -> String {
    let mut out = String::new();
    match &view.state {
        ViewState::Loading => {
            let _ = writeln!(out, "Loading...");
            return out;
        }
        ViewState::Error(msg) => {
            let _ = writeln!(out, "{msg}");
            return out;
        }
        ViewState::Empty | ViewState::Ready => {}
    }
    let _ = writeln!(out, "{} | {}", view.stats, view.last_updated);
    if let Some(f) = view.freshness
        && f.is_stale
    {
        let age = f.freshness.as_deref().unwrap_or("unknown");
        let _ = writeln!(out, "Data may be stale ({age})");
    }
    let _ = writeln!(out);
    if view.state == ViewState::Empty {
        let _ = writeln!(out, "{EMPTY_MESSAGE}");
        return out;
    }
    for item in view.items {
        out.push_str(&render_card(item, width));
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Freshness, NewsKind};
    use crate::test_utils::news;

    #[test]
    /// What: Wrapping respects display width including wide characters
    ///
    /// - Input: ASCII sentence at width 10; CJK word at width 4
    /// - Output: No line exceeds the width
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        let cjk = wrap("日本語テキスト", 4);
        assert!(cjk.iter().all(|l| l.width() <= 4));
        assert_eq!(cjk.concat(), "日本語テキスト");
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    /// What: Card shows kind, title, bullets, note and url
    ///
    /// - Input: Fully populated item
    /// - Output: Each part on its own line
    fn card_layout() {
        let mut item = news("Rust 2024 ships", NewsKind::Announcement);
        item.bullets = vec!["New edition".into()];
        item.why_it_matters = Some("Let chains".into());
        item.url = Some("https://example.org/a".into());
        let card = render_card(&item, 60);
        assert_eq!(
            card,
            "[announcement] Rust 2024 ships\n  - New edition\n  Why it matters:\n    Let chains\n  https://example.org/a\n"
        );
    }

    #[test]
    /// What: Empty and stale views render their messages
    ///
    /// - Input: Empty view with stale freshness
    /// - Output: Header, stale warning and empty-state message
    fn view_empty_and_stale() {
        let fresh = Freshness {
            is_stale: true,
            freshness: Some("2 days ago".into()),
            ..Freshness::default()
        };
        let view = DashboardView {
            items: &[],
            total: 0,
            stats: "0 Articles".into(),
            last_updated: "Last updated: 01/01/2025 09:00".into(),
            state: ViewState::Empty,
            freshness: Some(&fresh),
        };
        let out = render_view(&view, DEFAULT_WIDTH);
        assert!(out.starts_with("0 Articles | Last updated: 01/01/2025 09:00\n"));
        assert!(out.contains("Data may be stale (2 days ago)"));
        assert!(out.ends_with(&format!("{EMPTY_MESSAGE}\n")));
    }

    #[test]
    /// What: Error view shows only the blocking message
    ///
    /// - Input: `ViewState::Error`
    /// - Output: Message line without header
    fn view_error_only_message() {
        let view = DashboardView {
            items: &[],
            total: 0,
            stats: String::new(),
            last_updated: String::new(),
            state: ViewState::Error("boom".into()),
            freshness: None,
        };
        assert_eq!(render_view(&view, DEFAULT_WIDTH), "boom\n");
    }
}
