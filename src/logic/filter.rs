use crate::state::{AppState, NewsItem};

/// What: Select the items matching a search text and a category.
///
/// Inputs:
/// - `items`: Full item list in display order
/// - `search_text`: Free text; trimmed and matched case-insensitively
/// - `category`: Exact wire name of a category, or empty for any
///
/// Output:
/// - Ordered subsequence of `items` satisfying both conditions.
///
/// Details:
/// - With both inputs empty the result is a plain copy of `items`.
/// - Search matches the title, any bullet, or `why_it_matters`.
/// - The input slice is never modified.
#[must_use]
pub fn filter_items(items: &[NewsItem], search_text: &str, category: &str) -> Vec<NewsItem> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() && category.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|it| category.is_empty() || it.kind.as_str() == category)
        .filter(|it| needle.is_empty() || matches_text(it, &needle))
        .cloned()
        .collect()
}

/// What: Check whether any searchable field contains the lowercase needle.
fn matches_text(item: &NewsItem, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&item.title)
        || item.bullets.iter().any(|b| hit(b))
        || item.why_it_matters.as_deref().is_some_and(hit)
}

/// What: Recompute `app.filtered_items` from the stored search pair.
///
/// Inputs:
/// - `app`: Application state holding `all_items`, `search_text` and `category`
///
/// Output:
/// - Replaces `app.filtered_items`; nothing else changes.
pub fn apply_filters(app: &mut AppState) {
    app.filtered_items = filter_items(&app.all_items, &app.search_text, &app.category);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NewsKind;

    fn item(title: &str, kind: NewsKind, bullets: &[&str], why: Option<&str>) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            kind,
            bullets: bullets.iter().map(|b| (*b).to_string()).collect(),
            why_it_matters: why.map(str::to_string),
            url: None,
        }
    }

    fn sample() -> Vec<NewsItem> {
        vec![
            item("Chip shortage eases", NewsKind::News, &["Fabs ramp up"], None),
            item(
                "Launch keynote",
                NewsKind::Video,
                &["New AI feature", "Battery life"],
                Some("Sets the roadmap"),
            ),
            item("Fix flaky Wi-Fi", NewsKind::Troubleshooting, &[], Some("Common AI laptop bug")),
            item("Editor tips", NewsKind::Howto, &["Macros"], None),
            item("Studio tour", NewsKind::Video, &[], None),
        ]
    }

    #[test]
    /// What: Empty search and category copy the input in order
    ///
    /// - Input: Sample list, `""`/`""` and whitespace-only search
    /// - Output: Equal vectors, same order
    fn empty_filters_return_copy() {
        let items = sample();
        assert_eq!(filter_items(&items, "", ""), items);
        assert_eq!(filter_items(&items, "   ", ""), items);
        assert!(filter_items(&[], "", "").is_empty());
    }

    #[test]
    /// What: Category filter keeps only matching kinds
    ///
    /// - Input: Sample list, category `video`
    /// - Output: Both video items in original order
    fn category_filter_selects_kind() {
        let out = filter_items(&sample(), "", "video");
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|i| i.kind == NewsKind::Video));
        assert_eq!(out[0].title, "Launch keynote");
        assert_eq!(out[1].title, "Studio tour");
    }

    #[test]
    /// What: Category comparison is exact
    ///
    /// - Input: Category `Video` (capitalized)
    /// - Output: No matches
    fn category_filter_is_exact() {
        assert!(filter_items(&sample(), "", "Video").is_empty());
    }

    #[test]
    /// What: Search is case-insensitive over title, bullets and why-it-matters
    ///
    /// - Input: `"AI"` and `"  chip "`
    /// - Output: Bullet and why-it-matters hits; trimmed title hit
    fn search_matches_all_text_fields() {
        let items = sample();
        let ai = filter_items(&items, "AI", "");
        let titles: Vec<&str> = ai.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Launch keynote", "Fix flaky Wi-Fi"]);

        let chip = filter_items(&items, "  chip ", "");
        assert_eq!(chip.len(), 1);
        assert_eq!(chip[0].title, "Chip shortage eases");
    }

    #[test]
    /// What: Search and category combine with AND
    ///
    /// - Input: `"ai"` restricted to `troubleshooting`
    /// - Output: Only the troubleshooting hit
    fn search_and_category_combine() {
        let out = filter_items(&sample(), "ai", "troubleshooting");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].kind, NewsKind::Troubleshooting);
    }

    #[test]
    /// What: Absent search term yields nothing
    ///
    /// - Input: `"quantum"`
    /// - Output: Empty result
    fn absent_term_yields_empty() {
        assert!(filter_items(&sample(), "quantum", "").is_empty());
    }

    #[test]
    /// What: Non-ASCII text is lowercased before matching
    ///
    /// - Input: Title `"Cập Nhật"` searched as `"CẬP"`
    /// - Output: One match
    fn search_lowercases_unicode() {
        let items = vec![item("Cập Nhật", NewsKind::News, &[], None)];
        assert_eq!(filter_items(&items, "CẬP", "").len(), 1);
    }

    #[test]
    /// What: `apply_filters` derives the filtered list from stored state
    ///
    /// - Input: State with all items and category `howto`
    /// - Output: `filtered_items` holds exactly the howto item
    fn apply_filters_updates_state() {
        let mut app = AppState {
            all_items: sample(),
            category: "howto".into(),
            ..Default::default()
        };
        apply_filters(&mut app);
        assert_eq!(app.filtered_items.len(), 1);
        assert_eq!(app.filtered_items[0].title, "Editor tips");
        assert_eq!(app.all_items.len(), 5);
    }
}
