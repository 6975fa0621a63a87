//! Central `AppState` container owned by the dashboard controller.

use crate::state::types::{NewsItem, Snapshot};

/// Coarse state of the main view, consumed by whatever renders it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Initial load has not finished yet.
    #[default]
    Loading,
    /// Filtered items are available.
    Ready,
    /// Data is loaded but nothing matches the current filters.
    Empty,
    /// Initial load failed; carries the blocking message to show.
    Error(String),
}

/// Application state for one data snapshot plus the active filter pair.
///
/// `all_items` and `last_updated` are replaced together by
/// [`AppState::replace_snapshot`]; `filtered_items` is always derived from
/// `all_items` via `crate::logic::apply_filters`.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Every item of the current snapshot, in backend order.
    pub all_items: Vec<NewsItem>,
    /// Subsequence of `all_items` matching `search_text` and `category`.
    pub filtered_items: Vec<NewsItem>,
    /// Raw timestamp of the current snapshot.
    pub last_updated: Option<String>,
    /// Last applied search text (untrimmed, as typed).
    pub search_text: String,
    /// Last applied category wire name; empty means any.
    pub category: String,
    /// Whether a snapshot has been loaded at least once.
    pub loaded: bool,
    /// Blocking error from the initial load, if it failed.
    pub load_error: Option<String>,
}

impl AppState {
    /// What: Swap in a new snapshot and re-derive the filtered list.
    ///
    /// Inputs:
    /// - `snapshot`: Freshly fetched items and timestamp
    ///
    /// Output:
    /// - Replaces items and timestamp wholesale; keeps the filter pair.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.all_items = snapshot.items;
        self.last_updated = snapshot.last_updated;
        self.loaded = true;
        self.load_error = None;
        crate::logic::apply_filters(self);
    }

    /// What: Store a new search/category pair and re-filter.
    ///
    /// Inputs:
    /// - `search_text`: Raw search input
    /// - `category`: Category wire name or empty
    pub fn set_filters(&mut self, search_text: &str, category: &str) {
        self.search_text = search_text.to_string();
        self.category = category.to_string();
        crate::logic::apply_filters(self);
    }

    /// What: Derive the current view state.
    ///
    /// Output:
    /// - `Error` when the initial load failed, `Loading` before any data,
    ///   otherwise `Ready` or `Empty` depending on the filtered list.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        if let Some(msg) = &self.load_error {
            return ViewState::Error(msg.clone());
        }
        if !self.loaded {
            return ViewState::Loading;
        }
        if self.filtered_items.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Ready
        }
    }
}
