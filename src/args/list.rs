//! Command-line listing of the current dashboard view.

use newsboard::app::Dashboard;
use newsboard::sources::NewsTransport;
use newsboard::state::{NewsItem, ViewState};
use newsboard::view::{DEFAULT_WIDTH, render_view};
use serde::Serialize;

/// JSON document printed by `--json`.
#[derive(Serialize)]
struct JsonView<'a> {
    /// Number of listed items.
    total: usize,
    /// Raw snapshot timestamp.
    last_updated: Option<&'a str>,
    /// Blocking error, if the load failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    /// Filtered items.
    items: &'a [NewsItem],
}

/// What: Print the dashboard view to stdout.
///
/// Inputs:
/// - `dashboard`: Controller holding the current state.
/// - `json`: Print JSON instead of text cards.
///
/// Details:
/// - Text width follows `COLUMNS` when set, otherwise 80 cells.
pub fn print_view<T: NewsTransport>(dashboard: &Dashboard<T>, json: bool) {
    let view = dashboard.view();
    if json {
        let doc = JsonView {
            total: view.total,
            last_updated: dashboard.state().last_updated.as_deref(),
            error: match &view.state {
                ViewState::Error(msg) => Some(msg.as_str()),
                _ => None,
            },
            items: view.items,
        };
        match serde_json::to_string_pretty(&doc) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Could not encode JSON output: {e}");
                tracing::error!(error = %e, "failed to serialize view");
            }
        }
    } else {
        let width = terminal_width();
        print!("{}", render_view(&view, width));
    }
    tracing::info!(count = view.total, json, "displayed news items");
}

/// What: Terminal width from `COLUMNS`, clamped to a readable range.
fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .map_or(DEFAULT_WIDTH, |w| w.clamp(20, 200))
}
