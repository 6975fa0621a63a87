//! Command-line refresh functionality.

use newsboard::app::Dashboard;
use newsboard::logic::NoticeLevel;
use newsboard::sources::{NewsTransport, RefreshMode, RefreshProgress};
use tokio_util::sync::CancellationToken;

/// What: Run a refresh through the dashboard, reporting progress on stderr.
///
/// Inputs:
/// - `dashboard`: Controller to refresh.
/// - `mode`: Full job or fast read.
/// - `show_progress`: Print progress messages while waiting.
///
/// Output:
/// - `true` if the refresh succeeded, `false` otherwise.
///
/// Details:
/// - Ctrl-C cancels the refresh; previous data is kept and still printed.
/// - The resulting notice goes to stderr so stdout stays clean for `--json`.
pub async fn handle_refresh<T: NewsTransport>(
    dashboard: &mut Dashboard<T>,
    mode: RefreshMode,
    show_progress: bool,
) -> bool {
    tracing::info!(mode = ?mode, "refresh requested from CLI");
    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupt received; cancelling refresh");
                cancel.cancel();
            }
        })
    };

    let mut last: Option<&'static str> = None;
    let on_progress = |p: &RefreshProgress| {
        if show_progress && last != Some(p.message) {
            eprintln!("{}", p.message);
            last = Some(p.message);
        }
    };
    let notice = dashboard.refresh(mode, on_progress, &cancel).await;
    watcher.abort();

    eprintln!("{}", notice.text);
    notice.level == NoticeLevel::Success
}
