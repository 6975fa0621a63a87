//! Dashboard controller: the single owner of `AppState`.

use chrono::Local;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::logic::{Notice, NoticeLevel, notice_for_error, notice_for_success};
use crate::sources::{
    FetchError, NewsTransport, RefreshMode, RefreshOutcome, RefreshProgress, Refresher,
    fetch_snapshot,
};
use crate::state::{AppState, Freshness, NewsItem, ViewState};
use crate::util::{last_updated_label, stats_label};

/// Blocking message shown when the initial load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load news data. Please try again later.";

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView<'a> {
    /// Items to render, in order.
    pub items: &'a [NewsItem],
    /// Number of rendered items.
    pub total: usize,
    /// Stats label for `total`.
    pub stats: String,
    /// "Last updated" label.
    pub last_updated: String,
    /// Loading/ready/empty/error state.
    pub state: ViewState,
    /// Freshness of the last fast refresh, if any.
    pub freshness: Option<&'a Freshness>,
}

/// Clears the in-flight flag when dropped, including when the refresh future is.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Owns application state and mediates every transition of it.
pub struct Dashboard<T> {
    /// HTTP transport.
    transport: T,
    /// Endpoints and polling policy.
    settings: Settings,
    /// Current snapshot and filters.
    state: AppState,
    /// Freshness reported by the last fast refresh.
    freshness: Option<Freshness>,
    /// Whether a refresh is running.
    in_flight: bool,
}

impl<T: NewsTransport> Dashboard<T> {
    /// What: Create a controller with empty state.
    #[must_use]
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
            state: AppState::default(),
            freshness: None,
            in_flight: false,
        }
    }

    /// Read-only access to the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Whether a refresh is currently running.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.in_flight
    }

    /// What: Load the initial snapshot.
    ///
    /// Output:
    /// - `Ok(())` after installing the snapshot.
    ///
    /// # Errors
    /// - Returns the `FetchError`; state keeps its items and gains a blocking error.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        match fetch_snapshot(&self.transport, &self.settings, false).await {
            Ok(snapshot) => {
                self.state.replace_snapshot(snapshot);
                info!(
                    total = self.state.all_items.len(),
                    shown = self.state.filtered_items.len(),
                    "initial news data loaded"
                );
                Ok(())
            }
            Err(e) => {
                error!(code = e.error_code(), error = %e, "error loading news data");
                self.state.load_error = Some(LOAD_ERROR_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// What: Apply a new search/category pair.
    pub fn set_filters(&mut self, search_text: &str, category: &str) {
        self.state.set_filters(search_text, category);
    }

    /// What: Run a refresh and install its snapshot on success.
    ///
    /// Inputs:
    /// - `mode`: Full recomputation or fast read
    /// - `on_progress`: Receives progress updates
    /// - `cancel`: Aborts the refresh at its next suspension point
    ///
    /// Output:
    /// - Success or error `Notice`; on error the current state is left untouched.
    pub async fn refresh<F>(
        &mut self,
        mode: RefreshMode,
        on_progress: F,
        cancel: &CancellationToken,
    ) -> Notice
    where
        F: FnMut(&RefreshProgress),
    {
        if self.in_flight {
            warn!("refresh requested while another is running; ignoring");
            return Notice {
                level: NoticeLevel::Info,
                text: "A refresh is already running.".to_string(),
            };
        }
        self.in_flight = true;
        let result = {
            let _flag = InFlight(&mut self.in_flight);
            Refresher::new(&self.transport, &self.settings)
                .run(mode, on_progress, cancel)
                .await
        };
        match result {
            Ok(outcome) => self.install(outcome),
            Err(e) => notice_for_error(&e),
        }
    }

    /// What: Replace state wholesale with a refresh result.
    fn install(&mut self, outcome: RefreshOutcome) -> Notice {
        let RefreshOutcome {
            snapshot,
            freshness,
            ..
        } = outcome;
        self.state.replace_snapshot(snapshot);
        self.freshness = freshness;
        notice_for_success(self.state.all_items.len())
    }

    /// What: Build the view for the presentation layer.
    #[must_use]
    pub fn view(&self) -> DashboardView<'_> {
        let items = self.state.filtered_items.as_slice();
        DashboardView {
            items,
            total: items.len(),
            stats: stats_label(items.len()),
            last_updated: last_updated_label(self.state.last_updated.as_deref(), Local::now()),
            state: self.state.view_state(),
            freshness: self.freshness.as_ref(),
        }
    }
}
