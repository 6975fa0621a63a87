//! Refresh orchestration: start a backend job, poll it, read the result.
//!
//! One [`Refresher`] serves both modes. `Full` walks the
//! `Starting → Polling → Completed` state machine; `Fast` reads the
//! already-computed summaries in a single request.

mod poll;
mod progress;

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::sources::error::RefreshError;
use crate::sources::snapshot::{fetch_snapshot, fetch_summaries};
use crate::sources::transport::{HttpResponse, NewsTransport};
use crate::state::{Freshness, Snapshot};

pub use poll::{PollOutcome, PollPolicy, poll_once};
pub use progress::{
    MSG_CONNECTING, MSG_FINALIZING, MSG_LOADING, MSG_LOADING_LATEST, MSG_PROCESSING, MSG_STARTED,
    MSG_SUMMARIZING, MSG_WRAPPING_UP, RefreshPhase, RefreshProgress, poll_message,
};

/// Which refresh flavour to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshMode {
    /// Trigger a backend recomputation and poll until it completes.
    #[default]
    Full,
    /// Read the latest computed summaries without recomputation.
    Fast,
}

/// Successful refresh result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// Snapshot to install into application state.
    pub snapshot: Snapshot,
    /// Freshness metadata (fast mode only).
    pub freshness: Option<Freshness>,
    /// Status polls issued (zero in fast mode).
    pub attempts: u32,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Runs refreshes against one transport with one set of endpoints and policy.
pub struct Refresher<'a, T> {
    /// HTTP transport.
    transport: &'a T,
    /// Endpoint paths.
    settings: &'a Settings,
    /// Polling bounds.
    policy: PollPolicy,
}

impl<'a, T: NewsTransport> Refresher<'a, T> {
    /// What: Create a refresher using the policy derived from `settings`.
    #[must_use]
    pub const fn new(transport: &'a T, settings: &'a Settings) -> Self {
        Self {
            transport,
            settings,
            policy: PollPolicy::from_settings(settings),
        }
    }

    /// What: Override the polling policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// What: Run one refresh to completion.
    ///
    /// Inputs:
    /// - `mode`: `Full` (start + poll + fetch) or `Fast` (single summaries read)
    /// - `on_progress`: Called with each human-readable progress update
    /// - `cancel`: Token checked at every suspension point
    ///
    /// Output:
    /// - `Ok(RefreshOutcome)` with the new snapshot; `Err(RefreshError)` otherwise.
    ///
    /// # Errors
    /// - `Network` / `StartFailed` when the job cannot be started
    /// - `Timeout` when no completion is seen within the attempt budget
    /// - `ServerFailure` when the job completes unsuccessfully
    /// - `Malformed` when the status endpoint returns an unreadable 2xx body
    /// - `Fetch` when the final snapshot cannot be read
    /// - `Cancelled` when `cancel` fires
    pub async fn run<F>(
        &self,
        mode: RefreshMode,
        mut on_progress: F,
        cancel: &CancellationToken,
    ) -> Result<RefreshOutcome, RefreshError>
    where
        F: FnMut(&RefreshProgress),
    {
        let started = Instant::now();
        let result = match mode {
            RefreshMode::Full => self.run_full(&mut on_progress, cancel, started).await,
            RefreshMode::Fast => self.run_fast(&mut on_progress, cancel, started).await,
        };
        match &result {
            Ok(out) => info!(
                mode = ?mode,
                attempts = out.attempts,
                count = out.snapshot.items.len(),
                elapsed_ms = u64::try_from(out.elapsed.as_millis()).unwrap_or(u64::MAX),
                "refresh completed"
            ),
            Err(e) => warn!(mode = ?mode, code = e.error_code(), error = %e, "refresh failed"),
        }
        result
    }

    /// What: Start the backend job, poll it, and read the fresh snapshot.
    async fn run_full<F>(
        &self,
        on_progress: &mut F,
        cancel: &CancellationToken,
        started: Instant,
    ) -> Result<RefreshOutcome, RefreshError>
    where
        F: FnMut(&RefreshProgress),
    {
        on_progress(&progress(RefreshPhase::Starting, 0, MSG_CONNECTING));
        let resp = guarded(cancel, self.transport.get(&self.settings.refresh_path)).await??;
        if !resp.is_success() {
            let detail = start_failure_detail(&resp);
            return Err(RefreshError::StartFailed { detail });
        }
        info!(status = resp.status, "refresh job started");
        on_progress(&progress(RefreshPhase::Polling, 0, MSG_STARTED));

        let mut attempts: u32 = 0;
        let status = loop {
            if attempts >= self.policy.max_attempts {
                return Err(RefreshError::Timeout { attempts });
            }
            guarded(cancel, tokio::time::sleep(self.policy.interval)).await?;
            attempts += 1;
            let outcome = guarded(
                cancel,
                poll_once(self.transport, &self.settings.refresh_status_path),
            )
            .await??;
            match outcome {
                PollOutcome::Ready(status) => break status,
                PollOutcome::Pending => {
                    on_progress(&progress(
                        RefreshPhase::Polling,
                        attempts,
                        poll_message(attempts),
                    ));
                }
                PollOutcome::Failed(reason) => {
                    debug!(attempt = attempts, reason = %reason, "status poll not usable");
                }
            }
        };

        if !status.success {
            return Err(RefreshError::ServerFailure {
                detail: status.error,
            });
        }

        on_progress(&progress(RefreshPhase::Loading, attempts, MSG_LOADING));
        let snapshot = guarded(cancel, fetch_snapshot(self.transport, self.settings, true)).await??;

        let elapsed = started.elapsed();
        if elapsed < self.policy.min_duration {
            on_progress(&progress(RefreshPhase::Finishing, attempts, MSG_WRAPPING_UP));
            guarded(
                cancel,
                tokio::time::sleep(self.policy.min_duration.saturating_sub(elapsed)),
            )
            .await?;
        }

        Ok(RefreshOutcome {
            snapshot,
            freshness: None,
            attempts,
            elapsed: started.elapsed(),
        })
    }

    /// What: Read the current summaries in one request.
    async fn run_fast<F>(
        &self,
        on_progress: &mut F,
        cancel: &CancellationToken,
        started: Instant,
    ) -> Result<RefreshOutcome, RefreshError>
    where
        F: FnMut(&RefreshProgress),
    {
        on_progress(&progress(RefreshPhase::Loading, 0, MSG_LOADING_LATEST));
        let (snapshot, freshness) =
            guarded(cancel, fetch_summaries(self.transport, self.settings)).await??;
        Ok(RefreshOutcome {
            snapshot,
            freshness: Some(freshness),
            attempts: 0,
            elapsed: started.elapsed(),
        })
    }
}

/// What: Await `fut` unless `cancel` fires first.
async fn guarded<F: Future>(cancel: &CancellationToken, fut: F) -> Result<F::Output, RefreshError> {
    if cancel.is_cancelled() {
        return Err(RefreshError::Cancelled);
    }
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(RefreshError::Cancelled),
        out = fut => Ok(out),
    }
}

const fn progress(phase: RefreshPhase, attempt: u32, message: &'static str) -> RefreshProgress {
    RefreshProgress {
        phase,
        attempt,
        message,
    }
}

/// What: Extract the reason a start request was refused.
///
/// Output:
/// - The body's `message`, else its `detail`, else `HTTP <status>`.
fn start_failure_detail(resp: &HttpResponse) -> String {
    serde_json::from_str::<Value>(&resp.body)
        .ok()
        .and_then(|v| {
            ["message", "detail"].iter().find_map(|k| {
                v.get(*k)
                    .and_then(Value::as_str)
                    .filter(|s| !s.trim().is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("HTTP {}", resp.status))
}
