//! Bounded status polling: policy and per-attempt outcome.

use std::time::Duration;

use tracing::debug;

use crate::config::Settings;
use crate::sources::error::RefreshError;
use crate::sources::transport::NewsTransport;
use crate::state::RefreshStatus;

/// Fixed-interval, attempt-bounded retry policy for the status endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before every status request.
    pub interval: Duration,
    /// Maximum number of status requests.
    pub max_attempts: u32,
    /// Minimum wall-clock duration of a full refresh.
    pub min_duration: Duration,
}

impl PollPolicy {
    /// What: Derive the policy from settings.
    #[must_use]
    pub const fn from_settings(settings: &Settings) -> Self {
        Self {
            interval: settings.poll_interval,
            max_attempts: settings.max_poll_attempts,
            min_duration: settings.min_refresh_duration,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Result of a single status poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The job reported `completed: true`.
    Ready(RefreshStatus),
    /// The job is still running.
    Pending,
    /// The request failed or returned a non-2xx status; not fatal.
    Failed(String),
}

/// What: Perform one status request and classify it.
///
/// Inputs:
/// - `transport`: HTTP transport
/// - `path`: Status endpoint path
///
/// Output:
/// - `Ok(PollOutcome)` for every transient condition.
///
/// # Errors
/// - `RefreshError::Malformed` when a 2xx response body is not a status document.
pub async fn poll_once<T: NewsTransport>(
    transport: &T,
    path: &str,
) -> Result<PollOutcome, RefreshError> {
    let resp = match transport.get(path).await {
        Ok(resp) => resp,
        Err(e) => {
            debug!(path, error = %e, "status poll failed; treating as not ready");
            return Ok(PollOutcome::Failed(e.to_string()));
        }
    };
    if !resp.is_success() {
        debug!(path, status = resp.status, "status poll returned non-success");
        return Ok(PollOutcome::Failed(format!("HTTP {}", resp.status)));
    }
    let status: RefreshStatus =
        serde_json::from_str(&resp.body).map_err(|e| RefreshError::Malformed {
            reason: e.to_string(),
        })?;
    if status.completed {
        Ok(PollOutcome::Ready(status))
    } else {
        Ok(PollOutcome::Pending)
    }
}
