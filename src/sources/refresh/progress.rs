//! Progress reporting for refresh runs.

/// Step of a refresh run a progress update belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshPhase {
    /// Asking the backend to start a job.
    Starting,
    /// Waiting for the job to report completion.
    Polling,
    /// Reading the resulting snapshot.
    Loading,
    /// Padding a run that finished faster than the minimum duration.
    Finishing,
}

/// One human-readable progress update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshProgress {
    /// Current phase.
    pub phase: RefreshPhase,
    /// Status polls issued so far.
    pub attempt: u32,
    /// Message suitable for a loading overlay or status line.
    pub message: &'static str,
}

/// Shown before the start request.
pub const MSG_CONNECTING: &str = "Connecting to server...";
/// Shown once the backend accepted the job.
pub const MSG_STARTED: &str = "Fetching fresh data...";
/// Early polling band.
pub const MSG_PROCESSING: &str = "Processing data with AI...";
/// Middle polling band.
pub const MSG_SUMMARIZING: &str = "Generating summaries...";
/// Late polling band.
pub const MSG_FINALIZING: &str = "Finalizing data...";
/// Shown while the refreshed snapshot is read.
pub const MSG_LOADING: &str = "Loading updated data...";
/// Shown while the minimum-duration pad runs.
pub const MSG_WRAPPING_UP: &str = "Wrapping up...";
/// Shown before a fast read of the current summaries.
pub const MSG_LOADING_LATEST: &str = "Loading latest summaries...";

/// Attempts below this count use the early band.
const EARLY_BAND_END: u32 = 10;
/// Attempts below this count (and past the early band) use the middle band.
const MIDDLE_BAND_END: u32 = 20;

/// What: Pick the polling message for an attempt number.
///
/// Inputs:
/// - `attempt`: 1-based poll count
///
/// Output:
/// - Early, middle or late band message. Purely cosmetic.
#[must_use]
pub const fn poll_message(attempt: u32) -> &'static str {
    if attempt < EARLY_BAND_END {
        MSG_PROCESSING
    } else if attempt < MIDDLE_BAND_END {
        MSG_SUMMARIZING
    } else {
        MSG_FINALIZING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Attempt counts map onto three bands
    ///
    /// - Input: Attempts at and around band edges
    /// - Output: Processing below 10, summarizing below 20, finalizing after
    fn poll_message_bands() {
        assert_eq!(poll_message(1), MSG_PROCESSING);
        assert_eq!(poll_message(9), MSG_PROCESSING);
        assert_eq!(poll_message(10), MSG_SUMMARIZING);
        assert_eq!(poll_message(19), MSG_SUMMARIZING);
        assert_eq!(poll_message(20), MSG_FINALIZING);
        assert_eq!(poll_message(60), MSG_FINALIZING);
    }
}
