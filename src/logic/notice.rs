//! User-facing notices for refresh outcomes.

use crate::sources::{FetchError, RefreshError};

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Operation succeeded.
    Success,
    /// Operation failed; previous data is still shown.
    Error,
    /// Neutral information.
    Info,
}

/// A dismissible message for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text to display.
    pub text: String,
}

/// Prefix shared by every refresh error notice.
const ERROR_PREFIX: &str = "Could not update data.";

/// What: Build the success notice after a refresh.
///
/// Inputs:
/// - `total`: Number of items in the new snapshot
#[must_use]
pub fn notice_for_success(total: usize) -> Notice {
    let noun = if total == 1 { "article" } else { "articles" };
    Notice {
        level: NoticeLevel::Success,
        text: format!("Data updated successfully! Found {total} {noun}"),
    }
}

/// What: Map a refresh error to a categorized user-facing notice.
///
/// Inputs:
/// - `err`: Failure from the refresh orchestrator
///
/// Output:
/// - Error notice: shared prefix, category sentence, and `(detail)` when present.
///
/// Details:
/// - Categories: timeout, start failure, server failure, unreadable data,
///   cancellation, and a generic fallback for connectivity problems.
#[must_use]
pub fn notice_for_error(err: &RefreshError) -> Notice {
    let category = match err {
        RefreshError::Timeout { .. } => "The update took too long.",
        RefreshError::StartFailed { .. } => "Could not start the update.",
        RefreshError::ServerFailure { .. } => "The server failed to process the data.",
        RefreshError::Malformed { .. } | RefreshError::Fetch(FetchError::Malformed { .. }) => {
            "The server returned unreadable data."
        }
        RefreshError::Cancelled => "The update was cancelled.",
        RefreshError::Network(_) | RefreshError::Fetch(_) => "Please try again later.",
    };
    let mut text = format!("{ERROR_PREFIX} {category}");
    if let Some(detail) = err.detail() {
        text.push_str(&format!(" ({detail})"));
    }
    Notice {
        level: NoticeLevel::Error,
        text,
    }
}
