//! Error types for fetching and refreshing news data.

/// Connectivity-level failure reported by a transport (DNS, connect, timeout, body read).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self(e.to_string())
    }
}

/// Failures while reading a snapshot or the summaries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete.
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http {
        /// Response status code.
        status: u16,
    },

    /// The body was not a JSON object.
    #[error("malformed response: {reason}")]
    Malformed {
        /// Decoder message.
        reason: String,
    },
}

impl FetchError {
    /// Stable code for structured logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Malformed { .. } => "MALFORMED_RESPONSE",
        }
    }
}

/// Failures of a refresh run, full or fast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    /// The start request did not complete.
    #[error("network error while starting refresh: {0}")]
    Network(#[from] TransportError),

    /// The backend refused to start the job.
    #[error("Failed to start refresh: {detail}")]
    StartFailed {
        /// Backend message or `HTTP <status>`.
        detail: String,
    },

    /// The poll budget ran out before the job completed.
    #[error("Refresh timeout - no completion after {attempts} status polls")]
    Timeout {
        /// Status polls issued.
        attempts: u32,
    },

    /// The job completed unsuccessfully.
    #[error("Refresh failed on server")]
    ServerFailure {
        /// Backend error text, if any.
        detail: Option<String>,
    },

    /// A 2xx status response could not be decoded.
    #[error("malformed refresh status: {reason}")]
    Malformed {
        /// Decoder message.
        reason: String,
    },

    /// Reading the refreshed data failed.
    #[error("could not load refreshed data: {0}")]
    Fetch(#[from] FetchError),

    /// The cancellation token fired.
    #[error("refresh cancelled")]
    Cancelled,
}

impl RefreshError {
    /// Stable code for structured logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "NETWORK_ERROR",
            Self::StartFailed { .. } => "START_FAILED",
            Self::Timeout { .. } => "TIMEOUT",
            Self::ServerFailure { .. } => "SERVER_FAILURE",
            Self::Malformed { .. } => "MALFORMED_RESPONSE",
            Self::Fetch(e) => e.error_code(),
            Self::Cancelled => "CANCELLED",
        }
    }

    /// What: Extra detail worth showing next to the user-facing message.
    ///
    /// Output:
    /// - Server-provided detail for start and server failures; `None` otherwise.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::StartFailed { detail } => Some(detail.as_str()),
            Self::ServerFailure { detail } => detail.as_deref(),
            _ => None,
        }
    }
}
