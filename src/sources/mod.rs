//! Network data retrieval: transport, snapshot reads and refresh orchestration.

mod error;
pub mod refresh;
mod snapshot;
mod transport;

pub use error::{FetchError, RefreshError, TransportError};
pub use refresh::{
    PollOutcome, PollPolicy, RefreshMode, RefreshOutcome, RefreshPhase, RefreshProgress,
    Refresher,
};
pub use snapshot::{cache_bust_path, fetch_snapshot, fetch_summaries};
pub use transport::{CORRELATION_HEADER, HttpResponse, HttpTransport, NewsTransport};
