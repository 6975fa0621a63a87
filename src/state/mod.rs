//! Modularized state module.
//!
//! Value types live in `types`; the single mutable container lives in
//! `app_state` and is owned by the dashboard controller.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, ViewState};
pub use types::{Freshness, NewsItem, NewsKind, RefreshStatus, Snapshot};
