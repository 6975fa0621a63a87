//! Dashboard controller that owns application state.

mod dashboard;

pub use dashboard::{Dashboard, DashboardView, LOAD_ERROR_MESSAGE};
