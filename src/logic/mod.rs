//! Pure filtering and notice logic.

pub mod filter;
pub mod notice;

// Re-export public APIs
pub use filter::{apply_filters, filter_items};
pub use notice::{Notice, NoticeLevel, notice_for_error, notice_for_success};
