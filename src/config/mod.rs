//! Configuration for newsboard.
//!
//! Settings come from a `key = value` file under the user's config
//! directory, overridable from the environment and the command line.

/// Line-level parsing helpers.
mod parsing;
/// Path resolution for config and log directories.
mod paths;
/// Settings type and loader.
mod settings;

pub use parsing::{parse_key_value, skip_comment_or_empty};
pub use paths::{config_dir, logs_dir};
pub use settings::{BASE_URL_ENV, Settings, normalize_base_url, parse_settings, settings};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
