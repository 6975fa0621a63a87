//! Locations of the settings file and log directory.

use std::env;
use std::path::PathBuf;

/// Application directory name under the config base.
const APP_DIR: &str = "newsboard";

/// Settings file name inside the application directory.
const SETTINGS_FILE: &str = "settings.conf";

/// What: Candidate application directories in lookup order.
///
/// Output:
/// - `$HOME/.config/newsboard` (when `HOME` is set), then
///   `$XDG_CONFIG_HOME/newsboard` (when set and non-empty).
fn candidate_dirs() -> Vec<PathBuf> {
    let non_empty = |var: &str| env::var(var).ok().filter(|v| !v.trim().is_empty());
    let mut dirs = Vec::with_capacity(2);
    if let Some(home) = non_empty("HOME") {
        dirs.push(PathBuf::from(home).join(".config").join(APP_DIR));
    }
    if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
        dirs.push(PathBuf::from(xdg).join(APP_DIR));
    }
    dirs
}

/// First existing `settings.conf` among the candidate directories.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    candidate_dirs()
        .into_iter()
        .map(|d| d.join(SETTINGS_FILE))
        .find(|p| p.is_file())
}

/// What: Application config directory, created on demand.
///
/// Output:
/// - The first candidate directory that exists or can be created;
///   `./.newsboard` when neither `HOME` nor `XDG_CONFIG_HOME` is usable.
#[must_use]
pub fn config_dir() -> PathBuf {
    candidate_dirs()
        .into_iter()
        .find(|d| std::fs::create_dir_all(d).is_ok())
        .unwrap_or_else(|| {
            let dir = PathBuf::from(".newsboard");
            let _ = std::fs::create_dir_all(&dir);
            dir
        })
}

/// Logs directory under the config directory (created on demand).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
