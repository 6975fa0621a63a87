use std::env;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::parsing::{parse_bool, parse_key_value, skip_comment_or_empty};
use crate::config::paths::resolve_settings_config_path;

/// Environment variable overriding `base_url` from the settings file.
pub const BASE_URL_ENV: &str = "NEWSBOARD_BASE_URL";

/// User-tunable settings for endpoints and refresh polling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Scheme, host and optional port of the backend, without trailing slash.
    pub base_url: String,
    /// Path of the static snapshot document.
    pub snapshot_path: String,
    /// Path of the fast summaries endpoint.
    pub summaries_path: String,
    /// Path that starts a backend refresh job.
    pub refresh_path: String,
    /// Path reporting the refresh job status.
    pub refresh_status_path: String,
    /// Delay before each status poll.
    pub poll_interval: Duration,
    /// Maximum number of status polls before giving up.
    pub max_poll_attempts: u32,
    /// Minimum wall-clock duration of a full refresh.
    pub min_refresh_duration: Duration,
    /// TCP connect timeout for each request.
    pub connect_timeout: Duration,
    /// Overall timeout for each request.
    pub request_timeout: Duration,
    /// Print progress lines while a refresh runs.
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            snapshot_path: "/summaries.json".to_string(),
            summaries_path: "/api/summaries".to_string(),
            refresh_path: "/api/refresh".to_string(),
            refresh_status_path: "/api/refresh/status".to_string(),
            poll_interval: Duration::from_secs(5),
            max_poll_attempts: 60,
            min_refresh_duration: Duration::from_millis(2000),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            show_progress: true,
        }
    }
}

/// What: Load settings from `settings.conf` and the environment.
///
/// Output:
/// - A `Settings` value; defaults are used for anything missing or invalid.
///
/// Details:
/// - The file is looked up under `$HOME/.config/newsboard` then `$XDG_CONFIG_HOME/newsboard`.
/// - `NEWSBOARD_BASE_URL` overrides `base_url` when set and non-empty.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    if let Some(path) = resolve_settings_config_path() {
        load_settings_file(&path, &mut out);
    }
    if let Ok(url) = env::var(BASE_URL_ENV)
        && !url.trim().is_empty()
    {
        debug!(url = %url, "base_url overridden from environment");
        out.base_url = normalize_base_url(&url);
    }
    out
}

/// What: Read and apply one settings file, logging but tolerating I/O errors.
fn load_settings_file(path: &Path, settings: &mut Settings) {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, settings);
            debug!(path = %path.display(), "settings loaded");
        }
        Err(e) => warn!(path = %path.display(), error = %e, "failed to read settings file"),
    }
}

/// What: Parse `settings.conf` content into an existing `Settings`.
///
/// Inputs:
/// - `content`: File content
/// - `settings`: Settings to update in place
///
/// Details:
/// - Unknown keys are ignored; values that fail to parse keep the previous value.
/// - Zero attempts or a zero poll interval are rejected.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "base_url" | "server" | "host" => {
                if !val.is_empty() {
                    settings.base_url = normalize_base_url(&val);
                }
            }
            "snapshot_path" | "summary_path" => set_path(&mut settings.snapshot_path, &val),
            "summaries_path" => set_path(&mut settings.summaries_path, &val),
            "refresh_path" => set_path(&mut settings.refresh_path, &val),
            "refresh_status_path" | "status_path" => {
                set_path(&mut settings.refresh_status_path, &val);
            }
            "poll_interval_ms" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.poll_interval = Duration::from_millis(v);
                }
            }
            "max_poll_attempts" | "max_attempts" => {
                if let Ok(v) = val.parse::<u32>()
                    && v > 0
                {
                    settings.max_poll_attempts = v;
                }
            }
            "min_refresh_duration_ms" | "min_duration_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.min_refresh_duration = Duration::from_millis(v);
                }
            }
            "connect_timeout_secs" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.connect_timeout = Duration::from_secs(v);
                }
            }
            "request_timeout_secs" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout = Duration::from_secs(v);
                }
            }
            "show_progress" => settings.show_progress = parse_bool(&val),
            _ => {}
        }
    }
}

/// What: Trim whitespace and trailing slashes from a base URL.
#[must_use]
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// What: Store a path value, forcing a leading slash.
fn set_path(slot: &mut String, val: &str) {
    let v = val.trim();
    if v.is_empty() {
        return;
    }
    *slot = if v.starts_with('/') {
        v.to_string()
    } else {
        format!("/{v}")
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys override defaults
    ///
    /// - Input: Settings file with URL, paths and polling numbers
    /// - Output: Fields updated; leading slash added to bare paths
    fn parse_settings_applies_known_keys() {
        let mut s = Settings::default();
        let content = "\
# newsboard settings
base_url = https://news.example.org/ # trailing slash trimmed
snapshot_path = data/summaries.json
poll_interval_ms = 2000
max_poll_attempts = 120
min_refresh_duration_ms = 0
show_progress = off
";
        parse_settings(content, &mut s);
        assert_eq!(s.base_url, "https://news.example.org");
        assert_eq!(s.snapshot_path, "/data/summaries.json");
        assert_eq!(s.poll_interval, Duration::from_secs(2));
        assert_eq!(s.max_poll_attempts, 120);
        assert_eq!(s.min_refresh_duration, Duration::ZERO);
        assert!(!s.show_progress);
        assert_eq!(s.refresh_path, "/api/refresh");
    }

    #[test]
    /// What: Invalid values keep defaults
    ///
    /// - Input: Zero/negative/garbage numbers and unknown keys
    /// - Output: Settings equal to defaults
    fn parse_settings_rejects_invalid_values() {
        let mut s = Settings::default();
        parse_settings(
            "poll_interval_ms = 0\nmax_poll_attempts = -3\nrequest_timeout_secs = soon\nmystery = 1\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Settings are read from `$HOME/.config/newsboard/settings.conf`
    ///
    /// - Input: Temp HOME with a settings file; base URL env var unset
    /// - Output: `settings()` reflects the file
    fn settings_reads_file_under_home() {
        let _guard = crate::config::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let orig_env = std::env::var_os(BASE_URL_ENV);
        let base = tempfile::tempdir().expect("tempdir");
        let dir = base.path().join(".config").join("newsboard");
        std::fs::create_dir_all(&dir).expect("config dir");
        std::fs::write(dir.join("settings.conf"), "max_attempts = 7\n").expect("write");
        unsafe {
            std::env::set_var("HOME", base.path());
            std::env::remove_var(BASE_URL_ENV);
        }
        let s = settings();
        assert_eq!(s.max_poll_attempts, 7);

        unsafe { std::env::set_var(BASE_URL_ENV, "http://override:9/") };
        assert_eq!(settings().base_url, "http://override:9");

        unsafe {
            match orig_home {
                Some(v) => std::env::set_var("HOME", v),
                None => std::env::remove_var("HOME"),
            }
            match orig_env {
                Some(v) => std::env::set_var(BASE_URL_ENV, v),
                None => std::env::remove_var(BASE_URL_ENV),
            }
        }
    }
}
