//! Shared utilities for argument processing.

use newsboard::config::{Settings, normalize_base_url};

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `--log-level` argument.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Apply command-line overrides on top of loaded settings.
///
/// Inputs:
/// - `settings`: Settings from file and environment
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Settings with `--base-url` applied when given.
pub fn apply_overrides(mut settings: Settings, args: &crate::args::Args) -> Settings {
    if let Some(url) = args.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
        settings.base_url = normalize_base_url(url);
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    #[test]
    /// What: Verbose flag wins over an explicit log level
    ///
    /// - Input: `--log-level warn -v`
    /// - Output: `debug`
    fn verbose_overrides_log_level() {
        let args = Args::parse_from(["newsboard", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
        let args = Args::parse_from(["newsboard", "--log-level", "warn"]);
        assert_eq!(determine_log_level(&args), "warn");
    }

    #[test]
    /// What: `--base-url` replaces the configured URL
    ///
    /// - Input: Default settings plus `--base-url http://h:9/`
    /// - Output: `http://h:9`
    fn base_url_override() {
        let args = Args::parse_from(["newsboard", "--base-url", "http://h:9/"]);
        let s = apply_overrides(Settings::default(), &args);
        assert_eq!(s.base_url, "http://h:9");
        let args = Args::parse_from(["newsboard"]);
        let s = apply_overrides(Settings::default(), &args);
        assert_eq!(s.base_url, Settings::default().base_url);
    }
}
