//! Command-line argument definition and processing.

use clap::Parser;
use newsboard::app::Dashboard;
use newsboard::config::Settings;
use newsboard::sources::{HttpTransport, RefreshMode};
use newsboard::state::NewsKind;

/// newsboard - browse and refresh summarized tech news from the terminal
#[derive(Parser, Debug)]
#[command(name = "newsboard")]
#[command(version)]
#[command(about = "Browse and refresh summarized tech news from the terminal", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Only show articles whose title, bullets or note contain TEXT
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show articles of this category (news, announcement, video, howto, troubleshooting, other)
    #[arg(short, long, value_name = "KIND", value_parser = parse_category)]
    pub category: Option<NewsKind>,

    /// Ask the backend to recompute summaries and wait for the job
    #[arg(short, long, conflicts_with = "fast")]
    pub refresh: bool,

    /// Read the latest computed summaries without starting a job
    #[arg(short, long)]
    pub fast: bool,

    /// Print articles as JSON instead of text cards
    #[arg(long)]
    pub json: bool,

    /// Backend base URL (overrides settings.conf and NEWSBOARD_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Refresh mode requested on the command line, if any.
    #[must_use]
    pub const fn refresh_mode(&self) -> Option<RefreshMode> {
        if self.fast {
            Some(RefreshMode::Fast)
        } else if self.refresh {
            Some(RefreshMode::Full)
        } else {
            None
        }
    }
}

/// What: Validate a category name for clap.
///
/// Output:
/// - The matching `NewsKind`, or an error listing the accepted names.
fn parse_category(raw: &str) -> Result<NewsKind, String> {
    NewsKind::from_wire(raw.trim()).ok_or_else(|| {
        let names: Vec<&str> = NewsKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown category '{raw}' (expected one of: {})", names.join(", "))
    })
}

/// What: Run the requested command-line flow.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Effective settings.
///
/// Output:
/// - `true` when everything succeeded, `false` on a load or refresh failure.
///
/// Details:
/// - Loads the snapshot, optionally refreshes, applies filters and prints.
/// - A failed refresh still prints the previous data.
pub async fn process_args(args: &Args, settings: Settings) -> bool {
    use crate::args::{list, refresh};

    let transport = match HttpTransport::new(&settings) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Could not initialize HTTP client: {e}");
            tracing::error!(error = %e, "failed to build HTTP transport");
            return false;
        }
    };
    tracing::info!(base_url = %transport.base_url(), "newsboard starting");
    let show_progress = settings.show_progress;
    let mut dashboard = Dashboard::new(transport, settings);

    if dashboard.load().await.is_err() {
        list::print_view(&dashboard, args.json);
        return false;
    }

    let mut ok = true;
    if let Some(mode) = args.refresh_mode() {
        ok = refresh::handle_refresh(&mut dashboard, mode, show_progress).await;
    }

    let category = args.category.map_or("", NewsKind::as_str);
    dashboard.set_filters(args.search.as_deref().unwrap_or(""), category);
    list::print_view(&dashboard, args.json);
    ok
}
