//! Small formatting helpers for counts and timestamps.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Display format for "last updated" labels (day/month/year, 24h clock).
const LAST_UPDATED_FORMAT: &str = "%d/%m/%Y %H:%M";

/// What: Render the article-count label for the stats display.
///
/// Output:
/// - `"1 Article"` or `"<n> Articles"`.
#[must_use]
pub fn stats_label(total: usize) -> String {
    if total == 1 {
        "1 Article".to_string()
    } else {
        format!("{total} Articles")
    }
}

/// What: Parse a backend timestamp into local time.
///
/// Inputs:
/// - `raw`: RFC 3339 string or a naive ISO-8601 datetime (as written by the backend)
///
/// Output:
/// - `Some(DateTime<Local>)` when parseable; `None` otherwise.
///
/// Details:
/// - Naive values are interpreted in the local timezone.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// What: Render the "last updated" label.
///
/// Inputs:
/// - `raw`: Snapshot timestamp, if any
/// - `now`: Fallback used when `raw` is missing or unparseable
///
/// Output:
/// - `"Last updated: dd/mm/yyyy HH:MM"`.
#[must_use]
pub fn last_updated_label(raw: Option<&str>, now: DateTime<Local>) -> String {
    let when = raw.and_then(parse_timestamp).unwrap_or(now);
    format!("Last updated: {}", when.format(LAST_UPDATED_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Stats label singular/plural forms
    ///
    /// - Input: 0, 1, 42
    /// - Output: "0 Articles", "1 Article", "42 Articles"
    fn stats_label_forms() {
        assert_eq!(stats_label(0), "0 Articles");
        assert_eq!(stats_label(1), "1 Article");
        assert_eq!(stats_label(42), "42 Articles");
    }

    #[test]
    /// What: Naive backend timestamps format in local time
    ///
    /// - Input: `2025-03-01T10:05:09.123456`
    /// - Output: `Last updated: 01/03/2025 10:05`
    fn last_updated_label_naive() {
        let now = Local::now();
        assert_eq!(
            last_updated_label(Some("2025-03-01T10:05:09.123456"), now),
            "Last updated: 01/03/2025 10:05"
        );
    }

    #[test]
    /// What: Missing or garbage timestamps fall back to `now`
    ///
    /// - Input: `None` and `"yesterday"`
    /// - Output: Label built from the supplied `now`
    fn last_updated_label_fallback() {
        let now = Local
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 0)
            .single()
            .expect("valid local time");
        let expected = "Last updated: 31/12/2024 23:59";
        assert_eq!(last_updated_label(None, now), expected);
        assert_eq!(last_updated_label(Some("yesterday"), now), expected);
    }

    #[test]
    /// What: RFC 3339 timestamps parse
    ///
    /// - Input: `2025-03-01T10:05:09+00:00`
    /// - Output: Some value equal to the UTC instant
    fn parse_timestamp_rfc3339() {
        let dt = parse_timestamp("2025-03-01T10:05:09+00:00").expect("parses");
        assert_eq!(dt.timestamp(), 1_740_823_509);
    }
}
