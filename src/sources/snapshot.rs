//! Snapshot and fast-summaries fetching with defensive response decoding.

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Settings;
use crate::sources::error::FetchError;
use crate::sources::transport::NewsTransport;
use crate::state::{Freshness, NewsItem, Snapshot};

/// What: Append a cache-defeating `t=<millis>` query parameter to a path.
///
/// Inputs:
/// - `path`: Request path, possibly already carrying a query string
/// - `stamp_ms`: Value for the `t` parameter (normally the current time)
///
/// Output:
/// - Path with `?t=` or `&t=` appended.
#[must_use]
pub fn cache_bust_path(path: &str, stamp_ms: i64) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}t={stamp_ms}")
}

/// What: Fetch the static snapshot document.
///
/// Inputs:
/// - `transport`: HTTP transport
/// - `settings`: Supplies `snapshot_path`
/// - `bust_cache`: Append a timestamp query so no cached copy is served
///
/// Output:
/// - `Ok(Snapshot)`; `Err(FetchError)` on connectivity, status or decoding failure.
///
/// # Errors
/// - `FetchError::Network` when the request cannot complete
/// - `FetchError::Http` for non-2xx statuses
/// - `FetchError::Malformed` when the body is not a JSON object
///
/// Details:
/// - A missing or non-array `items` field yields an empty item list.
pub async fn fetch_snapshot<T: NewsTransport>(
    transport: &T,
    settings: &Settings,
    bust_cache: bool,
) -> Result<Snapshot, FetchError> {
    let path = if bust_cache {
        cache_bust_path(&settings.snapshot_path, chrono::Utc::now().timestamp_millis())
    } else {
        settings.snapshot_path.clone()
    };
    let doc = get_json_object(transport, &path).await?;
    let snapshot = snapshot_from_value(&doc);
    info!(
        count = snapshot.items.len(),
        bust_cache,
        last_updated = ?snapshot.last_updated,
        "fetched news snapshot"
    );
    Ok(snapshot)
}

/// What: Fetch the latest computed summaries with freshness metadata.
///
/// Inputs:
/// - `transport`: HTTP transport
/// - `settings`: Supplies `summaries_path`
///
/// Output:
/// - `Ok((Snapshot, Freshness))`; `Err(FetchError)` as for [`fetch_snapshot`].
///
/// # Errors
/// - Same failure mapping as [`fetch_snapshot`].
pub async fn fetch_summaries<T: NewsTransport>(
    transport: &T,
    settings: &Settings,
) -> Result<(Snapshot, Freshness), FetchError> {
    let doc = get_json_object(transport, &settings.summaries_path).await?;
    let snapshot = snapshot_from_value(&doc);
    let freshness = Freshness {
        is_stale: doc.get("is_stale").and_then(Value::as_bool).unwrap_or(false),
        freshness: doc
            .get("freshness")
            .and_then(Value::as_str)
            .map(str::to_string),
        count: doc.get("count").and_then(Value::as_u64),
        correlation_id: doc
            .get("correlation_id")
            .and_then(Value::as_str)
            .map(str::to_string),
    };
    info!(
        count = snapshot.items.len(),
        is_stale = freshness.is_stale,
        freshness = ?freshness.freshness,
        correlation_id = ?freshness.correlation_id,
        "fetched current summaries"
    );
    Ok((snapshot, freshness))
}

/// What: GET a path and require a 2xx JSON object body.
async fn get_json_object<T: NewsTransport>(transport: &T, path: &str) -> Result<Value, FetchError> {
    let resp = transport.get(path).await.map_err(|e| {
        warn!(path, error = %e, "request failed");
        FetchError::from(e)
    })?;
    if !resp.is_success() {
        warn!(path, status = resp.status, "non-success status");
        return Err(FetchError::Http {
            status: resp.status,
        });
    }
    let doc: Value = serde_json::from_str(&resp.body).map_err(|e| FetchError::Malformed {
        reason: e.to_string(),
    })?;
    if !doc.is_object() {
        return Err(FetchError::Malformed {
            reason: "expected a JSON object".to_string(),
        });
    }
    Ok(doc)
}

/// What: Decode items and timestamp from a snapshot-shaped document.
///
/// Details:
/// - Entries that do not decode as `NewsItem` are skipped.
/// - An absent or blank `last_updated` falls back to `lastUpdated`.
fn snapshot_from_value(doc: &Value) -> Snapshot {
    let items = doc
        .get("items")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .enumerate()
                .filter_map(|(idx, raw)| match NewsItem::deserialize(raw) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!(index = idx, error = %e, "skipping undecodable news item");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    let last_updated = ["last_updated", "lastUpdated"]
        .iter()
        .find_map(|k| {
            doc.get(*k)
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
        })
        .map(str::to_string);
    Snapshot {
        items,
        last_updated,
    }
}
