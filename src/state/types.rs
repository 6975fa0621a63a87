//! Core value types used by newsboard state.

use serde::{Deserialize, Deserializer, Serialize};

/// Category of a summarized news entry.
///
/// The wire representation is the lowercase name carried in the item's
/// `type` field. Unknown names collapse into [`NewsKind::Other`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    /// Regular news story.
    News,
    /// Product or company announcement.
    Announcement,
    /// Video content.
    Video,
    /// How-to or tutorial.
    Howto,
    /// Troubleshooting write-up.
    Troubleshooting,
    /// Anything else, including unrecognized categories.
    #[default]
    #[serde(other)]
    Other,
}

impl NewsKind {
    /// Every category in display order.
    pub const ALL: [Self; 6] = [
        Self::News,
        Self::Announcement,
        Self::Video,
        Self::Howto,
        Self::Troubleshooting,
        Self::Other,
    ];

    /// What: Return the wire name for this category.
    ///
    /// Output:
    /// - Lowercase string matching the backend's `type` field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Announcement => "announcement",
            Self::Video => "video",
            Self::Howto => "howto",
            Self::Troubleshooting => "troubleshooting",
            Self::Other => "other",
        }
    }

    /// What: Resolve a category from its exact wire name.
    ///
    /// Inputs:
    /// - `key`: Candidate wire name such as `"video"`.
    ///
    /// Output:
    /// - `Some(kind)` for a known name; `None` otherwise.
    #[must_use]
    pub fn from_wire(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for NewsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What: Decode a field, treating an explicit JSON `null` like a missing value.
///
/// Output:
/// - The decoded value, or `T::default()` for `null`.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// One summarized news entry as served by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Category; serialized as `type`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NewsKind,
    /// Ordered summary bullets.
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    /// Short note on why the story matters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_it_matters: Option<String>,
    /// Link to the original article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Status document returned by the refresh-status endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RefreshStatus {
    /// Whether the backend job has finished.
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Whether the finished job succeeded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    /// Backend error description for failed jobs.
    #[serde(default)]
    pub error: Option<String>,
}

/// A fetched, immutable list of news items plus its timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Items in backend order.
    pub items: Vec<NewsItem>,
    /// Raw `last_updated` value as sent by the backend.
    pub last_updated: Option<String>,
}

/// Freshness metadata attached to the fast summaries endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Freshness {
    /// Backend considers the data older than its staleness threshold.
    pub is_stale: bool,
    /// Human-readable age such as `"5 minutes ago"`.
    pub freshness: Option<String>,
    /// Item count reported by the backend.
    pub count: Option<u64>,
    /// Request correlation id echoed by the backend.
    pub correlation_id: Option<String>,
}
