//! Canonical feed item produced by the aggregation pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Category;

/// A normalized, classified, scored news item
///
/// Built fresh on every pipeline run and never persisted; the id is
/// deterministic (hash of source id + native link), so the same upstream
/// article keeps the same id across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    /// Unique identifier (hash of source id + canonical link)
    pub id: String,
    /// Article title ("Untitled" when the upstream title is missing)
    pub title: String,
    /// Canonical article URL; items without one are dropped at merge
    pub url: String,
    /// Display name of the originating source
    pub source: String,
    /// Bare hostname of the url, "www." stripped ("source" if unparseable)
    pub source_domain: String,
    /// Publication instant (falls back to fetch time)
    pub published_at: DateTime<Utc>,
    /// Plain-text summary, markup stripped, capped at 220 chars
    pub summary: String,
    /// Category after classification (may differ from the source default)
    pub category: Category,
    /// Topic tags; never empty, ["General"] when nothing matched
    pub tags: Vec<String>,
    /// Combined recency + source-weight relevance in [0, 1]
    pub score: f64,
}

/// Result of one pipeline invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    /// Merged, deduplicated items, most recent first
    pub items: Vec<FeedItem>,
    /// When this item list was computed
    pub fetched_at: DateTime<Utc>,
    /// True when served from the freshness cache without refetching
    pub cached: bool,
}
