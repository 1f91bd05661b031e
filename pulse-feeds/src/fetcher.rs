//! RSS/Atom feed fetching
//!
//! One bounded network call per source; any failure is reported as a
//! `FeedError` and absorbed by the pipeline's fan-out. Records come out as
//! `RawEntry` values with no normalization applied.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;

use pulse_core::SourceDescriptor;

use crate::error::FeedError;

/// Per-source network timeout
const FETCH_TIMEOUT_SECS: u64 = 10;

/// One raw record as the upstream feed delivered it
///
/// Every field is optional; the normalizer applies the fallback rules.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    /// Native title
    pub title: Option<String>,
    /// Native link
    pub link: Option<String>,
    /// Native identifier (guid / atom id)
    pub guid: Option<String>,
    /// Short description
    pub summary: Option<String>,
    /// Full content body
    pub content: Option<String>,
    /// Parsed publication instant, when the feed carried one
    pub published: Option<DateTime<Utc>>,
}

/// Feed client for the configured source registry
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    /// Create a fetcher with a shared, timeout-bounded HTTP client
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .user_agent("Pulse/0.1 (tech-news aggregator)")
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch and parse a single source's feed
    pub async fn fetch_source(&self, source: &SourceDescriptor) -> Result<Vec<RawEntry>, FeedError> {
        let response = self
            .client
            .get(source.endpoint)
            .send()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::Upstream {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", source.endpoint),
            });
        }

        let content = response
            .bytes()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        // Try parsing as RSS first, then Atom
        if let Ok(channel) = rss::Channel::read_from(&content[..]) {
            let entries = parse_rss_channel(&channel);
            debug!("Fetched {} RSS entries from {}", entries.len(), source.name);
            return Ok(entries);
        }

        if let Ok(atom_feed) = atom_syndication::Feed::read_from(&content[..]) {
            let entries = parse_atom_feed(&atom_feed);
            debug!("Fetched {} Atom entries from {}", entries.len(), source.name);
            return Ok(entries);
        }

        Err(FeedError::ParseError(format!(
            "Failed to parse feed: {}",
            source.endpoint
        )))
    }
}

impl Default for FeedFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an RSS channel's items to raw entries
pub fn parse_rss_channel(channel: &rss::Channel) -> Vec<RawEntry> {
    channel
        .items()
        .iter()
        .map(|item| RawEntry {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            guid: item.guid().map(|g| g.value().to_string()),
            summary: item.description().map(str::to_string),
            content: item.content().map(str::to_string),
            published: item.pub_date().and_then(parse_feed_date),
        })
        .collect()
}

/// Convert an Atom feed's entries to raw entries
pub fn parse_atom_feed(feed: &atom_syndication::Feed) -> Vec<RawEntry> {
    feed.entries()
        .iter()
        .map(|entry| RawEntry {
            title: Some(entry.title().to_string()),
            link: entry.links().first().map(|l| l.href().to_string()),
            guid: Some(entry.id().to_string()),
            summary: entry.summary().map(|s| s.to_string()),
            content: entry.content().and_then(|c| c.value()).map(str::to_string),
            published: entry
                .published()
                .or_else(|| Some(entry.updated()))
                .map(|d| d.with_timezone(&Utc)),
        })
        .collect()
}

/// Parse the date strings feeds actually ship (RFC 2822, with an RFC 3339
/// fallback for feeds that ignore the RSS spec)
fn parse_feed_date(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(s)
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
