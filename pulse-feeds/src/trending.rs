//! Trending-repositories scraper
//!
//! The one pseudo-source whose upstream is semi-structured markup instead
//! of a syndication feed: the GitHub trending page. Extraction is
//! positional (leading entries of the repeated row container) and the
//! records get a synthesized "now" timestamp.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::FeedError;
use crate::fetcher::RawEntry;

/// Listing page the scraper parses
const TRENDING_URL: &str = "https://github.com/trending";

/// How many leading entries to keep from the page
const TRENDING_LIMIT: usize = 10;

/// Scraper client for the trending page
pub struct TrendingScraper {
    client: Client,
}

impl TrendingScraper {
    /// Create a scraper with a timeout-bounded HTTP client
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent("Pulse/0.1 (tech-news aggregator)")
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Fetch and parse the trending page into raw entries
    pub async fn fetch_trending(&self) -> Result<Vec<RawEntry>, FeedError> {
        let response = self
            .client
            .get(TRENDING_URL)
            .send()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::Upstream {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", TRENDING_URL),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| FeedError::RequestFailed(e.to_string()))?;

        let entries = parse_trending_page(&html);
        debug!("Scraped {} trending repositories", entries.len());
        Ok(entries)
    }
}

impl Default for TrendingScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the leading repository entries from the trending page markup
pub fn parse_trending_page(html: &str) -> Vec<RawEntry> {
    let document = Html::parse_document(html);
    // Each trending repository is one Box-row article; the h2 anchor holds
    // the owner/name path and the p element the description.
    let row_selector = Selector::parse("article.Box-row").unwrap();
    let name_selector = Selector::parse("h2 a").unwrap();
    let desc_selector = Selector::parse("p").unwrap();

    let now = Utc::now();
    let mut entries = Vec::new();

    for row in document.select(&row_selector).take(TRENDING_LIMIT) {
        let Some(anchor) = row.select(&name_selector).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let repo_path = href.trim_start_matches('/');
        // The anchor text is the repo path with decorative whitespace
        let title: String = anchor
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let title = if title.is_empty() {
            repo_path.to_string()
        } else {
            title
        };

        let description = row
            .select(&desc_selector)
            .next()
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|d| !d.is_empty());

        entries.push(RawEntry {
            title: Some(title),
            link: Some(format!("https://github.com/{}", repo_path)),
            guid: Some(repo_path.to_string()),
            summary: description,
            content: None,
            published: Some(now),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRENDING_FIXTURE: &str = r#"
<html><body>
  <article class="Box-row">
    <h2 class="h3"><a href="/rust-lang/rust"> rust-lang /
        rust </a></h2>
    <p class="col-9">Empowering everyone to build reliable software.</p>
  </article>
  <article class="Box-row">
    <h2 class="h3"><a href="/tokio-rs/tokio"> tokio-rs /
        tokio </a></h2>
  </article>
  <article class="Box-row">
    <h2 class="h3"><span>no anchor here</span></h2>
  </article>
</body></html>"#;

    #[test]
    fn test_parse_trending_fixture() {
        let entries = parse_trending_page(TRENDING_FIXTURE);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("rust-lang / rust"));
        assert_eq!(
            entries[0].link.as_deref(),
            Some("https://github.com/rust-lang/rust")
        );
        assert_eq!(
            entries[0].summary.as_deref(),
            Some("Empowering everyone to build reliable software.")
        );
        // rows without a description still come through
        assert!(entries[1].summary.is_none());
        // synthesized timestamp
        assert!(entries[0].published.is_some());
    }

    #[test]
    fn test_parse_trending_caps_entries() {
        let row = r#"<article class="Box-row"><h2><a href="/o/r">o / r</a></h2></article>"#;
        let page = format!("<html><body>{}</body></html>", row.repeat(25));
        assert_eq!(parse_trending_page(&page).len(), TRENDING_LIMIT);
    }

    #[test]
    fn test_parse_trending_empty_page() {
        assert!(parse_trending_page("<html><body></body></html>").is_empty());
    }
}
