//! Aggregation pipeline
//!
//! Fans out one bounded fetch per registered source plus the trending
//! scraper, normalizes and enriches each batch, then merges everything
//! into a single deduplicated, recency-ordered list. A failing source
//! contributes nothing; it never takes the whole refresh down.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{info, warn};

use pulse_core::{FeedItem, SourceDescriptor};
use pulse_feeds::fetcher::{FeedFetcher, RawEntry};
use pulse_feeds::normalize::normalize_entry;
use pulse_feeds::registry::{default_sources, TRENDING_SOURCE};
use pulse_feeds::trending::TrendingScraper;

use crate::classifier::{classify_category, classify_tags};
use crate::scorer::relevance_score;

/// The refresh step the cache-fronted service invokes on a miss
///
/// `FeedPipeline` is the production implementation; the seam exists so
/// the service can be composed with a canned refresher in tests.
#[async_trait]
pub trait FeedRefresher: Send + Sync {
    async fn refresh(&self) -> Vec<FeedItem>;
}

/// Full fetch-to-feed pipeline over the source registry
pub struct FeedPipeline {
    fetcher: FeedFetcher,
    scraper: TrendingScraper,
    sources: Vec<SourceDescriptor>,
}

impl FeedPipeline {
    /// Build a pipeline over the default source registry
    pub fn new() -> Self {
        Self {
            fetcher: FeedFetcher::new(),
            scraper: TrendingScraper::new(),
            sources: default_sources(),
        }
    }

    /// Every source this pipeline pulls from, trending included
    pub fn sources(&self) -> Vec<SourceDescriptor> {
        let mut all = self.sources.clone();
        all.push(TRENDING_SOURCE);
        all
    }

    /// Run one full aggregation pass
    ///
    /// All sources are fetched concurrently; each failure is logged and
    /// replaced by an empty batch.
    pub async fn run_once(&self) -> Vec<FeedItem> {
        let now = Utc::now();

        let feed_futures = self.sources.iter().map(|source| async move {
            match self.fetcher.fetch_source(source).await {
                Ok(entries) => (*source, entries),
                Err(e) => {
                    warn!("Source {} failed: {}", source.id, e);
                    (*source, Vec::new())
                }
            }
        });

        let trending_future = async {
            match self.scraper.fetch_trending().await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Source {} failed: {}", TRENDING_SOURCE.id, e);
                    Vec::new()
                }
            }
        };

        let (batches, trending) = tokio::join!(join_all(feed_futures), trending_future);

        let mut items = Vec::new();
        for (source, entries) in &batches {
            items.extend(enrich_batch(entries, source, now));
        }
        items.extend(enrich_batch(&trending, &TRENDING_SOURCE, now));

        let items = merge_dedup_sort(items);
        info!(
            "Aggregated {} items from {} sources",
            items.len(),
            batches.len() + 1
        );
        items
    }
}

impl Default for FeedPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedRefresher for FeedPipeline {
    async fn refresh(&self) -> Vec<FeedItem> {
        self.run_once().await
    }
}

/// Normalize, classify, and score one source's raw batch
fn enrich_batch(
    entries: &[RawEntry],
    source: &SourceDescriptor,
    now: DateTime<Utc>,
) -> Vec<FeedItem> {
    entries
        .iter()
        .map(|entry| {
            let mut item = normalize_entry(entry, source);
            let text = format!("{} {}", item.title, item.summary);
            if let Some(category) = classify_category(&text) {
                item.category = category;
            }
            item.tags = classify_tags(&text);
            item.score = relevance_score(item.published_at, source.weight, now);
            item
        })
        .collect()
}

/// Merge per-source batches into the final feed ordering
///
/// Items without a url are dropped. Duplicates are keyed by url (title when
/// the url is somehow empty) and the first occurrence wins, so batch order
/// decides which source keeps a cross-posted story. The sort is stable and
/// newest-first.
pub fn merge_dedup_sort(items: Vec<FeedItem>) -> Vec<FeedItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<FeedItem> = items
        .into_iter()
        .filter(|item| !item.url.is_empty())
        .filter(|item| {
            let key = if !item.url.is_empty() {
                item.url.clone()
            } else {
                item.title.clone()
            };
            seen.insert(key)
        })
        .collect();

    merged.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pulse_core::Category;

    fn item(url: &str, title: &str, published_at: DateTime<Utc>, source: &str) -> FeedItem {
        FeedItem {
            id: format!("{}-{}", source, title),
            title: title.to_string(),
            url: url.to_string(),
            source: source.to_string(),
            source_domain: "example.com".to_string(),
            published_at,
            summary: title.to_string(),
            category: Category::News,
            tags: vec!["General".to_string()],
            score: 0.5,
        }
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let now = Utc::now();
        let items = vec![
            item("https://example.com/story", "Story", now, "Feed A"),
            item("https://example.com/story", "Story", now, "Feed B"),
            item("https://example.com/other", "Other", now, "Feed B"),
        ];

        let merged = merge_dedup_sort(items);
        assert_eq!(merged.len(), 2);
        let kept = merged
            .iter()
            .find(|i| i.url == "https://example.com/story")
            .unwrap();
        assert_eq!(kept.source, "Feed A");
    }

    #[test]
    fn test_empty_urls_are_dropped() {
        let now = Utc::now();
        let items = vec![
            item("", "No link at all", now, "Feed A"),
            item("https://example.com/x", "Linked", now, "Feed A"),
        ];

        let merged = merge_dedup_sort(items);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].title, "Linked");
    }

    #[test]
    fn test_sorted_newest_first() {
        let now = Utc::now();
        let items = vec![
            item("https://example.com/old", "Old", now - Duration::hours(5), "A"),
            item("https://example.com/new", "New", now, "A"),
            item("https://example.com/mid", "Mid", now - Duration::hours(2), "A"),
        ];

        let merged = merge_dedup_sort(items);
        let titles: Vec<&str> = merged.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_enrich_batch_fills_classification_and_score() {
        let now = Utc::now();
        let source = SourceDescriptor {
            id: "test-feed",
            name: "Test Feed",
            endpoint: "https://feed.example.com/rss",
            category: Category::Blogs,
            weight: 0.8,
        };
        let entries = vec![RawEntry {
            title: Some("Announcing a Rust rewrite".to_string()),
            link: Some("https://example.com/announce".to_string()),
            published: Some(now),
            ..Default::default()
        }];

        let items = enrich_batch(&entries, &source, now);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, Category::Launches);
        assert!(items[0].tags.contains(&"Systems".to_string()));
        assert!(items[0].score > 0.0 && items[0].score <= 1.0);
    }
}
