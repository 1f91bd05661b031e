//! Whole-feed freshness cache
//!
//! One slot for the entire aggregated feed. A hit serves the stored list
//! with `cached: true`; a miss, an expired slot, or a forced refresh runs
//! the pipeline and replaces the slot wholesale. Concurrent refreshers may
//! both fetch; the last writer wins, which is harmless for identical data.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use pulse_core::{FeedItem, FeedResponse};

use crate::pipeline::{FeedPipeline, FeedRefresher};

/// Default slot lifetime
pub const DEFAULT_TTL: Duration = Duration::from_secs(4 * 60 * 60);

/// One cached pipeline result
struct CachedFeed {
    items: Vec<FeedItem>,
    fetched_at: DateTime<Utc>,
    expires_at: Instant,
}

impl CachedFeed {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Single-slot TTL cache for the aggregated feed
pub struct FreshnessCache {
    ttl: Duration,
    slot: RwLock<Option<CachedFeed>>,
}

impl FreshnessCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// The stored feed, if the slot is populated and unexpired
    pub async fn get_if_fresh(&self) -> Option<(Vec<FeedItem>, DateTime<Utc>)> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|cached| !cached.is_expired())
            .map(|cached| (cached.items.clone(), cached.fetched_at))
    }

    /// Replace the slot with a freshly aggregated feed
    pub async fn store(&self, items: Vec<FeedItem>) -> DateTime<Utc> {
        let fetched_at = Utc::now();
        let mut slot = self.slot.write().await;
        *slot = Some(CachedFeed {
            items,
            fetched_at,
            expires_at: Instant::now() + self.ttl,
        });
        fetched_at
    }
}

/// Cache-fronted feed service
///
/// The single entry point the API layer talks to. Generic over the
/// refresh step so the cache semantics are testable without a network.
pub struct FeedService<R = FeedPipeline> {
    refresher: R,
    cache: FreshnessCache,
}

impl FeedService<FeedPipeline> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_refresher(FeedPipeline::new(), ttl)
    }

    /// Every source the pipeline pulls from
    pub fn sources(&self) -> Vec<pulse_core::SourceDescriptor> {
        self.refresher.sources()
    }
}

impl<R: FeedRefresher> FeedService<R> {
    pub fn with_refresher(refresher: R, ttl: Duration) -> Self {
        Self {
            refresher,
            cache: FreshnessCache::new(ttl),
        }
    }

    /// The aggregated feed, from cache when fresh
    ///
    /// `force` bypasses the freshness check but still repopulates the slot.
    pub async fn feed(&self, force: bool) -> FeedResponse {
        if !force {
            if let Some((items, fetched_at)) = self.cache.get_if_fresh().await {
                return FeedResponse {
                    items,
                    fetched_at,
                    cached: true,
                };
            }
        }

        let items = self.refresher.refresh().await;
        let fetched_at = self.cache.store(items.clone()).await;
        FeedResponse {
            items,
            fetched_at,
            cached: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pulse_core::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_item() -> FeedItem {
        FeedItem {
            id: "abc123".to_string(),
            title: "Sample".to_string(),
            url: "https://example.com/sample".to_string(),
            source: "Test Feed".to_string(),
            source_domain: "example.com".to_string(),
            published_at: Utc::now(),
            summary: "Sample".to_string(),
            category: Category::News,
            tags: vec!["General".to_string()],
            score: 0.5,
        }
    }

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = FreshnessCache::new(Duration::from_secs(60));
        assert!(cache.get_if_fresh().await.is_none());
    }

    #[tokio::test]
    async fn test_store_then_fresh_hit() {
        let cache = FreshnessCache::new(Duration::from_secs(60));
        let fetched_at = cache.store(vec![sample_item()]).await;

        let (items, stamp) = cache.get_if_fresh().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(stamp, fetched_at);
    }

    #[tokio::test]
    async fn test_expired_slot_misses() {
        let cache = FreshnessCache::new(Duration::from_millis(10));
        cache.store(vec![sample_item()]).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get_if_fresh().await.is_none());
    }

    #[tokio::test]
    async fn test_store_replaces_whole_slot() {
        let cache = FreshnessCache::new(Duration::from_secs(60));
        cache.store(vec![sample_item(), sample_item()]).await;
        cache.store(vec![sample_item()]).await;

        let (items, _) = cache.get_if_fresh().await.unwrap();
        assert_eq!(items.len(), 1);
    }

    /// Canned refresh step that counts how often the service ran it
    struct CountingRefresher {
        runs: AtomicUsize,
    }

    impl CountingRefresher {
        fn new() -> Self {
            Self {
                runs: AtomicUsize::new(0),
            }
        }

        fn runs(&self) -> usize {
            self.runs.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FeedRefresher for CountingRefresher {
        async fn refresh(&self) -> Vec<FeedItem> {
            self.runs.fetch_add(1, Ordering::SeqCst);
            vec![sample_item()]
        }
    }

    #[tokio::test]
    async fn test_feed_serves_fresh_slot_as_cached() {
        let service =
            FeedService::with_refresher(CountingRefresher::new(), Duration::from_secs(60));

        let first = service.feed(false).await;
        assert!(!first.cached);

        let second = service.feed(false).await;
        assert!(second.cached);
        assert_eq!(second.fetched_at, first.fetched_at);
        assert_eq!(second.items.len(), first.items.len());
        assert_eq!(second.items[0].id, first.items[0].id);
        assert_eq!(service.refresher.runs(), 1);
    }

    #[tokio::test]
    async fn test_feed_force_bypasses_fresh_slot() {
        let service =
            FeedService::with_refresher(CountingRefresher::new(), Duration::from_secs(60));

        service.feed(false).await;
        let forced = service.feed(true).await;
        assert!(!forced.cached);
        assert_eq!(service.refresher.runs(), 2);

        // the forced run repopulated the slot
        let after = service.feed(false).await;
        assert!(after.cached);
        assert_eq!(after.fetched_at, forced.fetched_at);
    }

    #[tokio::test]
    async fn test_feed_refetches_after_expiry() {
        let service =
            FeedService::with_refresher(CountingRefresher::new(), Duration::from_millis(10));

        let first = service.feed(false).await;
        assert!(!first.cached);

        tokio::time::sleep(Duration::from_millis(30)).await;
        let second = service.feed(false).await;
        assert!(!second.cached);
        assert_eq!(service.refresher.runs(), 2);
    }
}
