//! Aggregation pipeline for the Pulse tech-news aggregator
//!
//! This crate holds the algorithmic middle of the system: text
//! classification, relevance scoring, the concurrent multi-source fan-out
//! with merge/dedup/sort, and the process-wide freshness cache.

pub mod cache;
pub mod classifier;
pub mod pipeline;
pub mod scorer;

pub use cache::{FeedService, FreshnessCache, DEFAULT_TTL};
pub use classifier::{classify_category, classify_tags};
pub use pipeline::{merge_dedup_sort, FeedPipeline, FeedRefresher};
pub use scorer::relevance_score;
