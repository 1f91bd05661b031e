//! Source clients for the Pulse tech-news aggregator
//!
//! This crate provides everything that talks to upstream sources:
//! - RSS/Atom fetching for the configured feed registry
//! - The trending-repositories scraper (HTML, not a syndication format)
//! - The pure normalizer that turns raw records into canonical items

pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod registry;
pub mod trending;

pub use error::FeedError;
pub use fetcher::{FeedFetcher, RawEntry};
pub use normalize::normalize_entry;
pub use registry::{default_sources, TRENDING_SOURCE};
pub use trending::TrendingScraper;
