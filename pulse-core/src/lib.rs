//! Core types for the Pulse tech-news aggregator
//!
//! This crate defines the shared data structures used across the pipeline:
//! the canonical feed item, the fixed category enumeration, and the static
//! source descriptor.

pub mod category;
pub mod item;
pub mod source;

pub use category::Category;
pub use item::{FeedItem, FeedResponse};
pub use source::SourceDescriptor;
