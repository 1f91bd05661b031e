//! Static source descriptors

use serde::Serialize;

use crate::Category;

/// One configured upstream feed
///
/// Descriptors are a constant table loaded at process start; they are never
/// mutated. `weight` biases scoring toward trusted sources and stays in
/// the nominal 0–1 range.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SourceDescriptor {
    /// Stable identifier, unique across the registry
    pub id: &'static str,
    /// Human-readable name shown alongside items
    pub name: &'static str,
    /// Syndication endpoint (RSS or Atom)
    pub endpoint: &'static str,
    /// Default category for items from this source
    pub category: Category,
    /// Trust/recency weight applied multiplicatively to the score
    pub weight: f64,
}
