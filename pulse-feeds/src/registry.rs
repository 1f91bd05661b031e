//! Static catalog of feed sources
//!
//! The registry is a constant table supplied at startup; editing it is a
//! code change, not configuration. Weights bias scoring toward sources
//! whose items tend to matter more when fresh.

use pulse_core::{Category, SourceDescriptor};

/// Pseudo-source descriptor for the trending-repositories scraper
///
/// Not a syndication feed; the endpoint is the listing page the scraper
/// parses. Listed by the sources endpoint alongside the registry.
pub const TRENDING_SOURCE: SourceDescriptor = SourceDescriptor {
    id: "github-trending",
    name: "GitHub Trending",
    endpoint: "https://github.com/trending",
    category: Category::Trending,
    weight: 0.75,
};

/// Curated list of syndication sources
pub fn default_sources() -> Vec<SourceDescriptor> {
    vec![
        // Community aggregators - fast-moving, high signal
        SourceDescriptor {
            id: "hacker-news",
            name: "Hacker News",
            endpoint: "https://hnrss.org/frontpage",
            category: Category::Community,
            weight: 0.9,
        },
        SourceDescriptor {
            id: "lobsters",
            name: "Lobsters",
            endpoint: "https://lobste.rs/rss",
            category: Category::Community,
            weight: 0.8,
        },
        // Tech press
        SourceDescriptor {
            id: "techcrunch",
            name: "TechCrunch",
            endpoint: "https://techcrunch.com/feed/",
            category: Category::News,
            weight: 0.85,
        },
        SourceDescriptor {
            id: "the-verge",
            name: "The Verge",
            endpoint: "https://www.theverge.com/rss/index.xml",
            category: Category::News,
            weight: 0.8,
        },
        SourceDescriptor {
            id: "ars-technica",
            name: "Ars Technica",
            endpoint: "https://feeds.arstechnica.com/arstechnica/index",
            category: Category::News,
            weight: 0.8,
        },
        SourceDescriptor {
            id: "infoq",
            name: "InfoQ",
            endpoint: "https://feed.infoq.com/",
            category: Category::News,
            weight: 0.75,
        },
        // Engineering blogs
        SourceDescriptor {
            id: "dev-to",
            name: "DEV Community",
            endpoint: "https://dev.to/feed",
            category: Category::Blogs,
            weight: 0.65,
        },
        SourceDescriptor {
            id: "github-blog",
            name: "GitHub Blog",
            endpoint: "https://github.blog/feed/",
            category: Category::Blogs,
            weight: 0.7,
        },
        // Research
        SourceDescriptor {
            id: "arxiv-cs",
            name: "arXiv cs.SE",
            endpoint: "https://rss.arxiv.org/rss/cs.SE",
            category: Category::Research,
            weight: 0.7,
        },
    ]
}
