//! Keyword-signal classification
//!
//! Lexical substring matching over the item text, not NLP. Category
//! signals are checked in a fixed priority order and the first matching
//! group wins; topic tags are not exclusive and an item may carry several.

use pulse_core::Category;

/// Tag emitted when no topic keyword matches
const FALLBACK_TAG: &str = "General";

/// Ordered category signal groups; order is the tie-break and must not be
/// rearranged: conference beats research beats jobs beats launches.
const CATEGORY_SIGNALS: &[(Category, &[&str])] = &[
    (
        Category::Conferences,
        &["conference", "summit", "keynote", "cfp", "workshop", "meetup"],
    ),
    (
        Category::Research,
        &["arxiv", "paper", "research", "study", "benchmark", "preprint"],
    ),
    (
        Category::Jobs,
        &["hiring", "job opening", "careers", "recruiting", "join our team"],
    ),
    (
        Category::Launches,
        &[
            "launch",
            "announcing",
            "introducing",
            "released",
            "unveil",
            "now available",
        ],
    ),
];

/// Topic label to keyword table for tagging
const TOPIC_SIGNALS: &[(&str, &[&str])] = &[
    (
        "AI/ML",
        // " ai " is space-delimited: the bare substring would also hit
        // "email", "available", "again"
        &[
            " ai ",
            "artificial intelligence",
            "machine learning",
            "llm",
            "gpt",
            "neural",
            "model training",
        ],
    ),
    (
        "Web",
        &["javascript", "typescript", "react", "css", "frontend", "browser"],
    ),
    (
        "Systems",
        &["rust", "kernel", "compiler", "performance", "low-level", "c++"],
    ),
    (
        "Cloud",
        &["kubernetes", "aws", "docker", "serverless", "cloud", "terraform"],
    ),
    (
        "Security",
        &["security", "vulnerability", "cve", "exploit", "breach", "malware"],
    ),
    (
        "Data",
        &["database", "postgres", "sql", "analytics", "data pipeline"],
    ),
    (
        "Mobile",
        &["android", "ios", "swift", "kotlin", "mobile app"],
    ),
    (
        "Open Source",
        &["open source", "open-source", "github", "license", "maintainer"],
    ),
];

/// Infer a category override from item text
///
/// Returns `None` when no signal group matches, in which case the source's
/// default category stands.
pub fn classify_category(text: &str) -> Option<Category> {
    let text = searchable(text);
    CATEGORY_SIGNALS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
}

/// Collect every matching topic tag for item text
///
/// Never returns an empty list; "General" stands in when nothing matches.
pub fn classify_tags(text: &str) -> Vec<String> {
    let text = searchable(text);
    let tags: Vec<String> = TOPIC_SIGNALS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(topic, _)| topic.to_string())
        .collect();

    if tags.is_empty() {
        vec![FALLBACK_TAG.to_string()]
    } else {
        tags
    }
}

/// Lowercased haystack padded with spaces, so space-delimited keywords
/// also match at the start and end of the text
fn searchable(text: &str) -> String {
    format!(" {} ", text.to_lowercase())
}
