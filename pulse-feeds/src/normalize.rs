//! Pure normalization of raw feed records
//!
//! No I/O here: a `RawEntry` plus its source descriptor produce the
//! canonical fields. Classification and scoring fill in the rest later.

use chrono::Utc;
use sha2::{Digest, Sha256};

use pulse_core::{FeedItem, SourceDescriptor};

use crate::fetcher::RawEntry;

/// Character budget for summaries before the ellipsis marker kicks in
const SUMMARY_MAX_CHARS: usize = 220;

/// Domain used when the item url does not parse
const DOMAIN_SENTINEL: &str = "source";

/// Build a canonical item from one raw record
///
/// Tags start empty and the score at zero; the classifier and scorer run
/// after normalization. Items whose url resolves empty are dropped later
/// by the merger, not here.
pub fn normalize_entry(entry: &RawEntry, source: &SourceDescriptor) -> FeedItem {
    let title = entry
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("Untitled")
        .trim()
        .to_string();

    let url = entry
        .link
        .as_deref()
        .filter(|l| !l.is_empty())
        .or(entry.guid.as_deref())
        .unwrap_or_default()
        .to_string();

    let summary_raw = [
        entry.summary.as_deref(),
        entry.content.as_deref(),
        Some(title.as_str()),
    ]
    .into_iter()
    .flatten()
    .find(|s| !s.trim().is_empty())
    .unwrap_or_default();

    FeedItem {
        id: item_id(source.id, &url, &title),
        summary: clip_summary(&strip_html(summary_raw)),
        source: source.name.to_string(),
        source_domain: display_domain(&url),
        published_at: entry.published.unwrap_or_else(Utc::now),
        category: source.category,
        tags: Vec::new(),
        score: 0.0,
        title,
        url,
    }
}

/// Deterministic item identifier: hash of source id + the best native key
pub fn item_id(source_id: &str, url: &str, title: &str) -> String {
    let key = if !url.is_empty() { url } else { title };
    let mut hasher = Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update(b":");
    hasher.update(key.as_bytes());
    hex::encode(&hasher.finalize()[..8])
}

/// Strip HTML tags from text, decoding entities and collapsing whitespace
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    let mut in_tag = false;

    while let Some(c) = chars.next() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            '&' => {
                // Collect up to a bounded entity name; unknown or
                // unterminated entities pass through literally.
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next == ';' || next == '&' || next.is_whitespace() || name.len() > 6 {
                        break;
                    }
                    name.push(next);
                    chars.next();
                }
                match decode_entity(&name) {
                    Some(decoded) if chars.peek() == Some(&';') => {
                        chars.next();
                        text.push(decoded);
                    }
                    _ => {
                        text.push('&');
                        text.push_str(&name);
                    }
                }
            }
            _ => text.push(c),
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The handful of entities feeds actually emit
fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" | "#160" => Some(' '),
        "#8211" => Some('–'),
        "#8217" => Some('\u{2019}'),
        "#8230" => Some('…'),
        _ => None,
    }
}

/// Truncate a plain-text summary to the character budget, marking the cut
pub fn clip_summary(text: &str) -> String {
    if text.chars().count() <= SUMMARY_MAX_CHARS {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(SUMMARY_MAX_CHARS).collect();
    clipped.push('…');
    clipped
}

/// Bare hostname of a url with any leading "www." stripped
pub fn display_domain(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .map(|host| host.strip_prefix("www.").unwrap_or(&host).to_string())
        .unwrap_or_else(|| DOMAIN_SENTINEL.to_string())
}
