//! The fixed category enumeration for feed items

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editorial category of a feed item
///
/// Every source carries a default category; the classifier may override it
/// based on text signals. Items never leave the pipeline with a value
/// outside this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// General tech reporting
    News,
    /// Individual/company engineering blogs
    Blogs,
    /// Community aggregators and forums
    Community,
    /// Trending repositories pseudo-source
    Trending,
    /// Conference and event coverage
    Conferences,
    /// Papers and research writeups
    Research,
    /// Hiring and job postings
    Jobs,
    /// Product and release announcements
    Launches,
}

impl Category {
    /// Get the full display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Blogs => "Blogs",
            Category::Community => "Community",
            Category::Trending => "Trending",
            Category::Conferences => "Conferences",
            Category::Research => "Research",
            Category::Jobs => "Jobs",
            Category::Launches => "Launches",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(Category::News),
            "blogs" | "blog" => Ok(Category::Blogs),
            "community" => Ok(Category::Community),
            "trending" => Ok(Category::Trending),
            "conferences" | "conference" => Ok(Category::Conferences),
            "research" => Ok(Category::Research),
            "jobs" => Ok(Category::Jobs),
            "launches" | "launch" => Ok(Category::Launches),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
