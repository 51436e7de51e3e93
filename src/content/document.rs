//! Document types for the content collections.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::frontmatter;
use super::read_time::ReadTime;
use super::ContentError;

/// A content collection backed by one storage directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Blog posts
    Blog,

    /// News items and press releases
    News,
}

impl Collection {
    /// All collections, in display order
    pub const ALL: [Collection; 2] = [Collection::Blog, Collection::News];

    /// Stable key, also the default directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::News => "news",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "blog" | "posts" => Ok(Collection::Blog),
            "news" | "press" => Ok(Collection::News),
            _ => anyhow::bail!("Unknown collection: {}", s),
        }
    }
}

/// Header block as authored
#[derive(Debug, Clone, Deserialize)]
struct FrontMatter {
    title: String,
    date: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

/// Listing view of a document. Carries no body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// File name minus extension
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Cover image path
    pub image: String,
    /// Date as authored; only used for ordering
    pub date: String,
    pub category: String,
    pub author: String,
    pub tags: Vec<String>,
    pub read_time: ReadTime,
}

/// A full document: metadata plus body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    #[serde(flatten)]
    pub metadata: DocumentMetadata,

    /// Raw body text
    pub content: String,
}

impl Document {
    /// Parse a raw stored document.
    ///
    /// `default_author` fills a missing `author`; `words_per_minute` drives
    /// the read-time estimate.
    pub fn parse(
        slug: impl Into<String>,
        raw: &str,
        default_author: &str,
        words_per_minute: u32,
    ) -> Result<Self, ContentError> {
        let (header, content): (FrontMatter, String) = frontmatter::parse(raw)?;
        let read_time = ReadTime::estimate_with(&content, words_per_minute);

        let metadata = DocumentMetadata {
            slug: slug.into(),
            title: header.title,
            excerpt: header.excerpt,
            image: header.image,
            date: header.date,
            category: header.category,
            author: header
                .author
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| default_author.to_string()),
            tags: header.tags,
            read_time,
        };

        Ok(Self { metadata, content })
    }

    pub fn slug(&self) -> &str {
        &self.metadata.slug
    }

    /// Drop the body, keeping the listing view
    pub fn into_metadata(self) -> DocumentMetadata {
        self.metadata
    }
}

impl DocumentMetadata {
    /// The authored date as a timestamp, if it is in a recognised format
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }

    /// Ordering for listings: most recent first, unparseable dates last
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        let ours = (self.published_at(), self.date.as_str());
        let theirs = (other.published_at(), other.date.as_str());
        theirs.cmp(&ours)
    }
}

fn parse_date(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
