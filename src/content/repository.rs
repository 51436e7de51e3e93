//! Reader over one content collection directory.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use super::document::{Collection, Document, DocumentMetadata};
use super::ContentError;
use crate::config::{self, ResolvedConfig, DEFAULT_AUTHOR, DEFAULT_WORDS_PER_MINUTE};

/// Accepted document extensions, in lookup preference order
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Read-only view of a document collection
#[derive(Debug, Clone)]
pub struct ContentRepository {
    dir: PathBuf,
    default_author: String,
    words_per_minute: u32,
}

/// Neighbours of a document in the newest-first listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacent {
    /// The next more recent document
    pub newer: Option<DocumentMetadata>,

    /// The next older document
    pub older: Option<DocumentMetadata>,
}

impl ContentRepository {
    /// Repository over `dir` with default reader settings
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            default_author: DEFAULT_AUTHOR.to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }

    /// Repository for `collection` as laid out by `config`
    pub fn for_collection(config: &ResolvedConfig, collection: Collection) -> Self {
        Self::new(config.collection_dir(collection))
            .with_default_author(config.content.default_author.clone())
            .with_words_per_minute(config.content.words_per_minute)
    }

    /// Repository for `collection` using the process-wide configuration
    pub fn open(collection: Collection) -> Result<Self> {
        Ok(Self::for_collection(config::config()?, collection))
    }

    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute.max(1);
        self
    }

    /// The backing directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All document slugs, without reading any document.
    ///
    /// A missing collection yields an empty set. Slugs of malformed
    /// documents are included; `get_by_slug` reports them as absent.
    pub fn list_keys(&self) -> Result<BTreeSet<String>, ContentError> {
        Ok(self
            .discover()?
            .into_iter()
            .map(|(slug, _)| slug)
            .collect())
    }

    /// Metadata of every readable document, most recent first.
    ///
    /// Documents that fail to read or parse are skipped and logged.
    /// Documents with identical dates keep file-name order.
    pub fn list_metadata(&self) -> Result<Vec<DocumentMetadata>, ContentError> {
        let mut listing: Vec<DocumentMetadata> = self
            .discover()?
            .into_iter()
            .filter_map(|(slug, path)| match self.load(&slug, &path) {
                Ok(doc) => Some(doc.into_metadata()),
                Err(e) => {
                    warn!(
                        %slug,
                        path = %path.display(),
                        error = %e,
                        "Skipping malformed document"
                    );
                    None
                }
            })
            .collect();

        listing.sort_by(|a, b| a.cmp_newest_first(b));
        Ok(listing)
    }

    /// The full document whose slug equals `slug` exactly.
    ///
    /// Returns `None` when the document is missing, unreadable or malformed.
    pub fn get_by_slug(&self, slug: &str) -> Option<Document> {
        match self.find(slug) {
            Ok(Some(doc)) => Some(doc),
            Ok(None) => {
                debug!(slug, dir = %self.dir.display(), "Document not found");
                None
            }
            Err(e) => {
                warn!(slug, error = %e, "Document lookup failed");
                None
            }
        }
    }

    /// Metadata of documents in `category`, most recent first
    pub fn list_by_category(&self, category: &str) -> Result<Vec<DocumentMetadata>, ContentError> {
        let mut listing = self.list_metadata()?;
        listing.retain(|doc| doc.category == category);
        Ok(listing)
    }

    /// Metadata of documents tagged `tag`, most recent first
    pub fn list_by_tag(&self, tag: &str) -> Result<Vec<DocumentMetadata>, ContentError> {
        let mut listing = self.list_metadata()?;
        listing.retain(|doc| doc.tags.iter().any(|t| t == tag));
        Ok(listing)
    }

    /// The `limit` most recent documents
    pub fn recent(&self, limit: usize) -> Result<Vec<DocumentMetadata>, ContentError> {
        let mut listing = self.list_metadata()?;
        listing.truncate(limit);
        Ok(listing)
    }

    /// Distinct non-empty categories, in order of first appearance in the listing
    pub fn categories(&self) -> Result<Vec<String>, ContentError> {
        let mut seen = BTreeSet::new();
        Ok(self
            .list_metadata()?
            .into_iter()
            .filter(|doc| !doc.category.is_empty())
            .filter_map(|doc| seen.insert(doc.category.clone()).then_some(doc.category))
            .collect())
    }

    /// Newer and older neighbours of `slug` in the listing.
    ///
    /// An unknown slug has no neighbours.
    pub fn adjacent(&self, slug: &str) -> Result<Adjacent, ContentError> {
        let listing = self.list_metadata()?;

        let Some(pos) = listing.iter().position(|doc| doc.slug == slug) else {
            return Ok(Adjacent::default());
        };

        Ok(Adjacent {
            newer: pos.checked_sub(1).and_then(|i| listing.get(i)).cloned(),
            older: listing.get(pos + 1).cloned(),
        })
    }

    /// Looks the slug up among discovered file stems; it is never joined into a path
    fn find(&self, slug: &str) -> Result<Option<Document>, ContentError> {
        let Some((_, path)) = self.discover()?.into_iter().find(|(s, _)| s == slug) else {
            return Ok(None);
        };

        self.load(slug, &path).map(Some)
    }

    fn load(&self, slug: &str, path: &Path) -> Result<Document, ContentError> {
        let raw = fs::read_to_string(path)?;
        Document::parse(slug, &raw, &self.default_author, self.words_per_minute)
    }

    /// Document files as (slug, path), in file-name order, one per slug
    fn discover(&self) -> Result<Vec<(String, PathBuf)>, ContentError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %self.dir.display(), "Collection directory missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(slug) = document_slug(&path) {
                files.push((slug, path));
            }
        }

        files.sort_by(|(_, a), (_, b)| a.file_name().cmp(&b.file_name()));

        let mut seen = BTreeSet::new();
        files.retain(|(slug, path)| {
            if seen.insert(slug.clone()) {
                true
            } else {
                warn!(%slug, path = %path.display(), "Duplicate slug, ignoring file");
                false
            }
        });

        Ok(files)
    }
}

/// Slug for a document path, if it has a document extension
fn document_slug(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if !EXTENSIONS.contains(&ext) {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || stem.starts_with('.') {
        return None;
    }
    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_document_slug() {
        assert_eq!(
            document_slug(Path::new("/c/blog/ct-buying-guide.md")),
            Some("ct-buying-guide".to_string())
        );
        assert_eq!(
            document_slug(Path::new("/c/blog/post.mdx")),
            Some("post".to_string())
        );
        assert_eq!(document_slug(Path::new("/c/blog/notes.txt")), None);
        assert_eq!(document_slug(Path::new("/c/blog/.hidden.md")), None);
        assert_eq!(document_slug(Path::new("/c/blog/README")), None);
    }

    #[test]
    fn test_path_like_slugs_not_found() {
        let temp = TempDir::new().unwrap();
        let blog = temp.path().join("blog");
        fs::create_dir(&blog).unwrap();
        write(temp.path(), "outside.md", "---\ntitle: Outside\ndate: 2024-01-01\n---\n");

        let repo = ContentRepository::new(&blog);
        assert!(repo.get_by_slug("../outside").is_none());
        assert!(repo.get_by_slug("").is_none());
    }

    #[test]
    fn test_md_preferred_over_mdx() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "post.md", "---\ntitle: Markdown\ndate: 2024-01-01\n---\nmd");
        write(temp.path(), "post.mdx", "---\ntitle: MDX\ndate: 2024-01-01\n---\nmdx");

        let repo = ContentRepository::new(temp.path());
        assert_eq!(repo.list_keys().unwrap().len(), 1);
        assert_eq!(repo.list_metadata().unwrap().len(), 1);
        assert_eq!(repo.get_by_slug("post").unwrap().metadata.title, "Markdown");
    }

    #[test]
    fn test_subdirectories_ignored() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("drafts.md")).unwrap();
        write(temp.path(), "live.md", "---\ntitle: Live\ndate: 2024-01-01\n---\n");

        let repo = ContentRepository::new(temp.path());
        let keys: Vec<_> = repo.list_keys().unwrap().into_iter().collect();
        assert_eq!(keys, vec!["live"]);
    }

    #[test]
    fn test_words_per_minute_floor() {
        let repo = ContentRepository::new("/nowhere").with_words_per_minute(0);
        assert_eq!(repo.words_per_minute, 1);
    }
}
