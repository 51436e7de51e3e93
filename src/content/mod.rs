//! Content collections: blog posts and news items.
//!
//! Each collection is a directory of front-matter documents. Documents are
//! re-read from storage on every call; nothing is cached between calls.
//!
//! # Storage Layout
//!
//! ```text
//! content/
//! ├── blog/
//! │   ├── choosing-a-ct-scanner.md   # slug: choosing-a-ct-scanner
//! │   └── mri-siting-checklist.mdx
//! └── news/
//!     └── rsna-2024-recap.md
//! ```
//!
//! A missing collection directory is an empty collection, and a document
//! that fails to parse is skipped in listings and not-found on lookup.

pub mod document;
pub mod frontmatter;
pub mod read_time;
pub mod repository;

use thiserror::Error;

pub use document::{Collection, Document, DocumentMetadata};
pub use read_time::ReadTime;
pub use repository::{Adjacent, ContentRepository};

/// Errors raised while reading a collection or one of its documents
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document does not start with a '---' front-matter fence")]
    MissingFrontMatter,

    #[error("Missing closing '---' for front matter")]
    UnterminatedFrontMatter,

    #[error("Front matter parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
