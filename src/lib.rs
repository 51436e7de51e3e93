//! medsite - Content and catalog resolution for an imaging equipment site
//!
//! The page layer asks this crate for two things: articles (blog posts and
//! news items stored as front-matter documents) and products (a fixed
//! catalog assembled from per-category lists).
//!
//! # Modules
//!
//! - `config`: Content locations and reader defaults
//! - `content`: Document collections (listing, lookup, read time)
//! - `catalog`: Product records, lookups, filters and priority ordering
//!
//! # Usage
//!
//! ```rust,ignore
//! use medsite::{Catalog, Collection, ContentRepository};
//!
//! let blog = ContentRepository::open(Collection::Blog)?;
//! for post in blog.list_metadata()? {
//!     println!("{} ({})", post.title, post.read_time);
//! }
//!
//! let catalog = Catalog::builtin()?;
//! let related = catalog.related_default("ge-revolution-evo");
//! ```

pub mod catalog;
pub mod config;
pub mod content;

// Re-export main types at crate root for convenience
pub use catalog::{
    order_by_priority, Availability, Brand, Catalog, CatalogError, Category, Condition, Product,
    ProductFilter,
};
pub use content::{Collection, ContentError, ContentRepository, Document, DocumentMetadata, ReadTime};
