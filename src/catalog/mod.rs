//! Product catalog for equipment pages.
//!
//! The catalog is the concatenation of per-category sub-lists, assembled
//! once and then only read. Build it at startup and hand it to whatever
//! needs it:
//!
//! ```rust,ignore
//! use medsite::catalog::{Catalog, ProductFilter, Brand};
//!
//! let catalog = Catalog::builtin()?;
//! let page = catalog.filter_ordered(
//!     &ProductFilter::new().brand(Brand::GeHealthcare).subcategory("128-slice"),
//!     &["ge-revolution-evo"],
//! );
//! ```

pub mod data;
pub mod index;
pub mod priority;
pub mod product;

use thiserror::Error;

pub use index::{Catalog, ProductFilter, RELATED_LIMIT};
pub use priority::order_by_priority;
pub use product::{
    Availability, Brand, Category, Condition, Faq, Image, Product, Specification, UnknownLabel,
};

/// Errors raised while assembling a catalog from data files
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse product list {list}: {source}")]
    Parse {
        list: String,
        #[source]
        source: serde_yaml::Error,
    },
}
