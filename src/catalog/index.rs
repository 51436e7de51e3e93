//! The assembled product catalog and its lookups.
//!
//! A catalog is built once from category sub-lists and never changes
//! afterwards. Lookups never fail: absence is an empty result.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::priority::order_by_priority;
use super::product::{Availability, Brand, Category, Condition, Product};

/// Number of related products shown on a product page
pub const RELATED_LIMIT: usize = 3;

/// Immutable, ordered product list with an id index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

/// Attribute predicates; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub brand: Option<Brand>,
    pub category: Option<Category>,
    pub subcategory: Option<String>,
    pub condition: Option<Condition>,
    pub availability: Option<Availability>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: Brand) -> Self {
        self.brand = Some(brand);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// True when `product` satisfies every set predicate
    pub fn matches(&self, product: &Product) -> bool {
        self.brand.map_or(true, |b| product.brand == b)
            && self.category.map_or(true, |c| product.category == c)
            && self
                .subcategory
                .as_deref()
                .map_or(true, |s| product.subcategory.as_deref() == Some(s))
            && self.condition.map_or(true, |c| product.condition == c)
            && self.availability.map_or(true, |a| product.availability == a)
    }
}

impl Catalog {
    /// Assemble a catalog by concatenating `sublists` in order.
    ///
    /// Products without an authored `url_path` get their canonical path.
    /// Ids are expected to be unique; on a duplicate the first product wins
    /// lookups and a warning is logged.
    pub fn new<I, L>(sublists: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = Product>,
    {
        let mut products: Vec<Product> = sublists.into_iter().flatten().collect();
        let mut by_id = HashMap::with_capacity(products.len());

        for (pos, product) in products.iter_mut().enumerate() {
            if product.url_path.is_empty() {
                product.url_path = product.canonical_path();
            }
            if by_id.contains_key(&product.id) {
                warn!(id = %product.id, "Duplicate product id in catalog");
                continue;
            }
            by_id.insert(product.id.clone(), pos);
        }

        Self { products, by_id }
    }

    /// Every product, sub-list order then authored order
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact-match lookup by id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).and_then(|&pos| self.products.get(pos))
    }

    pub fn by_category(&self, category: Category) -> Vec<&Product> {
        self.filter(&ProductFilter::new().category(category))
    }

    pub fn by_brand(&self, brand: Brand) -> Vec<&Product> {
        self.filter(&ProductFilter::new().brand(brand))
    }

    /// Products of the brand labelled exactly `name`; empty for an unknown label
    pub fn by_brand_name(&self, name: &str) -> Vec<&Product> {
        match name.parse::<Brand>() {
            Ok(brand) => self.by_brand(brand),
            Err(e) => {
                debug!(error = %e, "Brand filter matches nothing");
                Vec::new()
            }
        }
    }

    /// Products in the category labelled exactly `name`; empty for an unknown label
    pub fn by_category_name(&self, name: &str) -> Vec<&Product> {
        match name.parse::<Category>() {
            Ok(category) => self.by_category(category),
            Err(e) => {
                debug!(error = %e, "Category filter matches nothing");
                Vec::new()
            }
        }
    }

    pub fn by_subcategory(&self, subcategory: &str) -> Vec<&Product> {
        self.filter(&ProductFilter::new().subcategory(subcategory))
    }

    /// Products matching `filter`, in catalog order
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products matching `filter`, with ids listed in `priority` first (in
    /// that order) and the remainder in catalog order
    pub fn filter_ordered<S: AsRef<str>>(
        &self,
        filter: &ProductFilter,
        priority: &[S],
    ) -> Vec<&Product> {
        let priority: Vec<&str> = priority.iter().map(|s| s.as_ref()).collect();
        order_by_priority(self.filter(filter), &priority, |p| p.id.as_str())
    }

    /// Up to `limit` related products of `id`, in authored order.
    ///
    /// Related ids that do not resolve are dropped before truncating.
    /// Unknown `id` or no related list yields an empty result.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };

        product
            .related_ids()
            .iter()
            .filter_map(|related| {
                let resolved = self.get(related);
                if resolved.is_none() {
                    debug!(id, related = %related, "Dropping dangling related product");
                }
                resolved
            })
            .take(limit)
            .collect()
    }

    /// `related` with the product-page limit
    pub fn related_default(&self, id: &str) -> Vec<&Product> {
        self.related(id, RELATED_LIMIT)
    }

    /// Case-insensitive substring search over names, model, brand and description
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p
                        .full_name
                        .as_deref()
                        .is_some_and(|n| n.to_lowercase().contains(&query))
                    || p.model.to_lowercase().contains(&query)
                    || p.brand.as_str().to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Distinct brands present, in order of first appearance
    pub fn brands(&self) -> Vec<Brand> {
        let mut brands = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand) {
                brands.push(product.brand);
            }
        }
        brands
    }

    /// Distinct subcategories within `category`, in order of first appearance
    pub fn subcategories(&self, category: Category) -> Vec<&str> {
        let mut subcategories = Vec::new();
        for product in self.by_category(category) {
            if let Some(sub) = product.subcategory.as_deref() {
                if !subcategories.contains(&sub) {
                    subcategories.push(sub);
                }
            }
        }
        subcategories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::Image;

    fn product(id: &str, brand: Brand, category: Category) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_uppercase(),
            full_name: None,
            brand,
            model: id.to_string(),
            category,
            subcategory: None,
            condition: Condition::Refurbished,
            description: format!("{id} system"),
            short_description: None,
            features: Vec::new(),
            specifications: Vec::new(),
            main_image: Image {
                src: format!("/images/{id}.jpg"),
                alt: String::new(),
            },
            gallery: None,
            availability: Availability::Available,
            faqs: Vec::new(),
            related_products: None,
            url_path: String::new(),
        }
    }

    fn with_related(mut p: Product, related: &[&str]) -> Product {
        p.related_products = Some(related.iter().map(|s| s.to_string()).collect());
        p
    }

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn sample() -> Catalog {
        Catalog::new([
            vec![
                product("ct-a", Brand::GeHealthcare, Category::Ct),
                product("ct-b", Brand::Siemens, Category::Ct),
            ],
            vec![
                product("mri-a", Brand::GeHealthcare, Category::Mri),
                product("mri-b", Brand::Philips, Category::Mri),
            ],
        ])
    }

    #[test]
    fn test_concatenation_order() {
        let catalog = sample();
        let all: Vec<_> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(all, vec!["ct-a", "ct-b", "mri-a", "mri-b"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_get() {
        let catalog = sample();
        assert_eq!(catalog.get("mri-b").unwrap().brand, Brand::Philips);
        assert!(catalog.get("MRI-B").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_url_path_filled_in() {
        let catalog = sample();
        assert_eq!(
            catalog.get("ct-a").unwrap().url_path,
            "/products/ct-scanners/ct-a"
        );

        let mut authored = product("x", Brand::Canon, Category::XRay);
        authored.url_path = "/legacy/x".to_string();
        let catalog = Catalog::new([vec![authored]]);
        assert_eq!(catalog.get("x").unwrap().url_path, "/legacy/x");
    }

    #[test]
    fn test_duplicate_id_first_wins() {
        let mut second = product("dup", Brand::Philips, Category::Mri);
        second.name = "Second".to_string();
        let catalog = Catalog::new([
            vec![product("dup", Brand::Canon, Category::Ct)],
            vec![second],
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("dup").unwrap().brand, Brand::Canon);
    }

    #[test]
    fn test_by_brand_and_category() {
        let catalog = sample();
        assert_eq!(
            ids(&catalog.by_brand(Brand::GeHealthcare)),
            vec!["ct-a", "mri-a"]
        );
        assert_eq!(ids(&catalog.by_category(Category::Mri)), vec!["mri-a", "mri-b"]);
        assert!(catalog.by_category(Category::Mammography).is_empty());
        assert!(catalog.by_brand_name("Acme Imaging").is_empty());
        assert_eq!(ids(&catalog.by_brand_name("Philips")), vec!["mri-b"]);
    }

    #[test]
    fn test_by_category_name() {
        let catalog = sample();
        assert_eq!(ids(&catalog.by_category_name("MRI")), vec!["mri-a", "mri-b"]);
        assert_eq!(ids(&catalog.by_category_name("CT")), vec!["ct-a", "ct-b"]);
        assert!(catalog.by_category_name("mri").is_empty());
        assert!(catalog.by_category_name("Scanners").is_empty());
        assert!(catalog.by_category_name("Mammography").is_empty());
    }

    #[test]
    fn test_related_skips_dangling_and_truncates() {
        let catalog = Catalog::new([vec![
            with_related(
                product("hub", Brand::GeHealthcare, Category::Ct),
                &["r1", "gone-1", "r2", "gone-2", "r3", "r4"],
            ),
            product("r1", Brand::GeHealthcare, Category::Ct),
            product("r2", Brand::GeHealthcare, Category::Ct),
            product("r3", Brand::GeHealthcare, Category::Ct),
            product("r4", Brand::GeHealthcare, Category::Ct),
        ]]);

        assert_eq!(ids(&catalog.related_default("hub")), vec!["r1", "r2", "r3"]);
        assert_eq!(ids(&catalog.related("hub", 1)), vec!["r1"]);
        assert!(catalog.related("hub", 0).is_empty());
        assert_eq!(catalog.related("hub", 10).len(), 4);
    }

    #[test]
    fn test_related_empty_cases() {
        let catalog = sample();
        assert!(catalog.related("missing", 3).is_empty());
        assert!(catalog.related("ct-a", 3).is_empty());
    }

    #[test]
    fn test_filter_ordered() {
        let mut a = product("a", Brand::GeHealthcare, Category::Ct);
        let mut b = product("b", Brand::GeHealthcare, Category::Ct);
        let mut c = product("c", Brand::GeHealthcare, Category::Ct);
        let mut d = product("d", Brand::GeHealthcare, Category::Ct);
        let mut other = product("other", Brand::GeHealthcare, Category::Ct);
        for p in [&mut a, &mut b, &mut c, &mut d] {
            p.subcategory = Some("64-slice".to_string());
        }
        other.subcategory = Some("16-slice".to_string());
        let catalog = Catalog::new([vec![a, other, b, c, d]]);

        let filter = ProductFilter::new()
            .brand(Brand::GeHealthcare)
            .subcategory("64-slice");
        let ordered = catalog.filter_ordered(&filter, &["c", "a", "other"]);
        assert_eq!(ids(&ordered), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_search() {
        let catalog = sample();
        assert_eq!(ids(&catalog.search("philips")), vec!["mri-b"]);
        assert_eq!(catalog.search("SYSTEM").len(), 4);
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_facets() {
        let mut catalog_products = vec![
            product("a", Brand::Siemens, Category::Mri),
            product("b", Brand::GeHealthcare, Category::Mri),
            product("c", Brand::Siemens, Category::Mri),
        ];
        catalog_products[0].subcategory = Some("3T".to_string());
        catalog_products[1].subcategory = Some("1.5T".to_string());
        catalog_products[2].subcategory = Some("3T".to_string());
        let catalog = Catalog::new([catalog_products]);

        assert_eq!(catalog.brands(), vec![Brand::Siemens, Brand::GeHealthcare]);
        assert_eq!(catalog.subcategories(Category::Mri), vec!["3T", "1.5T"]);
        assert!(catalog.subcategories(Category::Ct).is_empty());
    }
}
