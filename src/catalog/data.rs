//! Product sub-lists: the embedded defaults and external YAML files.

use std::fs;
use std::path::Path;

use super::index::Catalog;
use super::product::Product;
use super::CatalogError;

/// Embedded sub-lists, in catalog order
const BUILTIN_LISTS: [(&str, &str); 4] = [
    ("ct", include_str!("../../data/products/ct.yaml")),
    ("mri", include_str!("../../data/products/mri.yaml")),
    ("ultrasound", include_str!("../../data/products/ultrasound.yaml")),
    ("xray", include_str!("../../data/products/xray.yaml")),
];

/// Parse one YAML sub-list (a sequence of products)
pub fn parse_list(name: &str, yaml: &str) -> Result<Vec<Product>, CatalogError> {
    serde_yaml::from_str(yaml).map_err(|source| CatalogError::Parse {
        list: name.to_string(),
        source,
    })
}

impl Catalog {
    /// The catalog shipped with the site
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_lists(&BUILTIN_LISTS)
    }

    /// Assemble from named YAML sub-lists, in the given order
    pub fn from_yaml_lists(lists: &[(&str, &str)]) -> Result<Self, CatalogError> {
        let sublists = lists
            .iter()
            .map(|(name, yaml)| parse_list(name, yaml))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(sublists))
    }

    /// Assemble from every `*.yaml` / `*.yml` file in `dir`, in file-name order
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e == "yaml" || e == "yml");
            if is_yaml && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut sublists = Vec::with_capacity(paths.len());
        for path in &paths {
            let yaml = fs::read_to_string(path)?;
            sublists.push(parse_list(&path.display().to_string(), &yaml)?);
        }

        Ok(Self::new(sublists))
    }
}
