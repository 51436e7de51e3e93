//! Product records and their enumerated attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a closed string enumeration with serde, Display and FromStr
/// all agreeing on the authored label.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $label)] $variant),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The authored label
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(UnknownLabel {
                        kind: stringify!($name),
                        label: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// A label that is not part of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {label}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

labelled_enum! {
    /// Manufacturer
    pub enum Brand {
        GeHealthcare => "GE Healthcare",
        Siemens => "Siemens Healthineers",
        Philips => "Philips",
        Canon => "Canon Medical",
        Fujifilm => "Fujifilm",
        Hologic => "Hologic",
        Samsung => "Samsung",
    }
}

labelled_enum! {
    /// Equipment category
    pub enum Category {
        Ct => "CT",
        Mri => "MRI",
        Ultrasound => "Ultrasound",
        XRay => "X-Ray",
        Mammography => "Mammography",
        CArm => "C-Arm",
    }
}

labelled_enum! {
    pub enum Condition {
        Refurbished => "refurbished",
        BrandNew => "brand-new",
        PreOwned => "pre-owned",
    }
}

labelled_enum! {
    /// Display label only; no transitions between states
    pub enum Availability {
        Available => "Available",
        ComingSoon => "Coming Soon",
        OutOfStock => "Out of Stock",
        OnRequest => "On Request",
    }
}

impl Category {
    /// URL segment for category pages
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Ct => "ct-scanners",
            Category::Mri => "mri-systems",
            Category::Ultrasound => "ultrasound",
            Category::XRay => "x-ray",
            Category::Mammography => "mammography",
            Category::CArm => "c-arms",
        }
    }
}

/// One row of a specification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Image reference with alt text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// A sellable equipment model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique key, also the last URL segment
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub brand: Brand,
    pub model: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub condition: Condition,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Display order is significant
    #[serde(default)]
    pub specifications: Vec<Specification>,
    pub main_image: Image,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<Image>>,
    pub availability: Availability,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    /// Ids of other catalog products, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_products: Option<Vec<String>>,
    /// Canonical path; filled in at catalog assembly when not authored
    #[serde(default)]
    pub url_path: String,
}

impl Product {
    /// `/products/<category-slug>/<id>`
    pub fn canonical_path(&self) -> String {
        format!("/products/{}/{}", self.category.slug(), self.id)
    }

    /// Full name if authored, otherwise the short name
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.name)
    }

    /// Related ids as authored, empty when none
    pub fn related_ids(&self) -> &[String] {
        self.related_products.as_deref().unwrap_or(&[])
    }
}
