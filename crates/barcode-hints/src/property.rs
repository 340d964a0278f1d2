//! Static property metadata for text-based editing surfaces.
//!
//! Each facade property has a [`PropertyDescriptor`] naming the property, the
//! group it is shown under, a human-readable description, and the hint key it
//! is stored under. The key's [`ValueKind`](crate::ValueKind) selects the text
//! codec, so an editing host needs no per-type knowledge.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::error::PropertyError;
use crate::model::HintKey;

/// Metadata for one facade property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name, matching the facade getter.
    pub name: &'static str,
    /// Display group.
    pub category: &'static str,
    pub description: &'static str,
    /// Hint key the property is stored under.
    pub key: HintKey,
}

/// An ordered set of descriptors with lookup by name.
#[derive(Debug)]
pub struct PropertyTable {
    descriptors: Vec<PropertyDescriptor>,
    by_name: FxHashMap<&'static str, usize>,
}

impl PropertyTable {
    /// Builds a table. Later descriptors with a repeated name are ignored.
    pub fn new(descriptors: Vec<PropertyDescriptor>) -> Self {
        let mut by_name = FxHashMap::with_capacity_and_hasher(descriptors.len(), Default::default());
        for (index, descriptor) in descriptors.iter().enumerate() {
            by_name.entry(descriptor.name).or_insert(index);
        }
        Self {
            descriptors,
            by_name,
        }
    }

    /// Finds a descriptor by exact name.
    pub fn find(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.by_name.get(name).map(|&index| &self.descriptors[index])
    }

    /// Finds a descriptor by name, failing with [`PropertyError::UnknownProperty`].
    pub fn lookup(&self, name: &str) -> Result<&PropertyDescriptor, PropertyError> {
        self.find(name).ok_or_else(|| PropertyError::UnknownProperty {
            name: name.to_string(),
        })
    }

    /// Iterates over the descriptors in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

pub const CATEGORY_STANDARD: &str = "Standard";
pub const CATEGORY_OUTPUT: &str = "Output options";

/// Descriptors shared by every encoder.
pub const BASE_DESCRIPTORS: [PropertyDescriptor; 6] = [
    PropertyDescriptor {
        name: "width",
        category: CATEGORY_OUTPUT,
        description: "Specifies the preferred width of the output in pixels.",
        key: HintKey::Width,
    },
    PropertyDescriptor {
        name: "height",
        category: CATEGORY_OUTPUT,
        description: "Specifies the preferred height of the output in pixels.",
        key: HintKey::Height,
    },
    PropertyDescriptor {
        name: "margin",
        category: CATEGORY_OUTPUT,
        description: "Specifies the margin around the symbol. Its meaning depends on the format.",
        key: HintKey::Margin,
    },
    PropertyDescriptor {
        name: "pure_barcode",
        category: CATEGORY_OUTPUT,
        description: "Don't put the content string into the output image.",
        key: HintKey::PureBarcode,
    },
    PropertyDescriptor {
        name: "gs1_format",
        category: CATEGORY_STANDARD,
        description: "Specifies whether the data should be encoded to the GS1 standard.",
        key: HintKey::Gs1Format,
    },
    PropertyDescriptor {
        name: "character_set",
        category: CATEGORY_STANDARD,
        description: "Specifies the character set used to encode text content.",
        key: HintKey::CharacterSet,
    },
];

lazy_static! {
    /// Table of the base encoder properties.
    pub static ref BASE_PROPERTIES: PropertyTable = PropertyTable::new(BASE_DESCRIPTORS.to_vec());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let descriptor = BASE_PROPERTIES.find("margin").unwrap();
        assert_eq!(descriptor.key, HintKey::Margin);
        assert!(BASE_PROPERTIES.find("Margin").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        let err = BASE_PROPERTIES.lookup("nope").unwrap_err();
        assert_eq!(
            err,
            PropertyError::UnknownProperty {
                name: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_order_preserved() {
        let names: Vec<&str> = BASE_PROPERTIES.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            ["width", "height", "margin", "pure_barcode", "gs1_format", "character_set"]
        );
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let table = PropertyTable::new(vec![
            BASE_DESCRIPTORS[0],
            PropertyDescriptor {
                key: HintKey::Height,
                ..BASE_DESCRIPTORS[0]
            },
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.find("width").unwrap().key, HintKey::Width);
    }
}
