//! Typed option facades over a [`HintStore`].
//!
//! A facade owns no data. Every property reads and writes one hint key:
//!
//! - reading an absent key yields `None`
//! - writing `Some(v)` stores `v`, replacing any previous value
//! - writing `None` removes the key (a no-op when already absent)
//!
//! Facades never validate values. Whether a size, margin or encodation is
//! usable is decided by the encoder that later reads the store.
//!
//! # Example
//!
//! ```rust
//! use barcode_hints::{EncodingOptions, HintKey, HintOptions, HintStore};
//!
//! let mut hints = HintStore::new();
//! let mut options = EncodingOptions::new(&mut hints);
//! options.set_margin(Some(2));
//! options.set_margin(None);
//! assert_eq!(options.margin(), None);
//! assert!(!hints.contains_key(HintKey::Margin));
//! ```

use crate::codec::value::{format_value, parse_value};
use crate::error::PropertyError;
use crate::model::HintKey;
use crate::property::{PropertyTable, BASE_PROPERTIES};
use crate::store::HintStore;

/// Access to a hint store through typed properties.
///
/// Implemented by every per-format facade. Provides the properties all
/// encoders share and a name-based text surface for editing hosts.
pub trait HintOptions {
    /// The backing store.
    fn hints(&self) -> &HintStore;

    fn hints_mut(&mut self) -> &mut HintStore;

    /// Descriptors for every property this facade exposes.
    fn properties(&self) -> &'static PropertyTable {
        &BASE_PROPERTIES
    }

    // =========================================================================
    // Shared properties
    // =========================================================================

    fn width(&self) -> Option<i32> {
        self.hints().get_typed(HintKey::Width)
    }

    fn set_width(&mut self, width: Option<i32>) {
        self.hints_mut().set_typed(HintKey::Width, width);
    }

    fn height(&self) -> Option<i32> {
        self.hints().get_typed(HintKey::Height)
    }

    fn set_height(&mut self, height: Option<i32>) {
        self.hints_mut().set_typed(HintKey::Height, height);
    }

    /// Quiet-zone margin. Units depend on the format.
    fn margin(&self) -> Option<i32> {
        self.hints().get_typed(HintKey::Margin)
    }

    fn set_margin(&mut self, margin: Option<i32>) {
        self.hints_mut().set_typed(HintKey::Margin, margin);
    }

    fn pure_barcode(&self) -> Option<bool> {
        self.hints().get_typed(HintKey::PureBarcode)
    }

    fn set_pure_barcode(&mut self, pure: Option<bool>) {
        self.hints_mut().set_typed(HintKey::PureBarcode, pure);
    }

    fn gs1_format(&self) -> Option<bool> {
        self.hints().get_typed(HintKey::Gs1Format)
    }

    fn set_gs1_format(&mut self, gs1: Option<bool>) {
        self.hints_mut().set_typed(HintKey::Gs1Format, gs1);
    }

    fn character_set(&self) -> Option<String> {
        self.hints().get_typed(HintKey::CharacterSet)
    }

    fn set_character_set(&mut self, charset: Option<String>) {
        self.hints_mut().set_typed(HintKey::CharacterSet, charset);
    }

    // =========================================================================
    // Text surface
    // =========================================================================

    /// Returns the named property in text form, or `None` if unset.
    fn get_text(&self, name: &str) -> Result<Option<String>, PropertyError> {
        let descriptor = self.properties().lookup(name)?;
        Ok(self.hints().get(descriptor.key).map(format_value))
    }

    /// Parses `text` and stores it in the named property.
    ///
    /// The store is left untouched when parsing fails.
    fn set_text(&mut self, name: &str, text: &str) -> Result<(), PropertyError> {
        let descriptor = self.properties().lookup(name)?;
        let value = parse_value(descriptor.key.value_kind(), text).map_err(|source| {
            PropertyError::Conversion {
                name: descriptor.name,
                source,
            }
        })?;
        self.hints_mut().put(descriptor.key, value);
        Ok(())
    }

    /// Unsets the named property.
    fn reset(&mut self, name: &str) -> Result<(), PropertyError> {
        let descriptor = self.properties().lookup(name)?;
        self.hints_mut().remove(descriptor.key);
        Ok(())
    }
}

/// Facade for the options every encoder understands.
#[derive(Debug)]
pub struct EncodingOptions<'a> {
    hints: &'a mut HintStore,
}

impl<'a> EncodingOptions<'a> {
    /// Creates a facade over `hints`.
    pub fn new(hints: &'a mut HintStore) -> Self {
        Self { hints }
    }
}

impl HintOptions for EncodingOptions<'_> {
    fn hints(&self) -> &HintStore {
        self.hints
    }

    fn hints_mut(&mut self) -> &mut HintStore {
        self.hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionError;
    use crate::model::{HintValue, ValueKind};

    #[test]
    fn test_unset_by_default() {
        let mut hints = HintStore::new();
        let options = EncodingOptions::new(&mut hints);
        assert_eq!(options.width(), None);
        assert_eq!(options.height(), None);
        assert_eq!(options.margin(), None);
        assert_eq!(options.pure_barcode(), None);
        assert_eq!(options.gs1_format(), None);
        assert_eq!(options.character_set(), None);
    }

    #[test]
    fn test_roundtrip_and_unset() {
        let mut hints = HintStore::new();
        let mut options = EncodingOptions::new(&mut hints);

        options.set_width(Some(300));
        options.set_height(Some(200));
        options.set_pure_barcode(Some(true));
        options.set_character_set(Some("UTF-8".to_string()));

        assert_eq!(options.width(), Some(300));
        assert_eq!(options.height(), Some(200));
        assert_eq!(options.pure_barcode(), Some(true));
        assert_eq!(options.character_set().as_deref(), Some("UTF-8"));
        assert_eq!(options.hints().len(), 4);

        options.set_width(None);
        assert_eq!(options.width(), None);
        assert_eq!(options.hints().len(), 3);

        assert!(!hints.contains_key(HintKey::Width));
        assert_eq!(hints.get(HintKey::Height), Some(&HintValue::Int(200)));
    }

    #[test]
    fn test_reads_raw_writes() {
        let mut hints = HintStore::new();
        hints.insert(HintKey::Gs1Format, true).unwrap();

        let options = EncodingOptions::new(&mut hints);
        assert_eq!(options.gs1_format(), Some(true));
    }

    #[test]
    fn test_text_surface() {
        let mut hints = HintStore::new();
        let mut options = EncodingOptions::new(&mut hints);

        options.set_text("margin", "5").unwrap();
        assert_eq!(options.margin(), Some(5));
        assert_eq!(options.get_text("margin").unwrap().as_deref(), Some("5"));

        options.set_text("pure_barcode", "True").unwrap();
        assert_eq!(options.pure_barcode(), Some(true));

        options.reset("margin").unwrap();
        assert_eq!(options.get_text("margin").unwrap(), None);

        // Resetting an unset property is a no-op.
        options.reset("margin").unwrap();
        assert_eq!(options.hints().len(), 1);
    }

    #[test]
    fn test_set_text_stores_parsed_kind() {
        let mut hints = HintStore::new();
        let mut options = EncodingOptions::new(&mut hints);

        // Empty text is a value for text properties, not an unset.
        options.set_text("character_set", "").unwrap();
        assert_eq!(options.character_set().as_deref(), Some(""));

        options.set_text("width", "\t64 ").unwrap();
        assert_eq!(hints.get(HintKey::Width), Some(&HintValue::Int(64)));
        assert_eq!(hints.get(HintKey::CharacterSet), Some(&HintValue::Text(String::new())));
    }

    #[test]
    fn test_text_surface_errors() {
        let mut hints = HintStore::new();
        let mut options = EncodingOptions::new(&mut hints);
        options.set_margin(Some(1));

        let err = options.set_text("margin", "wide").unwrap_err();
        assert_eq!(
            err,
            PropertyError::Conversion {
                name: "margin",
                source: ConversionError::InvalidValue {
                    kind: ValueKind::Int,
                    input: "wide".to_string(),
                },
            }
        );
        assert_eq!(options.margin(), Some(1));

        // Data Matrix properties are not part of the base facade.
        assert!(matches!(
            options.set_text("min_size", "10x10"),
            Err(PropertyError::UnknownProperty { .. })
        ));
        assert!(matches!(
            options.get_text("min_size"),
            Err(PropertyError::UnknownProperty { .. })
        ));
    }
}
