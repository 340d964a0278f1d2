//! The shared hint store.
//!
//! One store holds the hints for one encode configuration. Facades write to
//! it through typed properties; encoders read it back by key.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::{DeserializeSeed, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::datamatrix::SymbolShapeHint;
use crate::error::HintError;
use crate::model::{Dimension, HintKey, HintType, HintValue, ValueKind};

/// Mapping from [`HintKey`] to [`HintValue`].
///
/// A key is either absent (the hint is unset) or holds a value of the key's
/// [`ValueKind`]. Absence is the only representation of "unset".
///
/// The store is not synchronized. Two writes are two independent map
/// operations; callers sharing a store across threads serialize access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HintStore {
    entries: FxHashMap<HintKey, HintValue>,
}

impl HintStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether a value is set for `key`.
    pub fn contains_key(&self, key: HintKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: HintKey) -> Option<&HintValue> {
        self.entries.get(&key)
    }

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// Fails without touching the store if the value's kind differs from the
    /// key's declared kind.
    pub fn insert(
        &mut self,
        key: HintKey,
        value: impl Into<HintValue>,
    ) -> Result<Option<HintValue>, HintError> {
        let value = value.into();
        let expected = key.value_kind();
        if value.kind() != expected {
            debug!(%key, %expected, actual = %value.kind(), "rejected hint of wrong kind");
            return Err(HintError::KindMismatch {
                key,
                expected,
                actual: value.kind(),
            });
        }
        trace!(%key, %value, "set hint");
        Ok(self.entries.insert(key, value))
    }

    /// Removes `key`, returning its value. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: HintKey) -> Option<HintValue> {
        let removed = self.entries.remove(&key);
        if removed.is_some() {
            trace!(%key, "unset hint");
        }
        removed
    }

    /// Removes every hint.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the set hints in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (HintKey, &HintValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    // =========================================================================
    // Typed access (used by the option facades)
    // =========================================================================

    /// Reads `key` as `T`. Absent keys read as `None`.
    pub(crate) fn get_typed<T: HintType>(&self, key: HintKey) -> Option<T> {
        debug_assert_eq!(T::KIND, key.value_kind(), "typed read of {key}");
        self.entries.get(&key).and_then(T::from_hint)
    }

    /// Stores a value already decoded as the key's kind.
    pub(crate) fn put(&mut self, key: HintKey, value: HintValue) {
        debug_assert_eq!(value.kind(), key.value_kind(), "write of {key}");
        trace!(%key, %value, "set hint");
        self.entries.insert(key, value);
    }

    /// Writes `Some(value)` under `key`, or removes `key` for `None`.
    pub(crate) fn set_typed<T: HintType>(&mut self, key: HintKey, value: Option<T>) {
        debug_assert_eq!(T::KIND, key.value_kind(), "typed write of {key}");
        match value {
            Some(value) => self.put(key, value.into_hint()),
            None => {
                self.remove(key);
            }
        }
    }
}

// =============================================================================
// Serialization
// =============================================================================

impl Serialize for HintStore {
    /// Serializes as a map ordered by key.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ordered: BTreeMap<&HintKey, &HintValue> = self.entries.iter().collect();
        ordered.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HintStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StoreVisitor)
    }
}

struct StoreVisitor;

impl<'de> Visitor<'de> for StoreVisitor {
    type Value = HintStore;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of hint keys to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HintStore, A::Error> {
        let mut store = HintStore::new();
        while let Some(key) = map.next_key::<HintKey>()? {
            let value = map.next_value_seed(KindSeed(key.value_kind()))?;
            if store.entries.insert(key, value).is_some() {
                return Err(serde::de::Error::custom(format_args!("duplicate hint {key}")));
            }
        }
        Ok(store)
    }
}

/// Decodes a value as the kind its key declares.
struct KindSeed(ValueKind);

impl<'de> DeserializeSeed<'de> for KindSeed {
    type Value = HintValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<HintValue, D::Error> {
        Ok(match self.0 {
            ValueKind::Int => HintValue::Int(i32::deserialize(deserializer)?),
            ValueKind::Bool => HintValue::Bool(bool::deserialize(deserializer)?),
            ValueKind::Text => HintValue::Text(String::deserialize(deserializer)?),
            ValueKind::Dimension => HintValue::Dimension(Dimension::deserialize(deserializer)?),
            ValueKind::SymbolShape => {
                HintValue::SymbolShape(SymbolShapeHint::deserialize(deserializer)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let mut store = HintStore::new();
        assert!(store.is_empty());

        let prev = store.insert(HintKey::Margin, 4).unwrap();
        assert_eq!(prev, None);
        assert!(store.contains_key(HintKey::Margin));
        assert_eq!(store.get(HintKey::Margin), Some(&HintValue::Int(4)));

        let prev = store.insert(HintKey::Margin, 2).unwrap();
        assert_eq!(prev, Some(HintValue::Int(4)));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove(HintKey::Margin), Some(HintValue::Int(2)));
        assert_eq!(store.remove(HintKey::Margin), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_wrong_kind() {
        let mut store = HintStore::new();
        store.insert(HintKey::MinSize, Dimension::new(10, 10)).unwrap();

        let err = store.insert(HintKey::MinSize, 10).unwrap_err();
        assert_eq!(
            err,
            HintError::KindMismatch {
                key: HintKey::MinSize,
                expected: ValueKind::Dimension,
                actual: ValueKind::Int,
            }
        );
        // The previous value survives.
        assert_eq!(
            store.get(HintKey::MinSize),
            Some(&HintValue::Dimension(Dimension::new(10, 10)))
        );
    }

    #[test]
    fn test_typed_access() {
        let mut store = HintStore::new();
        assert_eq!(store.get_typed::<Dimension>(HintKey::MaxSize), None);

        store.set_typed(HintKey::MaxSize, Some(Dimension::new(26, 12)));
        assert_eq!(store.get_typed::<Dimension>(HintKey::MaxSize), Some(Dimension::new(26, 12)));

        store.set_typed::<Dimension>(HintKey::MaxSize, None);
        assert!(!store.contains_key(HintKey::MaxSize));

        // Unsetting again is a no-op.
        store.set_typed::<Dimension>(HintKey::MaxSize, None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_iter_and_clear() {
        let mut store = HintStore::new();
        store.insert(HintKey::Width, 100).unwrap();
        store.insert(HintKey::PureBarcode, true).unwrap();

        let mut keys: Vec<HintKey> = store.iter().map(|(key, _)| key).collect();
        keys.sort();
        assert_eq!(keys, vec![HintKey::Width, HintKey::PureBarcode]);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut store = HintStore::new();
        store.insert(HintKey::DataMatrixShape, SymbolShapeHint::ForceSquare).unwrap();
        store.insert(HintKey::MinSize, Dimension::new(20, 10)).unwrap();
        store.insert(HintKey::CharacterSet, "UTF-8").unwrap();
        store.insert(HintKey::Gs1Format, false).unwrap();

        let json = serde_json::to_string(&store).unwrap();
        assert_eq!(
            json,
            r#"{"GS1_FORMAT":false,"CHARACTER_SET":"UTF-8","DATA_MATRIX_SHAPE":"FORCE_SQUARE","MIN_SIZE":"10x20"}"#
        );

        let back: HintStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn test_deserialize_checks_kind() {
        assert!(serde_json::from_str::<HintStore>(r#"{"MIN_SIZE":5}"#).is_err());
        assert!(serde_json::from_str::<HintStore>(r#"{"MIN_SIZE":"abc"}"#).is_err());
        assert!(serde_json::from_str::<HintStore>(r#"{"WIDTH":"wide"}"#).is_err());
        assert!(serde_json::from_str::<HintStore>(r#"{"UNKNOWN":1}"#).is_err());
    }

    #[test]
    fn test_deserialize_text_is_not_reinterpreted() {
        let store: HintStore = serde_json::from_str(r#"{"CHARACTER_SET":"FORCE_SQUARE"}"#).unwrap();
        assert_eq!(
            store.get(HintKey::CharacterSet),
            Some(&HintValue::Text("FORCE_SQUARE".to_string()))
        );
    }

    #[test]
    fn test_deserialize_duplicate_key() {
        assert!(serde_json::from_str::<HintStore>(r#"{"WIDTH":1,"WIDTH":2}"#).is_err());
    }
}
