//! Tagged hint values.
//!
//! The hint store keeps one [`HintValue`] per key. Facade properties move
//! between `HintValue` and their concrete Rust type through [`HintType`].

use std::fmt;

use serde::Serialize;

use crate::datamatrix::SymbolShapeHint;
use crate::model::{Dimension, ValueKind};

/// A value stored under a [`HintKey`](crate::HintKey).
///
/// Serializes as the bare inner value. There is no standalone `Deserialize`:
/// the kind of a value is only known from its key, so decoding goes through
/// [`HintStore`](crate::HintStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HintValue {
    Int(i32),
    Bool(bool),
    SymbolShape(SymbolShapeHint),
    Dimension(Dimension),
    Text(String),
}

impl HintValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            HintValue::Int(_) => ValueKind::Int,
            HintValue::Bool(_) => ValueKind::Bool,
            HintValue::Text(_) => ValueKind::Text,
            HintValue::Dimension(_) => ValueKind::Dimension,
            HintValue::SymbolShape(_) => ValueKind::SymbolShape,
        }
    }
}

impl fmt::Display for HintValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintValue::Int(v) => write!(f, "{}", v),
            HintValue::Bool(v) => write!(f, "{}", v),
            HintValue::Text(v) => f.write_str(v),
            HintValue::Dimension(v) => write!(f, "{}", v),
            HintValue::SymbolShape(v) => write!(f, "{}", v),
        }
    }
}

/// A Rust type that can be stored as a [`HintValue`].
pub trait HintType: Sized {
    /// The kind this type is stored as.
    const KIND: ValueKind;

    /// Extracts the value, or `None` if `value` is of another kind.
    fn from_hint(value: &HintValue) -> Option<Self>;

    /// Wraps the value.
    fn into_hint(self) -> HintValue;
}

impl HintType for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_hint(value: &HintValue) -> Option<Self> {
        match value {
            HintValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn into_hint(self) -> HintValue {
        HintValue::Int(self)
    }
}

impl HintType for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_hint(value: &HintValue) -> Option<Self> {
        match value {
            HintValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn into_hint(self) -> HintValue {
        HintValue::Bool(self)
    }
}

impl HintType for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_hint(value: &HintValue) -> Option<Self> {
        match value {
            HintValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }

    fn into_hint(self) -> HintValue {
        HintValue::Text(self)
    }
}

impl HintType for Dimension {
    const KIND: ValueKind = ValueKind::Dimension;

    fn from_hint(value: &HintValue) -> Option<Self> {
        match value {
            HintValue::Dimension(v) => Some(*v),
            _ => None,
        }
    }

    fn into_hint(self) -> HintValue {
        HintValue::Dimension(self)
    }
}

impl HintType for SymbolShapeHint {
    const KIND: ValueKind = ValueKind::SymbolShape;

    fn from_hint(value: &HintValue) -> Option<Self> {
        match value {
            HintValue::SymbolShape(v) => Some(*v),
            _ => None,
        }
    }

    fn into_hint(self) -> HintValue {
        HintValue::SymbolShape(self)
    }
}

impl From<i32> for HintValue {
    fn from(v: i32) -> Self {
        HintValue::Int(v)
    }
}

impl From<bool> for HintValue {
    fn from(v: bool) -> Self {
        HintValue::Bool(v)
    }
}

impl From<String> for HintValue {
    fn from(v: String) -> Self {
        HintValue::Text(v)
    }
}

impl From<&str> for HintValue {
    fn from(v: &str) -> Self {
        HintValue::Text(v.to_string())
    }
}

impl From<Dimension> for HintValue {
    fn from(v: Dimension) -> Self {
        HintValue::Dimension(v)
    }
}

impl From<SymbolShapeHint> for HintValue {
    fn from(v: SymbolShapeHint) -> Self {
        HintValue::SymbolShape(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(HintValue::Int(1).kind(), ValueKind::Int);
        assert_eq!(HintValue::from("UTF-8").kind(), ValueKind::Text);
        assert_eq!(HintValue::from(Dimension::new(1, 2)).kind(), ValueKind::Dimension);
        assert_eq!(
            HintValue::from(SymbolShapeHint::ForceSquare).kind(),
            ValueKind::SymbolShape
        );
    }

    #[test]
    fn test_from_hint_rejects_other_kinds() {
        let value = HintValue::Int(7);
        assert_eq!(i32::from_hint(&value), Some(7));
        assert_eq!(bool::from_hint(&value), None);
        assert_eq!(Dimension::from_hint(&value), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(HintValue::Dimension(Dimension::new(20, 10)).to_string(), "10x20");
        assert_eq!(HintValue::SymbolShape(SymbolShapeHint::ForceRectangle).to_string(), "FORCE_RECTANGLE");
        assert_eq!(HintValue::Bool(true).to_string(), "true");
    }
}
