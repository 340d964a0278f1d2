//! Hint keys and the value kind each key accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single encoding hint.
///
/// The set is closed: every key has exactly one [`ValueKind`], and the
/// [`HintStore`](crate::HintStore) refuses values of any other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HintKey {
    /// Preferred output width in pixels.
    Width,
    /// Preferred output height in pixels.
    Height,
    /// Quiet-zone margin around the symbol.
    Margin,
    /// Emit only the symbol, without human-readable text.
    PureBarcode,
    /// Content is GS1 formatted.
    Gs1Format,
    /// Character set used to encode text content.
    CharacterSet,
    /// Data Matrix symbol shape preference.
    DataMatrixShape,
    /// Minimum symbol size in modules.
    MinSize,
    /// Maximum symbol size in modules.
    MaxSize,
    /// Data Matrix default encodation mode.
    DataMatrixDefaultEncodation,
}

impl HintKey {
    /// Every key, in declaration order.
    pub const ALL: [HintKey; 10] = [
        HintKey::Width,
        HintKey::Height,
        HintKey::Margin,
        HintKey::PureBarcode,
        HintKey::Gs1Format,
        HintKey::CharacterSet,
        HintKey::DataMatrixShape,
        HintKey::MinSize,
        HintKey::MaxSize,
        HintKey::DataMatrixDefaultEncodation,
    ];

    /// Returns the kind of value this key holds.
    pub fn value_kind(self) -> ValueKind {
        match self {
            HintKey::Width
            | HintKey::Height
            | HintKey::Margin
            | HintKey::DataMatrixDefaultEncodation => ValueKind::Int,
            HintKey::PureBarcode | HintKey::Gs1Format => ValueKind::Bool,
            HintKey::CharacterSet => ValueKind::Text,
            HintKey::DataMatrixShape => ValueKind::SymbolShape,
            HintKey::MinSize | HintKey::MaxSize => ValueKind::Dimension,
        }
    }

    /// Returns the wire name of the key (e.g. `"MIN_SIZE"`).
    pub fn as_str(self) -> &'static str {
        match self {
            HintKey::Width => "WIDTH",
            HintKey::Height => "HEIGHT",
            HintKey::Margin => "MARGIN",
            HintKey::PureBarcode => "PURE_BARCODE",
            HintKey::Gs1Format => "GS1_FORMAT",
            HintKey::CharacterSet => "CHARACTER_SET",
            HintKey::DataMatrixShape => "DATA_MATRIX_SHAPE",
            HintKey::MinSize => "MIN_SIZE",
            HintKey::MaxSize => "MAX_SIZE",
            HintKey::DataMatrixDefaultEncodation => "DATA_MATRIX_DEFAULT_ENCODATION",
        }
    }
}

impl fmt::Display for HintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete type a hint value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Bool,
    Text,
    Dimension,
    SymbolShape,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "integer",
            ValueKind::Bool => "boolean",
            ValueKind::Text => "text",
            ValueKind::Dimension => "dimension",
            ValueKind::SymbolShape => "symbol shape",
        };
        f.write_str(name)
    }
}
