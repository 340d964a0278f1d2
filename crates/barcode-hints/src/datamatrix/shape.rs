//! Data Matrix symbol shape preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::trim_field;
use crate::error::ConversionError;
use crate::model::ValueKind;

/// Preferred geometric shape of a Data Matrix symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolShapeHint {
    /// No preference; the encoder picks the smallest fitting symbol.
    ForceNone,
    /// Only square symbols.
    ForceSquare,
    /// Only rectangular symbols.
    ForceRectangle,
}

impl SymbolShapeHint {
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolShapeHint::ForceNone => "FORCE_NONE",
            SymbolShapeHint::ForceSquare => "FORCE_SQUARE",
            SymbolShapeHint::ForceRectangle => "FORCE_RECTANGLE",
        }
    }
}

impl fmt::Display for SymbolShapeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolShapeHint {
    type Err = ConversionError;

    /// Parses a shape name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = trim_field(s);
        [
            SymbolShapeHint::ForceNone,
            SymbolShapeHint::ForceSquare,
            SymbolShapeHint::ForceRectangle,
        ]
        .into_iter()
        .find(|shape| shape.as_str().eq_ignore_ascii_case(name))
        .ok_or_else(|| ConversionError::InvalidValue {
            kind: ValueKind::SymbolShape,
            input: s.to_string(),
        })
    }
}
