//! Text forms for every hint value kind.

use tracing::debug;

use crate::codec::dimension::parse_dimension;
use crate::codec::trim_field;
use crate::datamatrix::SymbolShapeHint;
use crate::error::ConversionError;
use crate::model::{HintValue, ValueKind};

/// Formats a value in the text form accepted by [`parse_value`].
pub fn format_value(value: &HintValue) -> String {
    value.to_string()
}

/// Parses text as a value of the given kind.
///
/// - `Int`: decimal `i32`, surrounding whitespace ignored
/// - `Bool`: `true` / `false`, any ASCII case
/// - `Text`: taken verbatim
/// - `Dimension`: `"<height>x<width>"`
/// - `SymbolShape`: `FORCE_NONE`, `FORCE_SQUARE` or `FORCE_RECTANGLE`, any ASCII case
pub fn parse_value(kind: ValueKind, text: &str) -> Result<HintValue, ConversionError> {
    match kind {
        ValueKind::Int => trim_field(text)
            .parse::<i32>()
            .map(HintValue::Int)
            .map_err(|_| invalid(kind, text)),
        ValueKind::Bool => {
            let text = trim_field(text);
            if text.eq_ignore_ascii_case("true") {
                Ok(HintValue::Bool(true))
            } else if text.eq_ignore_ascii_case("false") {
                Ok(HintValue::Bool(false))
            } else {
                Err(invalid(kind, text))
            }
        }
        ValueKind::Text => Ok(HintValue::Text(text.to_string())),
        ValueKind::Dimension => parse_dimension(text).map(HintValue::Dimension),
        ValueKind::SymbolShape => text.parse::<SymbolShapeHint>().map(HintValue::SymbolShape),
    }
}

fn invalid(kind: ValueKind, text: &str) -> ConversionError {
    debug!(%kind, input = text, "rejected hint value text");
    ConversionError::InvalidValue {
        kind,
        input: text.to_string(),
    }
}
