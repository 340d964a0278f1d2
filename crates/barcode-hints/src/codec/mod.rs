//! Text encoding/decoding of hint values.
//!
//! Text-based editing surfaces (property grids, config files, command lines)
//! cannot manipulate structured values directly. This module maps each value
//! kind to a compact textual form and back.

pub mod dimension;
pub mod value;

/// Strips the whitespace an integer or name field may be padded with: tab,
/// line feed, vertical tab, form feed, carriage return and space. Other
/// Unicode whitespace is kept and fails the parse.
pub(crate) fn trim_field(text: &str) -> &str {
    text.trim_matches(|c: char| matches!(c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '))
}

pub use dimension::{format_dimension, parse_dimension, DimensionConverter, TextConverter};
pub use value::{format_value, parse_value};
