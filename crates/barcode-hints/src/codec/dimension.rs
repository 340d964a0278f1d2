//! The `"<height>x<width>"` dimension token.
//!
//! ```text
//! token  = height "x" width [ "x" ignored ]*
//! height = integer
//! width  = integer
//! ```
//!
//! Height comes first. The separator is a single lowercase `x`; every `x`
//! splits, and segments after the second are ignored.

use tracing::debug;

use crate::codec::trim_field;
use crate::error::ConversionError;
use crate::model::Dimension;

/// Separator between the height and width segments.
pub const SEPARATOR: char = 'x';

/// A pure, bidirectional mapping between a value and its text form.
///
/// Converters are registered statically where a text surface needs them;
/// there is no runtime capability query.
pub trait TextConverter {
    type Value;

    /// Formats a value. Always succeeds.
    fn to_text(&self, value: &Self::Value) -> String;

    /// Parses text, producing no value on failure.
    fn from_text(&self, text: &str) -> Result<Self::Value, ConversionError>;
}

/// Converter for [`Dimension`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DimensionConverter;

impl TextConverter for DimensionConverter {
    type Value = Dimension;

    fn to_text(&self, value: &Dimension) -> String {
        format_dimension(value)
    }

    fn from_text(&self, text: &str) -> Result<Dimension, ConversionError> {
        parse_dimension(text)
    }
}

/// Formats a dimension as `"<height>x<width>"`.
pub fn format_dimension(dim: &Dimension) -> String {
    format!("{}{}{}", dim.height(), SEPARATOR, dim.width())
}

/// Parses a `"<height>x<width>"` token.
///
/// Each segment may carry a sign and surrounding ASCII whitespace.
pub fn parse_dimension(text: &str) -> Result<Dimension, ConversionError> {
    let mut segments = text.split(SEPARATOR);
    let (Some(height), Some(width)) = (segments.next(), segments.next()) else {
        debug!(input = text, "dimension token has no separator");
        return Err(ConversionError::MissingSeparator {
            input: text.to_string(),
        });
    };

    let height = parse_segment(text, "height", height)?;
    let width = parse_segment(text, "width", width)?;
    Ok(Dimension::new(width, height))
}

fn parse_segment(input: &str, field: &'static str, segment: &str) -> Result<i32, ConversionError> {
    trim_field(segment).parse::<i32>().map_err(|_| {
        debug!(input, field, segment, "dimension segment is not an integer");
        ConversionError::InvalidInteger {
            field,
            segment: segment.to_string(),
            input: input.to_string(),
        }
    })
}
