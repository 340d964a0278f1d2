//! Width/height size constraint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::dimension::{format_dimension, parse_dimension};
use crate::error::ConversionError;

/// An immutable width/height pair, measured in symbol modules.
///
/// Negative values are not rejected here; the encoder decides what a size
/// constraint means.
///
/// The textual form is `"<height>x<width>"`. Note the field order: height
/// comes first even though the constructor takes width first.
///
/// ```rust
/// use barcode_hints::Dimension;
///
/// let dim = Dimension::new(20, 10);
/// assert_eq!(dim.to_string(), "10x20");
/// assert_eq!("10x20".parse::<Dimension>().unwrap(), dim);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    width: i32,
    height: i32,
}

impl Dimension {
    /// Creates a dimension from width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_dimension(self))
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimension(s)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
