//! Error types for hint storage and textual conversion.

use thiserror::Error;

use crate::model::{HintKey, ValueKind};

/// Error during text to value conversion.
///
/// No value is produced when conversion fails; callers never see a partially
/// populated [`Dimension`](crate::Dimension).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("unsupported conversion: {input:?} is not a <height>x<width> token")]
    MissingSeparator { input: String },

    #[error("unsupported conversion: {field} segment {segment:?} in {input:?} is not an integer")]
    InvalidInteger {
        field: &'static str,
        segment: String,
        input: String,
    },

    #[error("unsupported conversion: {input:?} is not a valid {kind}")]
    InvalidValue { kind: ValueKind, input: String },
}

/// Error raised by the hint store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("hint {key} expects a {expected} value, got {actual}")]
    KindMismatch {
        key: HintKey,
        expected: ValueKind,
        actual: ValueKind,
    },
}

/// Error raised by the named-property text surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("unknown property {name:?}")]
    UnknownProperty { name: String },

    #[error("property {name}: {source}")]
    Conversion {
        name: &'static str,
        #[source]
        source: ConversionError,
    },
}
