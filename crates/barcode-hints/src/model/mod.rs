//! Data model types for encoding hints.
//!
//! - Keys (the closed set of hint identifiers)
//! - Values (the tagged value each key holds)
//! - Dimensions (size constraints)

pub mod dimension;
pub mod key;
pub mod value;

pub use dimension::Dimension;
pub use key::{HintKey, ValueKind};
pub use value::{HintType, HintValue};
