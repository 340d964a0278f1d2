//! Typed encoding-hint options for two-dimensional barcode encoders.
//!
//! Encoders share a loosely-typed [`HintStore`]: a map from a closed set of
//! [`HintKey`]s to tagged [`HintValue`]s. This crate layers typed, optional
//! properties on top of it and provides the text forms editing surfaces use.
//!
//! # Quick Start
//!
//! ```rust
//! use barcode_hints::datamatrix::{DatamatrixEncodingOptions, SymbolShapeHint};
//! use barcode_hints::{Dimension, HintKey, HintOptions, HintStore, HintValue};
//!
//! let mut hints = HintStore::new();
//! let mut options = DatamatrixEncodingOptions::new(&mut hints);
//!
//! options.set_symbol_shape(Some(SymbolShapeHint::ForceSquare));
//! options.set_text("min_size", "10x20").unwrap();
//! assert_eq!(options.min_size(), Some(Dimension::new(20, 10)));
//!
//! // The encoder reads the same store by key.
//! assert_eq!(
//!     hints.get(HintKey::MinSize),
//!     Some(&HintValue::Dimension(Dimension::new(20, 10)))
//! );
//! ```
//!
//! # Modules
//!
//! - [`model`]: Keys, values and [`Dimension`]
//! - [`store`]: The shared [`HintStore`]
//! - [`options`]: The [`HintOptions`] trait and the base facade
//! - [`datamatrix`]: Data Matrix facade, shape hint and encodation codes
//! - [`codec`]: Text forms, including the `"<height>x<width>"` token
//! - [`property`]: Static property metadata for editing hosts
//! - [`error`]: Error types
//!
//! # Unset values
//!
//! A property is unset exactly when its key is absent from the store. Writing
//! `None` removes the key; no null marker is ever stored.
//!
//! # Validation
//!
//! None beyond value kinds. Sizes, margins and encodation codes are stored as
//! given; the encoder rejects what it cannot honor.

pub mod codec;
pub mod datamatrix;
pub mod error;
pub mod model;
pub mod options;
pub mod property;
pub mod store;

// Re-export commonly used types at crate root
pub use codec::{format_dimension, parse_dimension, DimensionConverter, TextConverter};
pub use datamatrix::{DatamatrixEncodingOptions, SymbolShapeHint};
pub use error::{ConversionError, HintError, PropertyError};
pub use model::{Dimension, HintKey, HintType, HintValue, ValueKind};
pub use options::{EncodingOptions, HintOptions};
pub use property::{PropertyDescriptor, PropertyTable};
pub use store::HintStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
