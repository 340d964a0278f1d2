//! Data Matrix specific hint types and options.

pub mod encodation;
pub mod options;
pub mod shape;

pub use options::{DatamatrixEncodingOptions, DATAMATRIX_PROPERTIES};
pub use shape::SymbolShapeHint;
