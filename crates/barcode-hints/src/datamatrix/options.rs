//! Typed options for the Data Matrix encoder.

use lazy_static::lazy_static;

use crate::datamatrix::SymbolShapeHint;
use crate::model::{Dimension, HintKey};
use crate::options::HintOptions;
use crate::property::{
    PropertyDescriptor, PropertyTable, BASE_DESCRIPTORS, CATEGORY_OUTPUT, CATEGORY_STANDARD,
};
use crate::store::HintStore;

const DATAMATRIX_DESCRIPTORS: [PropertyDescriptor; 4] = [
    PropertyDescriptor {
        name: "symbol_shape",
        category: CATEGORY_OUTPUT,
        description: "Specifies the matrix shape for Data Matrix.",
        key: HintKey::DataMatrixShape,
    },
    PropertyDescriptor {
        name: "min_size",
        category: CATEGORY_STANDARD,
        description: "Specifies a minimum barcode size.",
        key: HintKey::MinSize,
    },
    PropertyDescriptor {
        name: "max_size",
        category: CATEGORY_STANDARD,
        description: "Specifies a maximum barcode size.",
        key: HintKey::MaxSize,
    },
    PropertyDescriptor {
        name: "default_encodation",
        category: CATEGORY_STANDARD,
        description: "Specifies the default encodation. Make sure that the content fits into \
                      the encodation value, otherwise encoding fails. Standard value: ASCII.",
        key: HintKey::DataMatrixDefaultEncodation,
    },
];

lazy_static! {
    /// Base descriptors followed by the Data Matrix ones.
    pub static ref DATAMATRIX_PROPERTIES: PropertyTable =
        PropertyTable::new([&BASE_DESCRIPTORS[..], &DATAMATRIX_DESCRIPTORS[..]].concat());
}

/// Typed Data Matrix options backed by a [`HintStore`].
///
/// The shared options (width, margin, ...) come from [`HintOptions`].
///
/// ```rust
/// use barcode_hints::datamatrix::{encodation, DatamatrixEncodingOptions, SymbolShapeHint};
/// use barcode_hints::{Dimension, HintKey, HintStore};
///
/// let mut hints = HintStore::new();
/// let mut options = DatamatrixEncodingOptions::new(&mut hints);
/// options.set_symbol_shape(Some(SymbolShapeHint::ForceSquare));
/// options.set_min_size(Some(Dimension::new(20, 20)));
/// options.set_default_encodation(Some(encodation::C40));
///
/// assert!(hints.contains_key(HintKey::MinSize));
/// ```
#[derive(Debug)]
pub struct DatamatrixEncodingOptions<'a> {
    hints: &'a mut HintStore,
}

impl<'a> DatamatrixEncodingOptions<'a> {
    /// Creates a facade over `hints`.
    pub fn new(hints: &'a mut HintStore) -> Self {
        Self { hints }
    }

    /// Symbol shape preference. `None` lets the encoder pick.
    pub fn symbol_shape(&self) -> Option<SymbolShapeHint> {
        self.hints.get_typed(HintKey::DataMatrixShape)
    }

    pub fn set_symbol_shape(&mut self, shape: Option<SymbolShapeHint>) {
        self.hints.set_typed(HintKey::DataMatrixShape, shape);
    }

    /// Minimum symbol size.
    pub fn min_size(&self) -> Option<Dimension> {
        self.hints.get_typed(HintKey::MinSize)
    }

    /// Sets the minimum symbol size. Ordering against the maximum is not
    /// checked here.
    pub fn set_min_size(&mut self, size: Option<Dimension>) {
        self.hints.set_typed(HintKey::MinSize, size);
    }

    /// Maximum symbol size.
    pub fn max_size(&self) -> Option<Dimension> {
        self.hints.get_typed(HintKey::MaxSize)
    }

    pub fn set_max_size(&mut self, size: Option<Dimension>) {
        self.hints.set_typed(HintKey::MaxSize, size);
    }

    /// Default encodation code, see [`encodation`](crate::datamatrix::encodation).
    pub fn default_encodation(&self) -> Option<i32> {
        self.hints.get_typed(HintKey::DataMatrixDefaultEncodation)
    }

    /// Sets the default encodation. The content must be representable in
    /// that mode; a mismatch surfaces when encoding.
    pub fn set_default_encodation(&mut self, encodation: Option<i32>) {
        self.hints.set_typed(HintKey::DataMatrixDefaultEncodation, encodation);
    }
}

impl HintOptions for DatamatrixEncodingOptions<'_> {
    fn hints(&self) -> &HintStore {
        self.hints
    }

    fn hints_mut(&mut self) -> &mut HintStore {
        self.hints
    }

    fn properties(&self) -> &'static PropertyTable {
        &DATAMATRIX_PROPERTIES
    }
}
