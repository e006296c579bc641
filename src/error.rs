use thiserror::Error;

/// Errors reported by the checked [`SparseVector`](crate::SparseVector)
/// constructors.
///
/// The unchecked paths (`from_scalar`, `From<f64>`, `transpose`) panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SparseError {
    /// A sparse vector can only be built from a scalar that is zero.
    #[error("Cannot initialize SparseVector with non-zero scalar")]
    NonZeroScalar,

    /// The index and data arrays have different lengths.
    #[error("index/data length mismatch: {indices} indices, {data} values")]
    LengthMismatch { indices: usize, data: usize },

    /// The index at `position` is not greater than its predecessor.
    #[error("indices must be strictly increasing (violated at position {position})")]
    UnsortedIndices { position: usize },

    /// The same index was supplied twice.
    #[error("duplicate index {index}")]
    DuplicateIndex { index: String },
}
