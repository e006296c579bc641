//! Forward-mode automatic differentiation over nested sparse vectors.
//!
//! Values are built from three layers: primitive floats, [`DualNumber`]s
//! carrying derivatives, and [`SparseVector`]s holding `(index, value)` pairs
//! of any of these (including other sparse vectors). Result types of every
//! operator are resolved at compile time by the traits in [`promote`].
//!
//! ```
//! use sparsediff::{divergence, SparseDual64, SparseVector};
//!
//! let x = SparseDual64::variable(2.0, 0);
//! let y = SparseDual64::variable(3.0, 1);
//! let field = SparseVector::<SparseDual64>::from_pairs([(0, &x * &y), (1, y.sin())]).unwrap();
//! // ∂(xy)/∂x + ∂sin(y)/∂y
//! assert!((divergence(&field) - (3.0 + 3.0_f64.cos())).abs() < 1e-12);
//! ```

pub mod derivative;
pub mod dual;
pub mod dual_sparse;
pub mod error;
pub mod float;
pub mod index;
pub mod limits;
pub mod merge;
pub mod promote;
pub mod sparse_vector;
pub mod tangent;
mod traits;

#[cfg(feature = "serde")]
mod serde_support;

pub use derivative::{
    derivative, derivative_of, derivatives, gradient, DerivativeOf, DerivativeType,
    DerivativesType, Differentiable, Gradient, GradientType,
};
pub use dual::{DenseDual, DualNumber, SparseDual, SparseDual64};
pub use dual_sparse::divergence;
pub use error::SparseError;
pub use float::Float;
pub use index::SparseIndex;
pub use limits::{NumericLimits, RawType, ValueType};
pub use promote::{
    And, AndType, Compare, CompareTypes, Divides, DividesType, Dot, DotType, Minus, MinusType,
    Multiplies, MultipliesType, Or, OrType, OuterProduct, OuterProductType, Plus, PlusType,
    SparseVectorOf, Sum, SumType,
};
pub use sparse_vector::{sum, transpose, SparseVector};
pub use tangent::Tangent;

/// Dense-derivative dual number over `f64` with `N` lanes.
pub type DenseDual64<const N: usize> = DenseDual<f64, N>;
/// Sparse-derivative dual number over `f32`.
pub type SparseDual32 = SparseDual<f32, u32>;
