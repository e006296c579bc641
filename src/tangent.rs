//! Derivative containers carried by a [`DualNumber`](crate::DualNumber).

use crate::float::Float;
use crate::index::SparseIndex;
use crate::sparse_vector::SparseVector;

/// What a dual number needs from the container holding its derivatives.
///
/// Implemented for dense lanes (`[F; N]`) and for sparse derivatives
/// (`SparseVector<F, I>`), where a slot is present only if some input
/// actually influenced the value.
pub trait Tangent<F: Float>: Clone {
    /// All derivatives zero.
    fn zeros() -> Self;

    /// Unit derivative in `slot`, zero elsewhere.
    fn unit(slot: usize) -> Self;

    /// Every derivative multiplied by `factor`.
    fn scale(&self, factor: F) -> Self;

    /// The linear combination `a * self + b * other`.
    fn combine(&self, a: F, other: &Self, b: F) -> Self;

    /// The derivative in `slot` (zero if the slot is not stored).
    fn component(&self, slot: usize) -> F;
}

impl<F: Float, const N: usize> Tangent<F> for [F; N] {
    #[inline]
    fn zeros() -> Self {
        [F::zero(); N]
    }

    #[inline]
    fn unit(slot: usize) -> Self {
        std::array::from_fn(|k| if k == slot { F::one() } else { F::zero() })
    }

    #[inline]
    fn scale(&self, factor: F) -> Self {
        std::array::from_fn(|k| self[k] * factor)
    }

    #[inline]
    fn combine(&self, a: F, other: &Self, b: F) -> Self {
        std::array::from_fn(|k| a * self[k] + b * other[k])
    }

    #[inline]
    fn component(&self, slot: usize) -> F {
        self.get(slot).copied().unwrap_or_else(F::zero)
    }
}

impl<F: Float, I: SparseIndex> Tangent<F> for SparseVector<F, I> {
    #[inline]
    fn zeros() -> Self {
        SparseVector::new()
    }

    fn unit(slot: usize) -> Self {
        SparseVector::unit_vector(I::from_position(slot))
    }

    fn scale(&self, factor: F) -> Self {
        self.map(|&x| x * factor)
    }

    fn combine(&self, a: F, other: &Self, b: F) -> Self {
        self.scale(a) + other.scale(b)
    }

    fn component(&self, slot: usize) -> F {
        I::try_from_position(slot)
            .and_then(|i| self.get(i))
            .copied()
            .unwrap_or_else(F::zero)
    }
}
