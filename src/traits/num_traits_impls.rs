use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::dual::DualNumber;
use crate::float::Float;
use crate::index::SparseIndex;
use crate::sparse_vector::SparseVector;
use crate::tangent::Tangent;

// ══════════════════════════════════════════════
//  DualNumber<F, D>
// ══════════════════════════════════════════════

impl<F: Float, D: Tangent<F>> Zero for DualNumber<F, D> {
    #[inline]
    fn zero() -> Self {
        DualNumber::constant(F::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero()
    }
}

impl<F: Float, D: Tangent<F>> One for DualNumber<F, D> {
    #[inline]
    fn one() -> Self {
        DualNumber::constant(F::one())
    }
}

impl<F: Float, D: Tangent<F>> FromPrimitive for DualNumber<F, D> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        F::from_i64(n).map(DualNumber::constant)
    }
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        F::from_u64(n).map(DualNumber::constant)
    }
    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        F::from_f32(n).map(DualNumber::constant)
    }
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        F::from_f64(n).map(DualNumber::constant)
    }
}

impl<F: Float, D: Tangent<F>> ToPrimitive for DualNumber<F, D> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.re.to_i64()
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.re.to_u64()
    }
    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.re.to_f32()
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.re.to_f64()
    }
}

// ══════════════════════════════════════════════
//  SparseVector<T, I>
// ══════════════════════════════════════════════

/// The zero vector stores nothing. A vector holding only explicit zeros is
/// also zero.
impl<T: Zero, I: SparseIndex> Zero for SparseVector<T, I> {
    #[inline]
    fn zero() -> Self {
        SparseVector::new()
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.nude_data().iter().all(Zero::is_zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_zeros_are_zero() {
        let v: SparseVector<f64, u32> = SparseVector::from_pairs([(2, 0.0), (9, 0.0)]).unwrap();
        assert!(v.is_zero());
        assert!(SparseVector::<f64, u32>::zero().is_empty());
    }

    #[test]
    fn dual_constants() {
        let one = DualNumber::<f64, [f64; 2]>::one();
        assert_eq!(one.re, 1.0);
        assert_eq!(one.eps, [0.0, 0.0]);
        assert!(DualNumber::<f64, [f64; 2]>::zero().is_zero());
        let seven = DualNumber::<f32, [f32; 1]>::from_i64(7).unwrap();
        assert_eq!(seven.re, 7.0);
    }
}
