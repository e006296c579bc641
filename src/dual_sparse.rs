//! Where dual numbers meet sparse vectors.
//!
//! Differentiation distributes over a sparse vector element by element and
//! keeps the index set. Arithmetic and promotion between a sparse vector and
//! a dual number always leave the sparse vector as the outer layer: the dual
//! number is pushed into every stored entry.

use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::derivative::{DerivativeType, Differentiable, Gradient};
use crate::dual::DualNumber;
use crate::float::Float;
use crate::index::SparseIndex;
use crate::promote::{AndType, CompareTypes, OrType};
use crate::sparse_vector::SparseVector;
use crate::tangent::Tangent;

// ──────────────────────────────────────────────
//  Differentiation
// ──────────────────────────────────────────────

impl<T, I> Differentiable for SparseVector<T, I>
where
    T: Differentiable,
    I: SparseIndex,
{
    type Derivative = SparseVector<T::Derivative, I>;
    type Derivatives = SparseVector<T::Derivatives, I>;

    fn derivative(&self, slot: usize) -> Self::Derivative {
        self.map(|v| v.derivative(slot))
    }

    fn derivatives(&self) -> Self::Derivatives {
        self.map(|v| v.derivatives())
    }
}

impl<T, I> Gradient for SparseVector<T, I>
where
    T: Gradient,
    I: SparseIndex,
{
    type Output = SparseVector<T::Output, I>;

    fn gradient(&self) -> Self::Output {
        self.map(|v| v.gradient())
    }
}

/// Divergence `Σ_i ∂a[i]/∂x_i`.
///
/// Each stored index names the derivative slot taken from the value stored
/// under it. For a vector of vectors this is the divergence with respect to
/// the outer index.
pub fn divergence<T, I>(a: &SparseVector<T, I>) -> DerivativeType<T>
where
    T: Differentiable,
    T::Derivative: Zero,
    I: SparseIndex,
{
    a.iter().fold(<T::Derivative as Zero>::zero(), |acc, (index, value)| {
        acc + value.derivative(index.to_position())
    })
}

// ──────────────────────────────────────────────
//  SparseVector ⊕ DualNumber
// ──────────────────────────────────────────────

macro_rules! impl_dual_sparse_op {
    ($trait:ident, $method:ident) => {
        impl<T, I, F, D> $trait<DualNumber<F, D>> for SparseVector<T, I>
        where
            T: $trait<DualNumber<F, D>>,
            I: SparseIndex,
            F: Float,
            D: Tangent<F>,
        {
            type Output = SparseVector<<T as $trait<DualNumber<F, D>>>::Output, I>;
            #[inline]
            fn $method(self, rhs: DualNumber<F, D>) -> Self::Output {
                self.map_into(|x| x.$method(rhs.clone()))
            }
        }

        impl<T, I, F, D> $trait<SparseVector<T, I>> for DualNumber<F, D>
        where
            DualNumber<F, D>: $trait<T>,
            I: SparseIndex,
            F: Float,
            D: Tangent<F>,
        {
            type Output = SparseVector<<DualNumber<F, D> as $trait<T>>::Output, I>;
            #[inline]
            fn $method(self, rhs: SparseVector<T, I>) -> Self::Output {
                rhs.map_into(|y| self.clone().$method(y))
            }
        }
    };
}

impl_dual_sparse_op!(Add, add);
impl_dual_sparse_op!(Sub, sub);
impl_dual_sparse_op!(Mul, mul);
impl_dual_sparse_op!(Div, div);

impl<T, I, F, D> CompareTypes<DualNumber<F, D>> for SparseVector<T, I>
where
    T: CompareTypes<DualNumber<F, D>>,
    F: Float,
    D: Tangent<F>,
{
    type Supertype = SparseVector<<T as CompareTypes<DualNumber<F, D>>>::Supertype, I>;
}

impl<T, I, F, D> CompareTypes<SparseVector<T, I>> for DualNumber<F, D>
where
    DualNumber<F, D>: CompareTypes<T>,
    F: Float,
    D: Tangent<F>,
{
    type Supertype = SparseVector<<DualNumber<F, D> as CompareTypes<T>>::Supertype, I>;
}

impl<T, I, F, D> AndType<DualNumber<F, D>> for SparseVector<T, I>
where
    T: AndType<DualNumber<F, D>>,
    I: SparseIndex,
    F: Float,
    D: Tangent<F>,
{
    type Supertype = SparseVector<<T as AndType<DualNumber<F, D>>>::Supertype, I>;

    fn logical_and(&self, rhs: &DualNumber<F, D>) -> Self::Supertype {
        self.map(|x| x.logical_and(rhs))
    }
}

impl<T, I, F, D> AndType<SparseVector<T, I>> for DualNumber<F, D>
where
    DualNumber<F, D>: AndType<T>,
    I: SparseIndex,
    F: Float,
    D: Tangent<F>,
{
    type Supertype = SparseVector<<DualNumber<F, D> as AndType<T>>::Supertype, I>;

    fn logical_and(&self, rhs: &SparseVector<T, I>) -> Self::Supertype {
        rhs.map(|y| self.logical_and(y))
    }
}

impl<T, I, F, D> OrType<DualNumber<F, D>> for SparseVector<T, I>
where
    T: OrType<DualNumber<F, D>>,
    I: SparseIndex,
    F: Float,
    D: Tangent<F>,
{
    type Supertype = SparseVector<<T as OrType<DualNumber<F, D>>>::Supertype, I>;

    fn logical_or(&self, rhs: &DualNumber<F, D>) -> Self::Supertype {
        self.map(|x| x.logical_or(rhs))
    }
}

impl<T, I, F, D> OrType<SparseVector<T, I>> for DualNumber<F, D>
where
    DualNumber<F, D>: OrType<T>,
    I: SparseIndex,
    F: Float,
    D: Tangent<F>,
{
    type Supertype = SparseVector<<DualNumber<F, D> as OrType<T>>::Supertype, I>;

    fn logical_or(&self, rhs: &SparseVector<T, I>) -> Self::Supertype {
        rhs.map(|y| self.logical_or(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::DenseDual;

    type D2 = DenseDual<f64, 2>;

    #[test]
    fn derivative_keeps_index_set() {
        let x = D2::variable(2.0, 0);
        let y = D2::variable(3.0, 1);
        let a = SparseVector::from_pairs([(4_u32, &x * &y), (6, x.sin())]).unwrap();
        let da = a.derivative(1);
        assert_eq!(da.nude_indices(), &[4, 6]);
        assert_eq!(da.nude_data(), &[2.0, 0.0]);
    }

    #[test]
    fn dual_times_sparse_pushes_dual_inward() {
        let x = D2::variable(2.0, 0);
        let a: SparseVector<f64, u32> = SparseVector::from_pairs([(1, 3.0), (5, -1.0)]).unwrap();
        let left = a.clone() * x;
        let right = x * a;
        assert_eq!(left.nude_indices(), right.nude_indices());
        assert_eq!(left.raw_at(0).re, 6.0);
        assert_eq!(right.raw_at(1).eps, [-1.0, 0.0]);
    }
}
