//! The differentiation protocol.
//!
//! A type is [`Differentiable`] if derivative information can be pulled out
//! of it. Dual numbers are the leaves; containers such as
//! [`SparseVector`](crate::SparseVector) distribute the query over their
//! elements and keep their own index set (see [`dual_sparse`](crate::dual_sparse)).
//! A type without an impl cannot be differentiated: the call does not compile.

use crate::dual::DualNumber;
use crate::float::Float;
use crate::tangent::Tangent;

/// Derivative extraction.
pub trait Differentiable {
    /// Derivative with respect to a single slot.
    type Derivative;
    /// All derivatives at once.
    type Derivatives;

    /// Derivative with respect to independent variable `slot`.
    fn derivative(&self, slot: usize) -> Self::Derivative;

    /// The full derivative container.
    fn derivatives(&self) -> Self::Derivatives;
}

/// Derivative with respect to a slot fixed at compile time.
///
/// Blanket-implemented for every [`Differentiable`] type.
pub trait DerivativeOf<const SLOT: usize>: Differentiable {
    fn derivative_of(&self) -> Self::Derivative;
}

impl<T: Differentiable, const SLOT: usize> DerivativeOf<SLOT> for T {
    #[inline]
    fn derivative_of(&self) -> Self::Derivative {
        self.derivative(SLOT)
    }
}

/// Gradient extraction: a dual number yields its derivative container, a
/// container of dual numbers yields a container of gradients (Jacobian rows).
pub trait Gradient {
    type Output;

    fn gradient(&self) -> Self::Output;
}

pub type DerivativeType<T> = <T as Differentiable>::Derivative;
pub type DerivativesType<T> = <T as Differentiable>::Derivatives;
pub type GradientType<T> = <T as Gradient>::Output;

impl<F: Float, D: Tangent<F>> Differentiable for DualNumber<F, D> {
    type Derivative = F;
    type Derivatives = D;

    #[inline]
    fn derivative(&self, slot: usize) -> F {
        self.eps.component(slot)
    }

    #[inline]
    fn derivatives(&self) -> D {
        self.eps.clone()
    }
}

impl<F: Float, D: Tangent<F>> Gradient for DualNumber<F, D> {
    type Output = D;

    #[inline]
    fn gradient(&self) -> D {
        self.eps.clone()
    }
}

/// Derivative of `a` with respect to independent variable `slot`.
#[inline]
pub fn derivative<T: Differentiable>(a: &T, slot: usize) -> DerivativeType<T> {
    a.derivative(slot)
}

/// Every derivative of `a`.
#[inline]
pub fn derivatives<T: Differentiable>(a: &T) -> DerivativesType<T> {
    a.derivatives()
}

/// Derivative of `a` with respect to the compile-time slot `SLOT`.
///
/// ```
/// use sparsediff::{derivative_of, DenseDual};
///
/// let x = DenseDual::<f64, 2>::variable(3.0, 1);
/// let y = &x * &x;
/// assert_eq!(derivative_of::<1, _>(&y), 6.0);
/// ```
#[inline]
pub fn derivative_of<const SLOT: usize, T: DerivativeOf<SLOT>>(a: &T) -> DerivativeType<T> {
    a.derivative_of()
}

/// Gradient of `a`.
#[inline]
pub fn gradient<T: Gradient>(a: &T) -> GradientType<T> {
    a.gradient()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::{DenseDual, SparseDual64};

    #[test]
    fn dense_dual_derivatives() {
        let x = DenseDual::<f64, 2>::variable(2.0, 0);
        let y = DenseDual::<f64, 2>::variable(5.0, 1);
        let f = &x * &y;
        assert_eq!(derivative(&f, 0), 5.0);
        assert_eq!(derivative(&f, 1), 2.0);
        assert_eq!(derivative(&f, 7), 0.0);
        assert_eq!(derivatives(&f), [5.0, 2.0]);
        assert_eq!(gradient(&f), [5.0, 2.0]);
    }

    #[test]
    fn sparse_dual_only_stores_touched_slots() {
        let x = SparseDual64::variable(2.0, 4);
        let y = SparseDual64::variable(3.0, 9);
        let f = &x * &y;
        assert_eq!(derivatives(&f).nude_indices(), &[4, 9]);
        assert_eq!(derivative_of::<9, _>(&f), 2.0);
        assert_eq!(derivative_of::<0, _>(&f), 0.0);
    }
}
