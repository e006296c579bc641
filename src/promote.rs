//! Compile-time type promotion.
//!
//! Every operator category maps a pair of operand types to a result
//! ("supertype"), decided from the types alone:
//!
//! - `PlusType`, `MinusType`, `MultipliesType`, `DividesType` are blanket
//!   traits over `std::ops`, so the promoted type is always the operator's
//!   `Output`.
//! - `CompareTypes`, `AndType`, `OrType`, `DotType`, `OuterProductType` and
//!   `SumType` are explicit. Symmetric rules are generated for both operand
//!   orders by one macro invocation.
//!
//! Sparse vectors always own the outer layer of a promotion: combining a
//! `SparseVector<T, I>` with a scalar `S` gives `SparseVector<Compare<T, S>, I>`
//! whichever side `S` is on.

use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::dual::DualNumber;
use crate::float::Float;
use crate::index::SparseIndex;
use crate::merge::{merge, AndOp, OrOp};
use crate::sparse_vector::SparseVector;
use crate::tangent::Tangent;

/// Result type of `Self + Rhs`.
pub trait PlusType<Rhs = Self> {
    type Supertype;
}

/// Result type of `Self - Rhs`.
pub trait MinusType<Rhs = Self> {
    type Supertype;
}

/// Result type of `Self * Rhs`.
pub trait MultipliesType<Rhs = Self> {
    type Supertype;
}

/// Result type of `Self / Rhs`.
pub trait DividesType<Rhs = Self> {
    type Supertype;
}

impl<A: Add<B>, B> PlusType<B> for A {
    type Supertype = <A as Add<B>>::Output;
}

impl<A: Sub<B>, B> MinusType<B> for A {
    type Supertype = <A as Sub<B>>::Output;
}

impl<A: Mul<B>, B> MultipliesType<B> for A {
    type Supertype = <A as Mul<B>>::Output;
}

impl<A: Div<B>, B> DividesType<B> for A {
    type Supertype = <A as Div<B>>::Output;
}

/// The common type both operands promote to.
pub trait CompareTypes<Rhs = Self> {
    type Supertype;
}

/// Logical and. Scalars give `bool`, containers a container of the element
/// results over the shared indices.
pub trait AndType<Rhs = Self> {
    type Supertype;

    fn logical_and(&self, rhs: &Rhs) -> Self::Supertype;
}

/// Logical or. Scalars give `bool`, containers a container of the element
/// results over the union of indices.
pub trait OrType<Rhs = Self> {
    type Supertype;

    fn logical_or(&self, rhs: &Rhs) -> Self::Supertype;
}

/// Result type of a dot product.
pub trait DotType<Rhs = Self> {
    type Supertype;
}

/// Result type of an outer product.
pub trait OuterProductType<Rhs = Self> {
    type Supertype;
}

/// Result type of summing the entries of a container.
pub trait SumType {
    type Supertype;
}

pub type Plus<A, B> = <A as PlusType<B>>::Supertype;
pub type Minus<A, B> = <A as MinusType<B>>::Supertype;
pub type Multiplies<A, B> = <A as MultipliesType<B>>::Supertype;
pub type Divides<A, B> = <A as DividesType<B>>::Supertype;
pub type Compare<A, B> = <A as CompareTypes<B>>::Supertype;
pub type And<A, B> = <A as AndType<B>>::Supertype;
pub type Or<A, B> = <A as OrType<B>>::Supertype;
pub type Dot<A, B> = <A as DotType<B>>::Supertype;
pub type OuterProduct<A, B> = <A as OuterProductType<B>>::Supertype;
pub type Sum<A> = <A as SumType>::Supertype;

/// Sparse vector type able to hold values of both `A` and `B`.
///
/// For more than two element types use [`sparse_vector_of!`](crate::sparse_vector_of).
pub type SparseVectorOf<A, B> = SparseVector<Compare<A, B>, u32>;

/// The common type of any number of types, folded with [`Compare`].
///
/// ```
/// use sparsediff::compare_all;
///
/// let x: compare_all!(f32, i32, f64) = 1.0_f64;
/// # let _ = x;
/// ```
#[macro_export]
macro_rules! compare_all {
    ($a:ty) => { $a };
    ($a:ty, $($rest:ty),+ $(,)?) => {
        $crate::Compare<$a, $crate::compare_all!($($rest),+)>
    };
}

/// Sparse vector type able to hold values of every listed type.
///
/// `sparse_vector_of!(A, B)` is [`SparseVectorOf<A, B>`].
#[macro_export]
macro_rules! sparse_vector_of {
    ($($t:ty),+ $(,)?) => {
        $crate::SparseVector<$crate::compare_all!($($t),+), u32>
    };
}

// ──────────────────────────────────────────────
//  Primitive scalars
// ──────────────────────────────────────────────

macro_rules! impl_scalar_promotion {
    ($a:ty, $b:ty => $s:ty) => {
        impl CompareTypes<$b> for $a {
            type Supertype = $s;
        }

        impl AndType<$b> for $a {
            type Supertype = bool;
            #[inline]
            fn logical_and(&self, rhs: &$b) -> bool {
                !self.is_zero() && !rhs.is_zero()
            }
        }

        impl OrType<$b> for $a {
            type Supertype = bool;
            #[inline]
            fn logical_or(&self, rhs: &$b) -> bool {
                !self.is_zero() || !rhs.is_zero()
            }
        }
    };
}

macro_rules! impl_symmetric_scalar_promotion {
    ($a:ty, $b:ty => $s:ty) => {
        impl_scalar_promotion!($a, $b => $s);
        impl_scalar_promotion!($b, $a => $s);
    };
}

impl_scalar_promotion!(f32, f32 => f32);
impl_scalar_promotion!(f64, f64 => f64);
impl_scalar_promotion!(i32, i32 => i32);
impl_scalar_promotion!(i64, i64 => i64);
impl_scalar_promotion!(u32, u32 => u32);
impl_scalar_promotion!(u64, u64 => u64);
impl_symmetric_scalar_promotion!(f32, f64 => f64);
impl_symmetric_scalar_promotion!(i32, f32 => f32);
impl_symmetric_scalar_promotion!(i32, f64 => f64);
impl_symmetric_scalar_promotion!(i64, f64 => f64);
impl_symmetric_scalar_promotion!(u32, f64 => f64);
impl_symmetric_scalar_promotion!(i32, i64 => i64);

// ──────────────────────────────────────────────
//  DualNumber
// ──────────────────────────────────────────────

impl<F: Float, D: Tangent<F>> CompareTypes for DualNumber<F, D> {
    type Supertype = DualNumber<F, D>;
}

impl<F: Float, D: Tangent<F>> AndType for DualNumber<F, D> {
    type Supertype = bool;
    #[inline]
    fn logical_and(&self, rhs: &Self) -> bool {
        !self.re.is_zero() && !rhs.re.is_zero()
    }
}

impl<F: Float, D: Tangent<F>> OrType for DualNumber<F, D> {
    type Supertype = bool;
    #[inline]
    fn logical_or(&self, rhs: &Self) -> bool {
        !self.re.is_zero() || !rhs.re.is_zero()
    }
}

macro_rules! impl_dual_scalar_promotion {
    ($f:ty) => {
        impl<D: Tangent<$f>> CompareTypes<$f> for DualNumber<$f, D> {
            type Supertype = DualNumber<$f, D>;
        }

        impl<D: Tangent<$f>> CompareTypes<DualNumber<$f, D>> for $f {
            type Supertype = DualNumber<$f, D>;
        }

        impl<D: Tangent<$f>> AndType<$f> for DualNumber<$f, D> {
            type Supertype = bool;
            #[inline]
            fn logical_and(&self, rhs: &$f) -> bool {
                !self.re.is_zero() && !rhs.is_zero()
            }
        }

        impl<D: Tangent<$f>> AndType<DualNumber<$f, D>> for $f {
            type Supertype = bool;
            #[inline]
            fn logical_and(&self, rhs: &DualNumber<$f, D>) -> bool {
                !self.is_zero() && !rhs.re.is_zero()
            }
        }

        impl<D: Tangent<$f>> OrType<$f> for DualNumber<$f, D> {
            type Supertype = bool;
            #[inline]
            fn logical_or(&self, rhs: &$f) -> bool {
                !self.re.is_zero() || !rhs.is_zero()
            }
        }

        impl<D: Tangent<$f>> OrType<DualNumber<$f, D>> for $f {
            type Supertype = bool;
            #[inline]
            fn logical_or(&self, rhs: &DualNumber<$f, D>) -> bool {
                !self.is_zero() || !rhs.re.is_zero()
            }
        }
    };
}

impl_dual_scalar_promotion!(f32);
impl_dual_scalar_promotion!(f64);

// ──────────────────────────────────────────────
//  SparseVector
// ──────────────────────────────────────────────

impl<T, U, I> CompareTypes<SparseVector<U, I>> for SparseVector<T, I>
where
    T: CompareTypes<U>,
{
    type Supertype = SparseVector<<T as CompareTypes<U>>::Supertype, I>;
}

impl<T, U, I> AndType<SparseVector<U, I>> for SparseVector<T, I>
where
    T: AndType<U> + Clone,
    U: Clone,
    I: SparseIndex,
{
    type Supertype = SparseVector<<T as AndType<U>>::Supertype, I>;

    fn logical_and(&self, rhs: &SparseVector<U, I>) -> Self::Supertype {
        merge::<AndOp, T, U, I>(self.clone(), rhs.clone())
    }
}

impl<T, U, I> OrType<SparseVector<U, I>> for SparseVector<T, I>
where
    T: OrType<U> + Zero + Clone,
    U: Zero + Clone,
    I: SparseIndex,
{
    type Supertype = SparseVector<<T as OrType<U>>::Supertype, I>;

    fn logical_or(&self, rhs: &SparseVector<U, I>) -> Self::Supertype {
        merge::<OrOp, T, U, I>(self.clone(), rhs.clone())
    }
}

impl<T, U, I, J> DotType<SparseVector<U, J>> for SparseVector<T, I>
where
    T: Mul<U>,
{
    type Supertype = <T as Mul<U>>::Output;
}

impl<T, U, I, J> OuterProductType<SparseVector<U, J>> for SparseVector<T, I>
where
    T: Mul<U>,
{
    type Supertype = SparseVector<SparseVector<<T as Mul<U>>::Output, J>, I>;
}

impl<T, I> SumType for SparseVector<T, I> {
    type Supertype = T;
}

// Sparse vector with a primitive scalar: the scalar is pushed into every
// stored entry, on either side.
macro_rules! impl_sparse_scalar_promotion {
    ($s:ty) => {
        impl<T, I> CompareTypes<$s> for SparseVector<T, I>
        where
            T: CompareTypes<$s>,
        {
            type Supertype = SparseVector<<T as CompareTypes<$s>>::Supertype, I>;
        }

        impl<T, I> CompareTypes<SparseVector<T, I>> for $s
        where
            $s: CompareTypes<T>,
        {
            type Supertype = SparseVector<<$s as CompareTypes<T>>::Supertype, I>;
        }

        impl<T, I> AndType<$s> for SparseVector<T, I>
        where
            T: AndType<$s>,
            I: SparseIndex,
        {
            type Supertype = SparseVector<<T as AndType<$s>>::Supertype, I>;
            fn logical_and(&self, rhs: &$s) -> Self::Supertype {
                self.map(|x| x.logical_and(rhs))
            }
        }

        impl<T, I> AndType<SparseVector<T, I>> for $s
        where
            $s: AndType<T>,
            I: SparseIndex,
        {
            type Supertype = SparseVector<<$s as AndType<T>>::Supertype, I>;
            fn logical_and(&self, rhs: &SparseVector<T, I>) -> Self::Supertype {
                rhs.map(|y| self.logical_and(y))
            }
        }

        impl<T, I> OrType<$s> for SparseVector<T, I>
        where
            T: OrType<$s>,
            I: SparseIndex,
        {
            type Supertype = SparseVector<<T as OrType<$s>>::Supertype, I>;
            fn logical_or(&self, rhs: &$s) -> Self::Supertype {
                self.map(|x| x.logical_or(rhs))
            }
        }

        impl<T, I> OrType<SparseVector<T, I>> for $s
        where
            $s: OrType<T>,
            I: SparseIndex,
        {
            type Supertype = SparseVector<<$s as OrType<T>>::Supertype, I>;
            fn logical_or(&self, rhs: &SparseVector<T, I>) -> Self::Supertype {
                rhs.map(|y| self.logical_or(y))
            }
        }
    };
}

impl_sparse_scalar_promotion!(f32);
impl_sparse_scalar_promotion!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn same_type<A: 'static, B: 'static>() -> bool {
        std::any::TypeId::of::<A>() == std::any::TypeId::of::<B>()
    }

    #[test]
    fn scalar_rules_are_symmetric() {
        assert!(same_type::<Compare<f32, f64>, f64>());
        assert!(same_type::<Compare<f64, f32>, f64>());
        assert!(same_type::<Compare<i32, f32>, Compare<f32, i32>>());
        assert!(same_type::<And<f64, i32>, bool>());
    }

    #[test]
    fn blanket_arithmetic_rules_follow_std_ops() {
        assert!(same_type::<Plus<f64, f64>, f64>());
        assert!(same_type::<Divides<i32, i32>, i32>());
    }

    #[test]
    fn scalar_logic() {
        assert!(1.0_f64.logical_and(&2_i32));
        assert!(!0.0_f64.logical_and(&2_i32));
        assert!(0.0_f32.logical_or(&3.0_f64));
        assert!(!0_i32.logical_or(&0.0_f64));
    }
}
