use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::Zero;

use crate::index::SparseIndex;
use crate::merge::{merge, DividesOp, MinusOp, MultipliesOp, PlusOp};
use crate::sparse_vector::SparseVector;

// ──────────────────────────────────────────────
//  SparseVector ⊕ SparseVector
// ──────────────────────────────────────────────

// One block per operator; the tag picks the merge policy.
macro_rules! impl_sparse_binary_op {
    ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $tag:ty; $($bound:tt)*) => {
        impl<T, U, I> $trait<SparseVector<U, I>> for SparseVector<T, I>
        where
            I: SparseIndex,
            T: $trait<U>,
            $($bound)*
        {
            type Output = SparseVector<<T as $trait<U>>::Output, I>;
            #[inline]
            fn $method(self, rhs: SparseVector<U, I>) -> Self::Output {
                merge::<$tag, T, U, I>(self, rhs)
            }
        }

        impl<'a, T, U, I> $trait<&'a SparseVector<U, I>> for &'a SparseVector<T, I>
        where
            I: SparseIndex,
            T: $trait<U> + Clone,
            U: Clone,
            $($bound)*
        {
            type Output = SparseVector<<T as $trait<U>>::Output, I>;
            #[inline]
            fn $method(self, rhs: &'a SparseVector<U, I>) -> Self::Output {
                merge::<$tag, T, U, I>(self.clone(), rhs.clone())
            }
        }

        impl<T, U, I> $assign<SparseVector<U, I>> for SparseVector<T, I>
        where
            I: SparseIndex,
            SparseVector<T, I>: $trait<SparseVector<U, I>, Output = SparseVector<T, I>>,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: SparseVector<U, I>) {
                *self = std::mem::take(self).$method(rhs);
            }
        }
    };
}

impl_sparse_binary_op!(Add, add, AddAssign, add_assign, PlusOp; T: Zero, U: Zero);
impl_sparse_binary_op!(Sub, sub, SubAssign, sub_assign, MinusOp; T: Zero, U: Zero);
impl_sparse_binary_op!(Mul, mul, MulAssign, mul_assign, MultipliesOp;);
impl_sparse_binary_op!(Div, div, DivAssign, div_assign, DividesOp; U: Zero);

impl<T, I> Neg for SparseVector<T, I>
where
    T: Neg,
    I: SparseIndex,
{
    type Output = SparseVector<<T as Neg>::Output, I>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map_into(|x| -x)
    }
}

impl<'a, T, I> Neg for &'a SparseVector<T, I>
where
    T: Neg + Clone,
    I: SparseIndex,
{
    type Output = SparseVector<<T as Neg>::Output, I>;
    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|x| -x.clone())
    }
}

// ──────────────────────────────────────────────
//  SparseVector ⊕ primitive scalar
// ──────────────────────────────────────────────

// A scalar operand applies to every stored entry; the index set is kept.
macro_rules! impl_sparse_scalar_op {
    ($s:ty, $trait:ident, $method:ident) => {
        impl<T, I> $trait<$s> for SparseVector<T, I>
        where
            T: $trait<$s>,
            I: SparseIndex,
        {
            type Output = SparseVector<<T as $trait<$s>>::Output, I>;
            #[inline]
            fn $method(self, rhs: $s) -> Self::Output {
                self.map_into(|x| x.$method(rhs))
            }
        }

        impl<T, I> $trait<SparseVector<T, I>> for $s
        where
            $s: $trait<T>,
            I: SparseIndex,
        {
            type Output = SparseVector<<$s as $trait<T>>::Output, I>;
            #[inline]
            fn $method(self, rhs: SparseVector<T, I>) -> Self::Output {
                rhs.map_into(|x| self.$method(x))
            }
        }
    };
}

macro_rules! impl_sparse_scalar_ops {
    ($s:ty) => {
        impl_sparse_scalar_op!($s, Add, add);
        impl_sparse_scalar_op!($s, Sub, sub);
        impl_sparse_scalar_op!($s, Mul, mul);
        impl_sparse_scalar_op!($s, Div, div);

        impl<T, I> AddAssign<$s> for SparseVector<T, I>
        where
            T: AddAssign<$s>,
            I: SparseIndex,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $s) {
                for v in self.nude_data_mut() {
                    *v += rhs;
                }
            }
        }

        impl<T, I> SubAssign<$s> for SparseVector<T, I>
        where
            T: SubAssign<$s>,
            I: SparseIndex,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $s) {
                for v in self.nude_data_mut() {
                    *v -= rhs;
                }
            }
        }

        impl<T, I> MulAssign<$s> for SparseVector<T, I>
        where
            T: MulAssign<$s>,
            I: SparseIndex,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $s) {
                for v in self.nude_data_mut() {
                    *v *= rhs;
                }
            }
        }

        impl<T, I> DivAssign<$s> for SparseVector<T, I>
        where
            T: DivAssign<$s>,
            I: SparseIndex,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $s) {
                for v in self.nude_data_mut() {
                    *v /= rhs;
                }
            }
        }

        impl<T, I> From<$s> for SparseVector<T, I>
        where
            I: SparseIndex,
        {
            /// Only zero converts; see [`SparseVector::from_scalar`].
            #[inline]
            fn from(val: $s) -> Self {
                SparseVector::from_scalar(&val)
            }
        }
    };
}

impl_sparse_scalar_ops!(f32);
impl_sparse_scalar_ops!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn sv(pairs: &[(u32, f64)]) -> SparseVector<f64, u32> {
        SparseVector::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let a = sv(&[(0, 1.0), (3, 2.0)]);
        let b = sv(&[(3, 4.0), (7, 1.0)]);
        let mut c = a.clone();
        c += b.clone();
        assert_eq!(c, &a + &b);
        c -= b.clone();
        assert_eq!(c.nude_indices(), &[0, 3, 7]);
        assert_eq!(c.nude_data(), &[1.0, 2.0, 0.0]);
    }

    #[test]
    fn scalar_ops_touch_only_stored_entries() {
        let a = sv(&[(1, 2.0), (4, -1.0)]);
        let b = a.clone() * 3.0;
        assert_eq!(b.nude_data(), &[6.0, -3.0]);
        let c = 1.0 + a.clone();
        assert_eq!(c.nude_indices(), &[1, 4]);
        assert_eq!(c.nude_data(), &[3.0, 0.0]);
        let mut d = a;
        d /= 2.0;
        assert_eq!(d.nude_data(), &[1.0, -0.5]);
    }

    #[test]
    fn scalar_assign_ops_keep_index_set() {
        let a = sv(&[(1, 2.0), (4, -1.0)]);
        let mut b = a.clone();
        b += 1.0;
        assert_eq!(b, a.clone() + 1.0);
        b -= 3.0;
        assert_eq!(b.nude_indices(), &[1, 4]);
        assert_eq!(b.nude_data(), &[0.0, -3.0]);
        let mut c: SparseVector<f32, u16> = SparseVector::from_pairs([(9, 0.5_f32)]).unwrap();
        c += 0.25_f32;
        c -= 1.0_f32;
        assert_eq!(c.nude_data(), &[-0.25_f32]);
    }

    #[test]
    fn negation() {
        let a = sv(&[(2, 1.5)]);
        assert_eq!((-&a).nude_data(), &[-1.5]);
        assert_eq!(-(-a.clone()), a);
    }
}
