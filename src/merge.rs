//! The linear merge behind every binary operator on two sparse vectors.
//!
//! [`merge`] walks both sorted index arrays once. What happens at an index
//! depends on the operator tag: a [`MergeOp`] says how to combine two stored
//! values and whether an index stored on only one side produces an entry.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;

use crate::index::SparseIndex;
use crate::promote::{AndType, OrType};
use crate::sparse_vector::SparseVector;

/// Which indices end up in the result of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Indices stored in either operand (`+`, `-`, `or`).
    Union,
    /// Indices stored in both operands (`*`, `and`).
    Intersection,
    /// Indices stored in the left operand (`/`).
    First,
}

/// An operator tag: how two sparse operands with element types `A` and `B`
/// combine.
pub trait MergeOp<A, B> {
    /// Element type of the result.
    type Output;

    const POLICY: MergePolicy;

    /// Both operands store the index.
    fn both(a: A, b: B) -> Self::Output;

    /// Only the left operand stores the index.
    fn left_only(a: A) -> Option<Self::Output>;

    /// Only the right operand stores the index.
    fn right_only(b: B) -> Option<Self::Output>;
}

/// `+`: union, a missing side counts as zero.
pub struct PlusOp;
/// `-`: union, a missing side counts as zero.
pub struct MinusOp;
/// `*`: intersection.
pub struct MultipliesOp;
/// `/`: the left operand's indices; a missing divisor counts as zero.
pub struct DividesOp;
/// Logical and: intersection.
pub struct AndOp;
/// Logical or: union.
pub struct OrOp;

impl<A, B> MergeOp<A, B> for PlusOp
where
    A: Add<B> + Zero,
    B: Zero,
{
    type Output = <A as Add<B>>::Output;
    const POLICY: MergePolicy = MergePolicy::Union;

    #[inline]
    fn both(a: A, b: B) -> Self::Output {
        a + b
    }
    #[inline]
    fn left_only(a: A) -> Option<Self::Output> {
        Some(a + B::zero())
    }
    #[inline]
    fn right_only(b: B) -> Option<Self::Output> {
        Some(A::zero() + b)
    }
}

impl<A, B> MergeOp<A, B> for MinusOp
where
    A: Sub<B> + Zero,
    B: Zero,
{
    type Output = <A as Sub<B>>::Output;
    const POLICY: MergePolicy = MergePolicy::Union;

    #[inline]
    fn both(a: A, b: B) -> Self::Output {
        a - b
    }
    #[inline]
    fn left_only(a: A) -> Option<Self::Output> {
        Some(a - B::zero())
    }
    #[inline]
    fn right_only(b: B) -> Option<Self::Output> {
        Some(A::zero() - b)
    }
}

impl<A, B> MergeOp<A, B> for MultipliesOp
where
    A: Mul<B>,
{
    type Output = <A as Mul<B>>::Output;
    const POLICY: MergePolicy = MergePolicy::Intersection;

    #[inline]
    fn both(a: A, b: B) -> Self::Output {
        a * b
    }
    #[inline]
    fn left_only(_a: A) -> Option<Self::Output> {
        None
    }
    #[inline]
    fn right_only(_b: B) -> Option<Self::Output> {
        None
    }
}

impl<A, B> MergeOp<A, B> for DividesOp
where
    A: Div<B>,
    B: Zero,
{
    type Output = <A as Div<B>>::Output;
    const POLICY: MergePolicy = MergePolicy::First;

    #[inline]
    fn both(a: A, b: B) -> Self::Output {
        a / b
    }
    #[inline]
    fn left_only(a: A) -> Option<Self::Output> {
        Some(a / B::zero())
    }
    #[inline]
    fn right_only(_b: B) -> Option<Self::Output> {
        None
    }
}

impl<A, B> MergeOp<A, B> for AndOp
where
    A: AndType<B>,
{
    type Output = <A as AndType<B>>::Supertype;
    const POLICY: MergePolicy = MergePolicy::Intersection;

    #[inline]
    fn both(a: A, b: B) -> Self::Output {
        a.logical_and(&b)
    }
    #[inline]
    fn left_only(_a: A) -> Option<Self::Output> {
        None
    }
    #[inline]
    fn right_only(_b: B) -> Option<Self::Output> {
        None
    }
}

impl<A, B> MergeOp<A, B> for OrOp
where
    A: OrType<B> + Zero,
    B: Zero,
{
    type Output = <A as OrType<B>>::Supertype;
    const POLICY: MergePolicy = MergePolicy::Union;

    #[inline]
    fn both(a: A, b: B) -> Self::Output {
        a.logical_or(&b)
    }
    #[inline]
    fn left_only(a: A) -> Option<Self::Output> {
        Some(a.logical_or(&B::zero()))
    }
    #[inline]
    fn right_only(b: B) -> Option<Self::Output> {
        Some(A::zero().logical_or(&b))
    }
}

/// Merge two sparse vectors entry by entry according to `Op`.
pub fn merge<Op, A, B, I>(
    a: SparseVector<A, I>,
    b: SparseVector<B, I>,
) -> SparseVector<Op::Output, I>
where
    Op: MergeOp<A, B>,
    I: SparseIndex,
{
    let (a_indices, a_data) = a.into_parts();
    let (b_indices, b_data) = b.into_parts();

    let capacity = match Op::POLICY {
        MergePolicy::Union => a_indices.len() + b_indices.len(),
        MergePolicy::Intersection => a_indices.len().min(b_indices.len()),
        MergePolicy::First => a_indices.len(),
    };
    let mut indices = Vec::with_capacity(capacity);
    let mut data = Vec::with_capacity(capacity);

    let mut lhs = a_indices.into_iter().zip(a_data).peekable();
    let mut rhs = b_indices.into_iter().zip(b_data).peekable();

    loop {
        let order = match (lhs.peek(), rhs.peek()) {
            (Some((ia, _)), Some((ib, _))) => ia.cmp(ib),
            (Some(_), None) if Op::POLICY == MergePolicy::Intersection => break,
            (None, Some(_)) if Op::POLICY != MergePolicy::Union => break,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => break,
        };

        let entry = match order {
            Ordering::Less => lhs
                .next()
                .and_then(|(i, x)| Op::left_only(x).map(|v| (i, v))),
            Ordering::Greater => rhs
                .next()
                .and_then(|(i, y)| Op::right_only(y).map(|v| (i, v))),
            Ordering::Equal => match (lhs.next(), rhs.next()) {
                (Some((i, x)), Some((_, y))) => Some((i, Op::both(x, y))),
                _ => None,
            },
        };

        if let Some((i, v)) = entry {
            indices.push(i);
            data.push(v);
        }
    }

    SparseVector::from_sorted_parts(indices, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sv(pairs: &[(u32, f64)]) -> SparseVector<f64, u32> {
        SparseVector::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn policies_pick_index_sets() {
        let a = sv(&[(0, 1.0), (2, 4.0), (5, 6.0)]);
        let b = sv(&[(2, 2.0), (3, 3.0)]);

        let plus = merge::<PlusOp, _, _, _>(a.clone(), b.clone());
        assert_eq!(plus.nude_indices(), &[0, 2, 3, 5]);
        assert_eq!(plus.nude_data(), &[1.0, 6.0, 3.0, 6.0]);

        let minus = merge::<MinusOp, _, _, _>(a.clone(), b.clone());
        assert_eq!(minus.nude_data(), &[1.0, 2.0, -3.0, 6.0]);

        let times = merge::<MultipliesOp, _, _, _>(a.clone(), b.clone());
        assert_eq!(times.nude_indices(), &[2]);
        assert_eq!(times.nude_data(), &[8.0]);

        let quot = merge::<DividesOp, _, _, _>(a, b);
        assert_eq!(quot.nude_indices(), &[0, 2, 5]);
        assert_eq!(quot.nude_data()[1], 2.0);
        assert!(quot.nude_data()[0].is_infinite());
    }

    #[test]
    fn empty_operands() {
        let a = sv(&[(1, 1.0)]);
        let e = SparseVector::<f64, u32>::new();
        assert_eq!(merge::<PlusOp, _, _, _>(e.clone(), a.clone()), a);
        assert!(merge::<MultipliesOp, _, _, _>(a.clone(), e.clone()).is_empty());
        assert!(merge::<DividesOp, _, _, _>(e, a).is_empty());
    }
}
