//! Sparse vectors of arbitrary (possibly nested) element type.
//!
//! A [`SparseVector<T, I>`] stores `(index, value)` pairs with strictly
//! increasing indices; every index that is not stored is an implicit zero.
//! Elements can be plain scalars, [`DualNumber`](crate::DualNumber)s or other
//! sparse vectors, so `SparseVector<SparseVector<T, J>, I>` is a sparse matrix
//! and `SparseVector<SparseDual64>` a vector whose entries carry gradients.

use std::fmt::{self, Debug, Display};
use std::ops::Mul;

use num_traits::{NumCast, One, Zero};

use crate::error::SparseError;
use crate::index::SparseIndex;

/// An ordered sparse vector of `(index, value)` pairs.
#[derive(Clone, PartialEq)]
pub struct SparseVector<T, I = u32> {
    indices: Vec<I>,
    data: Vec<T>,
}

impl<T, I> Default for SparseVector<T, I> {
    fn default() -> Self {
        SparseVector {
            indices: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl<T: Debug, I: Debug> Debug for SparseVector<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.indices.iter().zip(self.data.iter()))
            .finish()
    }
}

impl<T: Display, I: Display> Display for SparseVector<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, (i, v)) in self.indices.iter().zip(self.data.iter()).enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", i, v)?;
        }
        write!(f, "}}")
    }
}

impl<T, I: SparseIndex> SparseVector<T, I> {
    /// An empty sparse vector (every entry an implicit zero).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from storage already known to be sorted and unique.
    #[inline]
    pub(crate) fn from_sorted_parts(indices: Vec<I>, data: Vec<T>) -> Self {
        debug_assert_eq!(indices.len(), data.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        SparseVector { indices, data }
    }

    /// Build from parallel index and value arrays.
    ///
    /// Fails unless both arrays have the same length and the indices are
    /// strictly increasing.
    pub fn from_parts(indices: Vec<I>, data: Vec<T>) -> Result<Self, SparseError> {
        let v = SparseVector { indices, data };
        v.check_invariants()?;
        Ok(v)
    }

    /// Build from `(index, value)` pairs in any order.
    ///
    /// Fails if an index occurs twice.
    pub fn from_pairs<P>(pairs: P) -> Result<Self, SparseError>
    where
        P: IntoIterator<Item = (I, T)>,
    {
        let mut pairs: Vec<(I, T)> = pairs.into_iter().collect();
        pairs.sort_by_key(|&(i, _)| i);
        if let Some(w) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(SparseError::DuplicateIndex {
                index: w[0].0.to_string(),
            });
        }
        let (indices, data) = pairs.into_iter().unzip();
        Ok(SparseVector { indices, data })
    }

    /// Build from a scalar, which only makes sense for zero.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `val` is non-zero. The check is compiled out
    /// in release builds, where the result is always empty.
    #[inline]
    pub fn from_scalar<S: Zero>(val: &S) -> Self {
        debug_assert!(val.is_zero(), "{}", SparseError::NonZeroScalar);
        Self::new()
    }

    /// Checked variant of [`from_scalar`](Self::from_scalar), active in every
    /// build profile.
    pub fn try_from_scalar<S: Zero>(val: &S) -> Result<Self, SparseError> {
        if val.is_zero() {
            Ok(Self::new())
        } else {
            Err(SparseError::NonZeroScalar)
        }
    }

    /// Verify that indices are strictly increasing and match the data length.
    pub fn check_invariants(&self) -> Result<(), SparseError> {
        if self.indices.len() != self.data.len() {
            return Err(SparseError::LengthMismatch {
                indices: self.indices.len(),
                data: self.data.len(),
            });
        }
        match self.indices.windows(2).position(|w| w[0] >= w[1]) {
            Some(p) => Err(SparseError::UnsortedIndices { position: p + 1 }),
            None => Ok(()),
        }
    }

    /// Split into the index and value arrays.
    #[inline]
    pub fn into_parts(self) -> (Vec<I>, Vec<T>) {
        (self.indices, self.data)
    }

    /// Number of stored entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resize the storage to `n` entries.
    ///
    /// New entries get index zero and a zero value; callers must assign their
    /// indices (via [`raw_index_mut`](Self::raw_index_mut)) before using the
    /// vector again.
    pub fn resize(&mut self, n: usize)
    where
        T: Zero,
    {
        self.indices.resize(n, I::zero());
        self.data.resize_with(n, T::zero);
    }

    /// Value of the `i`-th stored entry.
    #[inline]
    pub fn raw_at(&self, i: usize) -> &T {
        &self.data[i]
    }

    #[inline]
    pub fn raw_at_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }

    /// Index of the `i`-th stored entry.
    #[inline]
    pub fn raw_index(&self, i: usize) -> I {
        self.indices[i]
    }

    #[inline]
    pub fn raw_index_mut(&mut self, i: usize) -> &mut I {
        &mut self.indices[i]
    }

    #[inline]
    pub fn nude_indices(&self) -> &[I] {
        &self.indices
    }

    /// Direct access to the index array. Callers keep it sorted and unique.
    #[inline]
    pub fn nude_indices_mut(&mut self) -> &mut Vec<I> {
        &mut self.indices
    }

    #[inline]
    pub fn nude_data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn nude_data_mut(&mut self) -> &mut Vec<T> {
        &mut self.data
    }

    /// Storage position of `index`, if stored.
    #[inline]
    pub fn position(&self, index: I) -> Option<usize> {
        self.indices.binary_search(&index).ok()
    }

    /// Value stored at `index`, if any.
    #[inline]
    pub fn get(&self, index: I) -> Option<&T> {
        self.position(index).map(|p| &self.data[p])
    }

    #[inline]
    pub fn get_mut(&mut self, index: I) -> Option<&mut T> {
        match self.position(index) {
            Some(p) => Some(&mut self.data[p]),
            None => None,
        }
    }

    /// Mutable access to the value at `index`, inserting a zero first if the
    /// index is not stored.
    pub fn insert(&mut self, index: I) -> &mut T
    where
        T: Zero,
    {
        let p = match self.indices.binary_search(&index) {
            Ok(p) => p,
            Err(p) => {
                self.indices.insert(p, index);
                self.data.insert(p, T::zero());
                p
            }
        };
        &mut self.data[p]
    }

    /// Iterate over stored `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.indices.iter().copied().zip(self.data.iter())
    }

    /// Apply `f` to every stored value, keeping the index set.
    pub fn map<U, M>(&self, f: M) -> SparseVector<U, I>
    where
        M: FnMut(&T) -> U,
    {
        SparseVector {
            indices: self.indices.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Consuming variant of [`map`](Self::map).
    pub fn map_into<U, M>(self, f: M) -> SparseVector<U, I>
    where
        M: FnMut(T) -> U,
    {
        SparseVector {
            indices: self.indices,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    /// Convert element and index types.
    ///
    /// # Panics
    ///
    /// Panics if an index does not fit in `J`.
    pub fn convert<U, J>(self) -> SparseVector<U, J>
    where
        U: From<T>,
        J: SparseIndex,
    {
        SparseVector {
            indices: self
                .indices
                .into_iter()
                .map(|i| J::from_position(i.to_position()))
                .collect(),
            data: self.data.into_iter().map(U::from).collect(),
        }
    }

    /// Dot product over the shared indices.
    ///
    /// `other` may use a different index type. Each stored index of `self`
    /// is binary-searched in `other`, so the cost is O(n log m); an index
    /// that does not fit `J` is not stored there.
    pub fn dot<U, J>(&self, other: &SparseVector<U, J>) -> <T as Mul<U>>::Output
    where
        T: Clone + Mul<U>,
        U: Clone,
        J: SparseIndex,
        <T as Mul<U>>::Output: Zero,
    {
        let mut acc = <<T as Mul<U>>::Output as Zero>::zero();
        for (i1, index) in self.indices.iter().enumerate() {
            let hit = <J as NumCast>::from(*index)
                .and_then(|j| other.indices.binary_search(&j).ok());
            if let Some(i2) = hit {
                acc = acc + self.data[i1].clone() * other.data[i2].clone();
            }
        }
        acc
    }

    /// Outer product `self ⊗ other`.
    ///
    /// Rows follow the indices of `self`; every row stores the full index
    /// set of `other`.
    pub fn outerproduct<U, J>(
        &self,
        other: &SparseVector<U, J>,
    ) -> SparseVector<SparseVector<<T as Mul<U>>::Output, J>, I>
    where
        T: Clone + Mul<U>,
        U: Clone,
        J: SparseIndex,
    {
        let rows = self
            .data
            .iter()
            .map(|a| other.map(|b| a.clone() * b.clone()))
            .collect();
        SparseVector {
            indices: self.indices.clone(),
            data: rows,
        }
    }

    /// Sum of the stored values.
    pub fn sum(&self) -> T
    where
        T: Clone + Zero,
    {
        self.data
            .iter()
            .fold(T::zero(), |acc, v| acc + v.clone())
    }
}

impl<T: One, I: SparseIndex> SparseVector<T, I> {
    /// The vector with a single one at `index`.
    pub fn unit_vector(index: I) -> Self {
        SparseVector {
            indices: vec![index],
            data: vec![T::one()],
        }
    }

    /// The vector of ones at indices `0..n`.
    pub fn full_vector(n: usize) -> Self {
        SparseVector {
            indices: (0..n).map(I::from_position).collect(),
            data: (0..n).map(|_| T::one()).collect(),
        }
    }

    /// The `n × n` identity as a sparse vector of sparse vectors.
    pub fn identity(n: usize) -> SparseVector<SparseVector<T, I>, I> {
        let indices: Vec<I> = (0..n).map(I::from_position).collect();
        let rows = indices.iter().map(|&i| Self::unit_vector(i)).collect();
        SparseVector {
            indices,
            data: rows,
        }
    }
}

/// Sum of the stored values of `a`.
pub fn sum<T, I>(a: &SparseVector<T, I>) -> T
where
    T: Clone + Zero,
    I: SparseIndex,
{
    a.sum()
}

/// Transpose of a sparse matrix.
///
/// # Panics
///
/// Always: transposition of nested sparse vectors is not implemented.
pub fn transpose<T, I, J>(
    _a: &SparseVector<SparseVector<T, J>, I>,
) -> SparseVector<SparseVector<T, I>, J>
where
    I: SparseIndex,
    J: SparseIndex,
{
    unimplemented!("transpose of a nested SparseVector is not implemented")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sv(pairs: &[(u32, f64)]) -> SparseVector<f64, u32> {
        SparseVector::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn from_pairs_sorts() {
        let a = sv(&[(4, 5.0), (1, 3.0)]);
        assert_eq!(a.nude_indices(), &[1, 4]);
        assert_eq!(a.nude_data(), &[3.0, 5.0]);
    }

    #[test]
    fn from_pairs_rejects_duplicates() {
        let err = SparseVector::<f64, u32>::from_pairs([(2, 1.0), (2, 3.0)]).unwrap_err();
        assert_eq!(
            err,
            SparseError::DuplicateIndex {
                index: "2".to_string()
            }
        );
    }

    #[test]
    fn from_parts_validates() {
        assert_eq!(
            SparseVector::<f64, u32>::from_parts(vec![1, 2], vec![1.0]).unwrap_err(),
            SparseError::LengthMismatch { indices: 2, data: 1 }
        );
        assert_eq!(
            SparseVector::<f64, u32>::from_parts(vec![1, 3, 3], vec![1.0, 2.0, 3.0]).unwrap_err(),
            SparseError::UnsortedIndices { position: 2 }
        );
    }

    #[test]
    fn insert_keeps_order() {
        let mut a = sv(&[(1, 1.0), (5, 5.0)]);
        *a.insert(3) += 3.0;
        *a.insert(5) += 1.0;
        assert_eq!(a.nude_indices(), &[1, 3, 5]);
        assert_eq!(a.nude_data(), &[1.0, 3.0, 6.0]);
        assert!(a.check_invariants().is_ok());
    }

    #[test]
    fn resize_then_assign_indices() {
        let mut a = SparseVector::<f64, u32>::new();
        a.resize(3);
        for i in 0..3 {
            *a.raw_index_mut(i) = 2 * i as u32;
            *a.raw_at_mut(i) = i as f64;
        }
        assert!(a.check_invariants().is_ok());
        assert_eq!(a.get(4), Some(&2.0));
        assert_eq!(a.get(3), None);
    }

    #[test]
    fn display_lists_pairs() {
        let a = sv(&[(1, 3.0), (4, 5.0)]);
        assert_eq!(a.to_string(), "{(1, 3), (4, 5)}");
        assert_eq!(SparseVector::<f64, u32>::new().to_string(), "{}");
    }

    #[test]
    fn dot_skips_missing_neighbours() {
        // Index 4 is past the end of b and index 3 of c sits between stored
        // entries: neither may pick up a neighbouring value.
        let a = sv(&[(1, 3.0), (4, 5.0)]);
        let b = sv(&[(1, 2.0), (2, 7.0)]);
        let c = sv(&[(3, 1.0)]);
        assert_eq!(a.dot(&b), 6.0);
        assert_eq!(c.dot(&b), 0.0);
    }

    #[test]
    fn dot_across_index_types() {
        let a = sv(&[(2, 3.0), (300, 4.0), (70_000, 5.0)]);
        let b: SparseVector<f64, u8> = SparseVector::from_pairs([(2_u8, 0.5), (44, 9.0)]).unwrap();
        // 300 and 70_000 do not fit u8 and cannot match anything in b.
        assert_eq!(a.dot(&b), 1.5);
        assert_eq!(b.dot(&a), 1.5);
    }

    #[test]
    fn full_and_unit_vectors() {
        let f = SparseVector::<f64, u32>::full_vector(3);
        assert_eq!(f.nude_indices(), &[0, 1, 2]);
        assert_eq!(f.sum(), 3.0);
        let u = SparseVector::<f64, u16>::unit_vector(7);
        assert_eq!(u.get(7), Some(&1.0));
        assert_eq!(u.len(), 1);
    }

    #[test]
    fn convert_changes_types() {
        let a: SparseVector<f32, u8> = SparseVector::from_pairs([(3u8, 1.5f32)]).unwrap();
        let b: SparseVector<f64, u64> = a.convert();
        assert_eq!(b.nude_indices(), &[3u64]);
        assert_eq!(b.nude_data(), &[1.5f64]);
    }
}
