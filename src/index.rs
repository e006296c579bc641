//! Integer types usable as sparse indices.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{NumCast, PrimInt};

/// Marker trait for the index type `I` of a [`SparseVector`](crate::SparseVector).
///
/// Indices double as derivative slots (see [`divergence`](crate::divergence)),
/// so every index must round-trip through `usize`.
pub trait SparseIndex:
    PrimInt + Hash + Default + Debug + Display + Send + Sync + 'static
{
    /// Convert a position or derivative slot into an index.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not fit in `Self`.
    #[inline]
    fn from_position(pos: usize) -> Self {
        match <Self as NumCast>::from(pos) {
            Some(i) => i,
            None => panic!(
                "position {} does not fit in index type {}",
                pos,
                std::any::type_name::<Self>()
            ),
        }
    }

    /// Non-panicking variant of [`from_position`](Self::from_position).
    #[inline]
    fn try_from_position(pos: usize) -> Option<Self> {
        <Self as NumCast>::from(pos)
    }

    /// Convert this index into a derivative slot.
    ///
    /// # Panics
    ///
    /// Panics on negative indices.
    #[inline]
    fn to_position(self) -> usize {
        match self.to_usize() {
            Some(p) => p,
            None => panic!("index {} cannot be used as a position", self),
        }
    }
}

impl SparseIndex for u8 {}
impl SparseIndex for u16 {}
impl SparseIndex for u32 {}
impl SparseIndex for u64 {}
impl SparseIndex for usize {}
impl SparseIndex for i32 {}
impl SparseIndex for i64 {}
