use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Primitive floating-point types that can be the primal value of a
/// [`DualNumber`](crate::DualNumber).
///
/// Only `f32` and `f64` implement this. Dual numbers and sparse vectors sit
/// above it in the type tower and never do.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
}

impl Float for f32 {}
impl Float for f64 {}
