//! Value-type introspection and numeric limits through the type tower.

use num_traits::Float as NumFloat;

use crate::dual::DualNumber;
use crate::float::Float;
use crate::index::SparseIndex;
use crate::sparse_vector::SparseVector;
use crate::tangent::Tangent;

/// Strips derivative information, keeping the container structure.
pub trait RawType {
    type Raw;

    fn raw_value(&self) -> Self::Raw;
}

/// The innermost scalar type.
pub trait ValueType {
    type Value;
}

/// Numeric limits of the innermost scalar type.
pub trait NumericLimits {
    type Scalar;

    fn epsilon() -> Self::Scalar;
    fn min_value() -> Self::Scalar;
    fn min_positive_value() -> Self::Scalar;
    fn max_value() -> Self::Scalar;
    fn infinity() -> Self::Scalar;
}

macro_rules! impl_float_limits {
    ($f:ty) => {
        impl RawType for $f {
            type Raw = $f;
            #[inline]
            fn raw_value(&self) -> $f {
                *self
            }
        }

        impl ValueType for $f {
            type Value = $f;
        }

        impl NumericLimits for $f {
            type Scalar = $f;
            #[inline]
            fn epsilon() -> $f {
                <$f as NumFloat>::epsilon()
            }
            #[inline]
            fn min_value() -> $f {
                <$f as NumFloat>::min_value()
            }
            #[inline]
            fn min_positive_value() -> $f {
                <$f as NumFloat>::min_positive_value()
            }
            #[inline]
            fn max_value() -> $f {
                <$f as NumFloat>::max_value()
            }
            #[inline]
            fn infinity() -> $f {
                <$f as NumFloat>::infinity()
            }
        }
    };
}

impl_float_limits!(f32);
impl_float_limits!(f64);

impl<F: Float, D: Tangent<F>> RawType for DualNumber<F, D> {
    type Raw = F;
    #[inline]
    fn raw_value(&self) -> F {
        self.re
    }
}

impl<F: Float, D: Tangent<F>> ValueType for DualNumber<F, D> {
    type Value = F;
}

impl<F: Float, D: Tangent<F>> NumericLimits for DualNumber<F, D> {
    type Scalar = F;
    #[inline]
    fn epsilon() -> F {
        <F as NumFloat>::epsilon()
    }
    #[inline]
    fn min_value() -> F {
        <F as NumFloat>::min_value()
    }
    #[inline]
    fn min_positive_value() -> F {
        <F as NumFloat>::min_positive_value()
    }
    #[inline]
    fn max_value() -> F {
        <F as NumFloat>::max_value()
    }
    #[inline]
    fn infinity() -> F {
        <F as NumFloat>::infinity()
    }
}

impl<T: RawType, I: SparseIndex> RawType for SparseVector<T, I> {
    type Raw = SparseVector<T::Raw, I>;
    #[inline]
    fn raw_value(&self) -> Self::Raw {
        self.map(|v| v.raw_value())
    }
}

impl<T: ValueType, I> ValueType for SparseVector<T, I> {
    type Value = T::Value;
}

impl<T: NumericLimits, I> NumericLimits for SparseVector<T, I> {
    type Scalar = T::Scalar;
    #[inline]
    fn epsilon() -> Self::Scalar {
        T::epsilon()
    }
    #[inline]
    fn min_value() -> Self::Scalar {
        T::min_value()
    }
    #[inline]
    fn min_positive_value() -> Self::Scalar {
        T::min_positive_value()
    }
    #[inline]
    fn max_value() -> Self::Scalar {
        T::max_value()
    }
    #[inline]
    fn infinity() -> Self::Scalar {
        T::infinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::SparseDual64;

    #[test]
    fn limits_forward_to_the_scalar() {
        assert_eq!(<SparseVector<SparseDual64> as NumericLimits>::epsilon(), f64::EPSILON);
        assert_eq!(<DualNumber<f32, [f32; 3]> as NumericLimits>::max_value(), f32::MAX);
        assert!(<SparseVector<f64, u8> as NumericLimits>::infinity().is_infinite());
    }

    #[test]
    fn raw_value_drops_derivatives() {
        let a = SparseVector::<SparseDual64>::from_pairs([
            (0, SparseDual64::variable(1.5, 0)),
            (3, SparseDual64::variable(-2.0, 1)),
        ])
        .unwrap();
        let raw: SparseVector<f64> = a.raw_value();
        assert_eq!(raw.nude_indices(), &[0, 3]);
        assert_eq!(raw.nude_data(), &[1.5, -2.0]);
    }
}
