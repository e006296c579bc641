use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dual::DualNumber;
use crate::float::Float;
use crate::tangent::Tangent;

// ──────────────────────────────────────────────
//  DualNumber ⊕ DualNumber
// ──────────────────────────────────────────────

impl<'a, F: Float, D: Tangent<F>> Add for &'a DualNumber<F, D> {
    type Output = DualNumber<F, D>;
    #[inline]
    fn add(self, rhs: Self) -> DualNumber<F, D> {
        DualNumber {
            re: self.re + rhs.re,
            eps: self.eps.combine(F::one(), &rhs.eps, F::one()),
        }
    }
}

impl<'a, F: Float, D: Tangent<F>> Sub for &'a DualNumber<F, D> {
    type Output = DualNumber<F, D>;
    #[inline]
    fn sub(self, rhs: Self) -> DualNumber<F, D> {
        DualNumber {
            re: self.re - rhs.re,
            eps: self.eps.combine(F::one(), &rhs.eps, -F::one()),
        }
    }
}

impl<'a, F: Float, D: Tangent<F>> Mul for &'a DualNumber<F, D> {
    type Output = DualNumber<F, D>;
    #[inline]
    fn mul(self, rhs: Self) -> DualNumber<F, D> {
        DualNumber {
            re: self.re * rhs.re,
            eps: self.eps.combine(rhs.re, &rhs.eps, self.re),
        }
    }
}

impl<'a, F: Float, D: Tangent<F>> Div for &'a DualNumber<F, D> {
    type Output = DualNumber<F, D>;
    #[inline]
    fn div(self, rhs: Self) -> DualNumber<F, D> {
        let inv = F::one() / rhs.re;
        DualNumber {
            re: self.re * inv,
            eps: self.eps.combine(inv, &rhs.eps, -self.re * inv * inv),
        }
    }
}

impl<'a, F: Float, D: Tangent<F>> Neg for &'a DualNumber<F, D> {
    type Output = DualNumber<F, D>;
    #[inline]
    fn neg(self) -> DualNumber<F, D> {
        DualNumber {
            re: -self.re,
            eps: self.eps.scale(-F::one()),
        }
    }
}

// By-value forms forward to the by-reference ones.
macro_rules! impl_dual_by_value {
    ($trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<F: Float, D: Tangent<F>> $trait for DualNumber<F, D> {
            type Output = Self;
            #[inline]
            fn $method(self, rhs: Self) -> Self {
                (&self).$method(&rhs)
            }
        }

        impl<F: Float, D: Tangent<F>> $assign for DualNumber<F, D> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

impl_dual_by_value!(Add, add, AddAssign, add_assign);
impl_dual_by_value!(Sub, sub, SubAssign, sub_assign);
impl_dual_by_value!(Mul, mul, MulAssign, mul_assign);
impl_dual_by_value!(Div, div, DivAssign, div_assign);

impl<F: Float, D: Tangent<F>> Neg for DualNumber<F, D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        -&self
    }
}

// ──────────────────────────────────────────────
//  DualNumber ⊕ primitive float
// ──────────────────────────────────────────────

macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl<D: Tangent<$f>> Add<$f> for DualNumber<$f, D> {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn add(self, rhs: $f) -> DualNumber<$f, D> {
                DualNumber {
                    re: self.re + rhs,
                    eps: self.eps,
                }
            }
        }

        impl<D: Tangent<$f>> Add<DualNumber<$f, D>> for $f {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn add(self, rhs: DualNumber<$f, D>) -> DualNumber<$f, D> {
                DualNumber {
                    re: self + rhs.re,
                    eps: rhs.eps,
                }
            }
        }

        impl<D: Tangent<$f>> Sub<$f> for DualNumber<$f, D> {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn sub(self, rhs: $f) -> DualNumber<$f, D> {
                DualNumber {
                    re: self.re - rhs,
                    eps: self.eps,
                }
            }
        }

        impl<D: Tangent<$f>> Sub<DualNumber<$f, D>> for $f {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn sub(self, rhs: DualNumber<$f, D>) -> DualNumber<$f, D> {
                DualNumber {
                    re: self - rhs.re,
                    eps: rhs.eps.scale(-1.0),
                }
            }
        }

        impl<D: Tangent<$f>> Mul<$f> for DualNumber<$f, D> {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn mul(self, rhs: $f) -> DualNumber<$f, D> {
                DualNumber {
                    re: self.re * rhs,
                    eps: self.eps.scale(rhs),
                }
            }
        }

        impl<D: Tangent<$f>> Mul<DualNumber<$f, D>> for $f {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn mul(self, rhs: DualNumber<$f, D>) -> DualNumber<$f, D> {
                DualNumber {
                    re: self * rhs.re,
                    eps: rhs.eps.scale(self),
                }
            }
        }

        impl<D: Tangent<$f>> Div<$f> for DualNumber<$f, D> {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn div(self, rhs: $f) -> DualNumber<$f, D> {
                let inv = 1.0 / rhs;
                DualNumber {
                    re: self.re * inv,
                    eps: self.eps.scale(inv),
                }
            }
        }

        impl<D: Tangent<$f>> Div<DualNumber<$f, D>> for $f {
            type Output = DualNumber<$f, D>;
            #[inline]
            fn div(self, rhs: DualNumber<$f, D>) -> DualNumber<$f, D> {
                let inv = 1.0 / rhs.re;
                DualNumber {
                    re: self * inv,
                    eps: rhs.eps.scale(-self * inv * inv),
                }
            }
        }

        impl<D: Tangent<$f>> AddAssign<$f> for DualNumber<$f, D> {
            #[inline]
            fn add_assign(&mut self, rhs: $f) {
                self.re += rhs;
            }
        }

        impl<D: Tangent<$f>> SubAssign<$f> for DualNumber<$f, D> {
            #[inline]
            fn sub_assign(&mut self, rhs: $f) {
                self.re -= rhs;
            }
        }

        impl<D: Tangent<$f>> MulAssign<$f> for DualNumber<$f, D> {
            #[inline]
            fn mul_assign(&mut self, rhs: $f) {
                self.re *= rhs;
                self.eps = self.eps.scale(rhs);
            }
        }

        impl<D: Tangent<$f>> DivAssign<$f> for DualNumber<$f, D> {
            #[inline]
            fn div_assign(&mut self, rhs: $f) {
                let inv = 1.0 / rhs;
                self.re *= inv;
                self.eps = self.eps.scale(inv);
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

impl<F: Float, D: Tangent<F>> PartialEq for DualNumber<F, D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re
    }
}

impl<F: Float, D: Tangent<F>> PartialOrd for DualNumber<F, D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.re.partial_cmp(&other.re)
    }
}
