//! Forward-mode dual numbers with a pluggable derivative container.
//!
//! [`DualNumber<F, D>`] pairs a primal value with the derivatives of that value
//! with respect to every independent variable. `D` decides how the
//! derivatives are stored: dense lanes ([`DenseDual`]) or a sparse vector
//! ([`SparseDual`]) holding only the slots that were touched.

use std::fmt::{self, Debug, Display};

use crate::float::Float;
use crate::sparse_vector::SparseVector;
use crate::tangent::Tangent;

/// Forward-mode dual number: a value and its derivatives.
///
/// `DualNumber { re, eps }` represents `re + Σ_k eps[k]·ε_k` with `ε_j ε_k = 0`.
#[derive(Clone, Copy)]
pub struct DualNumber<F: Float, D: Tangent<F>> {
    /// Primal (real) value.
    pub re: F,
    /// Derivatives, one per slot.
    pub eps: D,
}

/// Dual number with `N` dense derivative lanes.
pub type DenseDual<F, const N: usize> = DualNumber<F, [F; N]>;

/// Dual number whose derivatives are a sparse vector indexed by `I`.
pub type SparseDual<F, I = u32> = DualNumber<F, SparseVector<F, I>>;

/// Sparse-derivative dual number over `f64`.
pub type SparseDual64 = SparseDual<f64, u32>;

impl<F: Float, D: Tangent<F>> Default for DualNumber<F, D> {
    fn default() -> Self {
        DualNumber::constant(F::zero())
    }
}

impl<F: Float, D: Tangent<F> + Debug> Debug for DualNumber<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualNumber")
            .field("re", &self.re)
            .field("eps", &self.eps)
            .finish()
    }
}

impl<F: Float, D: Tangent<F> + Debug> Display for DualNumber<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {:?}\u{03b5}", self.re, self.eps)
    }
}

impl<F: Float, D: Tangent<F>> From<F> for DualNumber<F, D> {
    #[inline]
    fn from(val: F) -> Self {
        DualNumber::constant(val)
    }
}

impl<F: Float, D: Tangent<F>> DualNumber<F, D> {
    /// Create a new dual number.
    #[inline]
    pub fn new(re: F, eps: D) -> Self {
        DualNumber { re, eps }
    }

    /// Create a constant (all derivatives zero).
    #[inline]
    pub fn constant(re: F) -> Self {
        DualNumber { re, eps: D::zeros() }
    }

    /// Create the independent variable number `slot`.
    ///
    /// With dense lanes a `slot` past the last lane seeds nothing.
    ///
    /// # Panics
    ///
    /// For a sparse dual, panics if `slot` does not fit the index type `I`.
    #[inline]
    pub fn variable(re: F, slot: usize) -> Self {
        DualNumber {
            re,
            eps: D::unit(slot),
        }
    }

    /// Chain rule: given `f(self.re)` and `f'(self.re)`, produce the dual result.
    #[inline]
    fn chain(&self, f_val: F, f_deriv: F) -> Self {
        DualNumber {
            re: f_val,
            eps: self.eps.scale(f_deriv),
        }
    }

    // -- Powers --

    #[inline]
    pub fn recip(&self) -> Self {
        let inv = F::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    #[inline]
    pub fn sqrt(&self) -> Self {
        let s = self.re.sqrt();
        let two = F::one() + F::one();
        self.chain(s, F::one() / (two * s))
    }

    #[inline]
    pub fn cbrt(&self) -> Self {
        let c = self.re.cbrt();
        let three = F::one() + F::one() + F::one();
        self.chain(c, F::one() / (three * c * c))
    }

    #[inline]
    pub fn powi(&self, n: i32) -> Self {
        let val = self.re.powi(n);
        let n_f = F::from_i32(n).unwrap_or_else(F::nan);
        self.chain(val, n_f * self.re.powi(n - 1))
    }

    #[inline]
    pub fn powf(&self, n: &Self) -> Self {
        // d(x^y) = y x^(y-1) dx + x^y ln(x) dy
        let val = self.re.powf(n.re);
        DualNumber {
            re: val,
            eps: self
                .eps
                .combine(val * n.re / self.re, &n.eps, val * self.re.ln()),
        }
    }

    // -- Exp/Log --

    #[inline]
    pub fn exp(&self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn exp2(&self) -> Self {
        let e = self.re.exp2();
        self.chain(e, e * F::LN_2())
    }

    #[inline]
    pub fn ln(&self) -> Self {
        self.chain(self.re.ln(), F::one() / self.re)
    }

    #[inline]
    pub fn log2(&self) -> Self {
        self.chain(self.re.log2(), F::one() / (self.re * F::LN_2()))
    }

    #[inline]
    pub fn log10(&self) -> Self {
        self.chain(self.re.log10(), F::one() / (self.re * F::LN_10()))
    }

    // -- Trig --

    #[inline]
    pub fn sin(&self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(&self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    #[inline]
    pub fn tan(&self) -> Self {
        let c = self.re.cos();
        self.chain(self.re.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn asin(&self) -> Self {
        self.chain(
            self.re.asin(),
            F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn acos(&self) -> Self {
        self.chain(
            self.re.acos(),
            -F::one() / (F::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn atan(&self) -> Self {
        self.chain(self.re.atan(), F::one() / (F::one() + self.re * self.re))
    }

    #[inline]
    pub fn atan2(&self, other: &Self) -> Self {
        // d atan2(y, x) = (x dy - y dx) / (x² + y²)
        let denom = self.re * self.re + other.re * other.re;
        DualNumber {
            re: self.re.atan2(other.re),
            eps: self
                .eps
                .combine(other.re / denom, &other.eps, -self.re / denom),
        }
    }

    // -- Hyperbolic --

    #[inline]
    pub fn sinh(&self) -> Self {
        self.chain(self.re.sinh(), self.re.cosh())
    }

    #[inline]
    pub fn cosh(&self) -> Self {
        self.chain(self.re.cosh(), self.re.sinh())
    }

    #[inline]
    pub fn tanh(&self) -> Self {
        let c = self.re.cosh();
        self.chain(self.re.tanh(), F::one() / (c * c))
    }

    // -- Misc --

    #[inline]
    pub fn abs(&self) -> Self {
        self.chain(self.re.abs(), self.re.signum())
    }

    #[inline]
    pub fn signum(&self) -> Self {
        DualNumber::constant(self.re.signum())
    }

    #[inline]
    pub fn hypot(&self, other: &Self) -> Self {
        let h = self.re.hypot(other.re);
        DualNumber {
            re: h,
            eps: self.eps.combine(self.re / h, &other.eps, other.re / h),
        }
    }

    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        if self.re >= other.re {
            self.clone()
        } else {
            other.clone()
        }
    }

    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        if self.re <= other.re {
            self.clone()
        } else {
            other.clone()
        }
    }
}
