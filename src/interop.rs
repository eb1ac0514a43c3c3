//! # interop.rs
//!
//! Trait implementations connecting [`Complex`] to the rest of the numeric
//! ecosystem:
//!
//! - conversions from `f64` and `(f64, f64)`,
//! - `num_traits::{Zero, One}` identities,
//! - `approx` tolerance comparisons, for computed values whose exact
//!   equality is spoiled by rounding,
//! - conversions to and from `num_complex::Complex64` (feature `num-complex`).

use crate::complex::Complex;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::identities::{One, Zero};

impl From<f64> for Complex {
    fn from(r: f64) -> Self {
        Complex::from_real(r)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Complex::new(real, imaginary)
    }
}

impl From<Complex> for (f64, f64) {
    fn from(z: Complex) -> Self {
        (z.real(), z.imaginary())
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Complex::ZERO
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::ONE
    }
}

/// Component-wise absolute difference comparison.
impl AbsDiffEq for Complex {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.real(), &other.real(), epsilon)
            && f64::abs_diff_eq(&self.imaginary(), &other.imaginary(), epsilon)
    }
}

impl RelativeEq for Complex {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.real(), &other.real(), epsilon, max_relative)
            && f64::relative_eq(&self.imaginary(), &other.imaginary(), epsilon, max_relative)
    }
}

impl UlpsEq for Complex {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.real(), &other.real(), epsilon, max_ulps)
            && f64::ulps_eq(&self.imaginary(), &other.imaginary(), epsilon, max_ulps)
    }
}

#[cfg(feature = "num-complex")]
impl From<Complex> for num_complex::Complex64 {
    fn from(z: Complex) -> Self {
        num_complex::Complex64::new(z.real(), z.imaginary())
    }
}

#[cfg(feature = "num-complex")]
impl From<num_complex::Complex64> for Complex {
    fn from(z: num_complex::Complex64) -> Self {
        Complex::new(z.re, z.im)
    }
}
