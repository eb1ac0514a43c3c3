//! # complex.rs
//!
//! The [`Complex`] value type: construction, accessors, arithmetic and the
//! unit-circle constructor [`Complex::rotation`].
//!
//! Every operation takes `self` by value and returns a new value. The only
//! fallible operations are [`Complex::reciprocal`] and [`Complex::divide`],
//! which reject a divisor whose squared modulus is zero.

use crate::error::ArithmeticError;

use ordered_float::OrderedFloat;
use std::fmt;
use std::hash::{Hash, Hasher};

const LOG_TARGET: &str = "zplane";

/// An immutable complex number with `f64` real and imaginary parts.
///
/// Equality is exact on both components, with two refinements that make it
/// a lawful `Eq`: `0.0` equals `-0.0`, and `NaN` equals `NaN`. Hashing is
/// consistent with that equality, so values can be used as map keys.
///
/// # Examples
///
/// ```
/// use zplane::Complex;
///
/// let z = Complex::new(1.0, 1.0).add(Complex::new(0.0, -1.0));
/// assert_eq!(z, Complex::ONE);
/// assert_eq!(z.to_string(), "Complex{real=1.0, imaginary=0.0}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// The imaginary unit, `0 + 1i`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Creates a complex number from its components.
    ///
    /// No validation is done: `NaN` and infinite components are accepted.
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Creates the complex number `r + 0i`.
    pub const fn from_real(r: f64) -> Self {
        Self::new(r, 0.0)
    }

    /// Returns the point of the unit circle at angle `theta` (radians)
    /// from the positive real axis, i.e. `cos(theta) + i sin(theta)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use approx::assert_abs_diff_eq;
    /// use zplane::Complex;
    ///
    /// let z = Complex::rotation(std::f64::consts::FRAC_PI_2);
    /// assert_abs_diff_eq!(z, Complex::I, epsilon = 1.0e-12);
    /// ```
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin)
    }

    /// Returns the real part.
    pub const fn real(&self) -> f64 {
        self.real
    }

    /// Returns the imaginary part.
    pub const fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Returns `-z`.
    pub fn negate(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }

    /// Returns the complex conjugate `real - i imaginary`.
    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// Returns `real² + imaginary²`.
    pub fn squared_modulus(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// Returns the Euclidean magnitude `√(real² + imaginary²)`.
    pub fn modulus(self) -> f64 {
        self.squared_modulus().sqrt()
    }

    /// Returns the multiplicative inverse `1 / z`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the squared modulus of
    /// `self` is zero.
    pub fn reciprocal(self) -> Result<Self, ArithmeticError> {
        let d = self.squared_modulus();
        if d == 0.0 {
            log::debug!(target: LOG_TARGET, "reciprocal of {} rejected: squared modulus is zero", self);
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::new(self.real / d, -self.imaginary / d))
    }

    /// Returns the component-wise sum.
    pub fn add(self, other: Self) -> Self {
        Self::new(self.real + other.real, self.imaginary + other.imaginary)
    }

    /// Returns the component-wise difference.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.real - other.real, self.imaginary - other.imaginary)
    }

    /// Returns the complex product.
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.real * other.real - self.imaginary * other.imaginary,
            self.real * other.imaginary + self.imaginary * other.real,
        )
    }

    /// Returns `self / other`, computed as `self * conj(other) / |other|²`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the squared modulus of
    /// `other` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use zplane::{ArithmeticError, Complex};
    ///
    /// let q = Complex::new(1.0, -1.0).divide(Complex::new(1.0, 1.0));
    /// assert_eq!(q, Ok(Complex::new(0.0, -1.0)));
    /// assert_eq!(Complex::ONE.divide(Complex::ZERO), Err(ArithmeticError::DivisionByZero));
    /// ```
    pub fn divide(self, other: Self) -> Result<Self, ArithmeticError> {
        let d = other.squared_modulus();
        if d == 0.0 {
            log::debug!(target: LOG_TARGET, "division of {} rejected: divisor has zero squared modulus", self);
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self.multiply(other.conjugate()).scale(1.0 / d))
    }

    /// Multiplies both components by the real scalar `k`.
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.real * k, self.imaginary * k)
    }

    fn key(&self) -> [OrderedFloat<f64>; 2] {
        [OrderedFloat(self.real), OrderedFloat(self.imaginary)]
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing ".0" on integral values
        write!(f, "Complex{{real={:?}, imaginary={:?}}}", self.real, self.imaginary)
    }
}



#[cfg(test)]
mod binary_tests {
    use super::*;
    use crate::test_helpers::{samples, EPSILON};
    use approx::assert_abs_diff_eq;

    const ONE_PLUS_I: Complex = Complex::new(1.0, 1.0);
    const ONE_MINUS_I: Complex = Complex::new(1.0, -1.0);
    const MINUS_I: Complex = Complex::new(0.0, -1.0);
    const MINUS_ONE: Complex = Complex::new(-1.0, 0.0);
    const TWO_I: Complex = Complex::new(0.0, 2.0);
    const TWO: Complex = Complex::new(2.0, 0.0);

    #[test]
    fn test_add() {
        assert_eq!(ONE_PLUS_I.add(MINUS_I), Complex::new(1.0, 0.0));
        assert_eq!(ONE_PLUS_I.add(TWO), Complex::new(3.0, 1.0));
        assert_eq!(ONE_MINUS_I.add(MINUS_ONE), Complex::new(0.0, -1.0));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Complex::ZERO.subtract(Complex::ONE), MINUS_ONE);
        assert_eq!(Complex::ONE.subtract(Complex::I), ONE_MINUS_I);
        assert_eq!(ONE_PLUS_I.subtract(MINUS_I), Complex::new(1.0, 2.0));
        assert_eq!(ONE_PLUS_I.subtract(TWO), Complex::new(-1.0, 1.0));
        assert_eq!(ONE_MINUS_I.subtract(MINUS_ONE), Complex::new(2.0, -1.0));
        assert_eq!(
            Complex::new(-12.0, 10.0).subtract(ONE_PLUS_I),
            Complex::new(-13.0, 9.0)
        );
    }

    #[test]
    fn test_multiply() {
        assert_eq!(ONE_PLUS_I.multiply(MINUS_I), Complex::new(1.0, -1.0));
        assert_eq!(ONE_PLUS_I.multiply(TWO), Complex::new(2.0, 2.0));
        assert_eq!(ONE_MINUS_I.multiply(MINUS_ONE), Complex::new(-1.0, 1.0));
        assert_eq!(Complex::I.multiply(Complex::I), MINUS_ONE);
    }

    #[test]
    fn test_identity_elements() {
        for z in samples() {
            assert_eq!(z.add(Complex::ZERO), z);
            assert_eq!(z.multiply(Complex::ONE), z);
        }
    }

    #[test]
    fn test_divide() {
        assert_eq!(ONE_PLUS_I.divide(Complex::ONE), Ok(ONE_PLUS_I));
        assert_eq!(Complex::ONE.divide(TWO), Ok(Complex::new(0.5, 0.0)));
        assert_eq!(ONE_MINUS_I.divide(ONE_PLUS_I), Ok(MINUS_I));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Complex::ONE.divide(Complex::ZERO), Err(ArithmeticError::DivisionByZero));
        assert_eq!(Complex::ZERO.divide(Complex::ZERO), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_divide_by_self() {
        for z in samples() {
            assert_abs_diff_eq!(z.divide(z).unwrap(), Complex::ONE, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_divide_matches_reciprocal() {
        for a in samples() {
            for b in samples() {
                let q = a.divide(b).unwrap();
                let r = a.multiply(b.reciprocal().unwrap());
                assert!(q.subtract(r).modulus() <= 1.0e-12 * q.modulus().max(1.0));
            }
        }
    }

    #[test]
    fn test_divide_propagates_nan() {
        let q = Complex::ONE.divide(Complex::new(f64::NAN, 0.0)).unwrap();
        assert!(q.real().is_nan());
        assert!(q.imaginary().is_nan());
    }

    #[test]
    fn test_scale() {
        assert_eq!(ONE_PLUS_I.scale(-3.0), Complex::new(-3.0, -3.0));
        assert_eq!(MINUS_I.scale(12.0), Complex::new(0.0, -12.0));
        assert_eq!(MINUS_ONE.scale(27.0), Complex::new(-27.0, 0.0));
        assert_eq!(ONE_MINUS_I.scale(-6.0), Complex::new(-6.0, 6.0));
        assert_eq!(TWO_I.scale(30.0), Complex::new(0.0, 60.0));
        assert_eq!(TWO.scale(12.3), Complex::new(24.6, 0.0));
        assert_eq!(ONE_PLUS_I.scale(0.0), Complex::ZERO);
    }

    #[test]
    fn test_infinity_propagates() {
        let z = Complex::new(f64::INFINITY, 0.0).add(Complex::ONE);
        assert_eq!(z, Complex::new(f64::INFINITY, 0.0));
    }
}
