//! # operators.rs
//!
//! `std::ops` and `std::iter` implementations for [`Complex`].
//!
//! The operator traits forward to the named inherent methods, so `a + b` and
//! `a.add(b)` always agree. Division has no operator because it is fallible;
//! use [`Complex::divide`]. No `*Assign` operators are provided.

use crate::complex::Complex;

use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

macro_rules! binary_operators {
    ($( $op:ident :: $method:ident => $delegate:ident ),+ $(,)? ) => {
        $(
            impl $op for Complex {
                type Output = Complex;

                fn $method(self, rhs: Complex) -> Complex {
                    Complex::$delegate(self, rhs)
                }
            }

            impl<'a> $op<&'a Complex> for Complex {
                type Output = Complex;

                fn $method(self, rhs: &'a Complex) -> Complex {
                    Complex::$delegate(self, *rhs)
                }
            }

            impl<'a> $op<Complex> for &'a Complex {
                type Output = Complex;

                fn $method(self, rhs: Complex) -> Complex {
                    Complex::$delegate(*self, rhs)
                }
            }

            impl<'a, 'b> $op<&'b Complex> for &'a Complex {
                type Output = Complex;

                fn $method(self, rhs: &'b Complex) -> Complex {
                    Complex::$delegate(*self, *rhs)
                }
            }
        )+
    };
}

binary_operators! {
    Add::add => add,
    Sub::sub => subtract,
    Mul::mul => multiply,
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        self.negate()
    }
}

/// `z * k` scales both components by `k`.
impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, k: f64) -> Complex {
        self.scale(k)
    }
}

/// `k * z` scales both components by `k`.
impl Mul<Complex> for f64 {
    type Output = Complex;

    fn mul(self, z: Complex) -> Complex {
        z.scale(self)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, Complex::add)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, z| acc.add(*z))
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, Complex::multiply)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, z| acc.multiply(*z))
    }
}
