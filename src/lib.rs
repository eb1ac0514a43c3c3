//! # zplane
//!
//! `zplane` provides [`Complex`], an immutable double-precision complex
//! number intended as a drop-in numeric primitive for iterative numeric
//! algorithms such as escape-time fractal evaluation.
//!
//! ## Overview
//! - Construction with [`Complex::new`], [`Complex::from_real`] and the
//!   unit-circle constructor [`Complex::rotation`].
//! - Named constants [`Complex::ZERO`], [`Complex::ONE`] and [`Complex::I`].
//! - Unary operations: `negate`, `conjugate`, `reciprocal`,
//!   `squared_modulus`, `modulus`.
//! - Binary operations: `add`, `subtract`, `multiply`, `divide`, `scale`,
//!   also available as `+`, `-`, `*` (and `*` by an `f64`).
//! - Exact value equality and a consistent hash, so values work as
//!   `HashMap`/`HashSet` keys.
//!
//! ## Error Handling
//! Inverting a value whose squared modulus is zero is the only failure in
//! this crate. [`Complex::reciprocal`] and [`Complex::divide`] report it as
//! [`ArithmeticError::DivisionByZero`] instead of yielding `inf` or `NaN`.
//! All other operations are total; special floating-point values propagate
//! through them unchanged.
//!
//! ## Example
//! ```rust
//! use zplane::{ArithmeticError, Complex};
//!
//! let z = Complex::new(1.0, -1.0);
//! assert_eq!(z * Complex::new(-1.0, 0.0), Complex::new(-1.0, 1.0));
//! assert_eq!(z.divide(Complex::new(1.0, 1.0)), Ok(Complex::new(0.0, -1.0)));
//! assert_eq!(Complex::ZERO.reciprocal(), Err(ArithmeticError::DivisionByZero));
//! assert_eq!(Complex::new(-12.0, 10.0).to_string(), "Complex{real=-12.0, imaginary=10.0}");
//! ```
//!
//! ## Comparing Computed Values
//! Equality is exact, so results of different computation paths may differ
//! in the last bits. [`Complex`] implements the `approx` traits for
//! tolerance-based comparison:
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use zplane::Complex;
//!
//! let z = Complex::rotation(std::f64::consts::FRAC_PI_4);
//! let half_sqrt_2 = std::f64::consts::FRAC_1_SQRT_2;
//! assert_abs_diff_eq!(z, Complex::new(half_sqrt_2, half_sqrt_2), epsilon = 1.0e-12);
//! ```
//!
//! ## Logging
//! Rejected divisions are reported through the [`log`] facade at `debug`
//! level under the `zplane` target. No logger is installed by this crate.
//!
//! ## Features
//! - `num-complex` (default): conversions to and from
//!   `num_complex::Complex64`.
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

mod complex;
pub mod error;
mod interop;
mod operators;

pub use complex::Complex;
pub use error::ArithmeticError;
