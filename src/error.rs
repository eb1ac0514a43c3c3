//! # error.rs
//!
//! Error types for complex arithmetic.

use thiserror::Error;

/// Failure of an arithmetic operation on [`Complex`](crate::Complex) values.
///
/// Every other operation of the crate is total; only inversion of a value
/// with a zero squared modulus is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor (or the value being inverted) has a squared modulus of zero.
    #[error("ArithmeticError: division by zero")]
    DivisionByZero,
}
