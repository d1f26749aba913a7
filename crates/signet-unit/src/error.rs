//! # Numeric Error Types
//!
//! Failure taxonomy shared by [`Int`](crate::Int), [`Uint`](crate::Uint)
//! and [`Dec`](crate::Dec).

use thiserror::Error;

/// Errors produced by construction and arithmetic on bounded numerics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Malformed numeral text (fractional point, invalid digit, empty input).
    #[error("{input:?} is not an integer numeral")]
    Format { input: String },

    /// The 256-bit bound was violated by a constructor or an operation result.
    #[error("integer out of 256-bit range: {value}")]
    Range { value: String },

    /// A negative value was supplied to, or produced by, the unsigned type.
    #[error("unsigned value cannot be negative: {value}")]
    Sign { value: String },

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivideByZero,
}
