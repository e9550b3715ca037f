//! Error type shared by every operation in the crate.

use thiserror::Error;

/// Errors that can occur while building fields or computing in them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A mathematical precondition does not hold (non-prime modulus,
    /// degenerate polynomial, non-square group size, order of zero).
    #[error("Domain error: {0}")]
    Domain(String),

    /// Operands belong to different fields or prime moduli.
    #[error("Operands belong to different fields: {0}")]
    Mismatch(String),

    /// A coefficient vector is longer than the extension degree.
    #[error("Element has {got} coefficients but the field degree is {max}")]
    Degree { max: usize, got: usize },

    /// Division by, or inversion of, the zero element.
    #[error("Division by zero")]
    DivideByZero,

    /// The value shares a factor with the modulus.
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: u64, modulus: u64 },

    /// An exhaustive search finished without a result.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input rejected by the extended Euclidean algorithm.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
