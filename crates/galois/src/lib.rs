//! Arithmetic over finite fields GF(p^n) and baby-step giant-step discrete
//! logarithms in their multiplicative groups.
//!
//! A [`FiniteField`] is built once from a prime `p` and an irreducible
//! polynomial of degree `n`; [`FiniteFieldElement`]s borrow it and carry both
//! their coefficient vector and the matrix of multiplication by themselves.
//!
//! ```
//! use fieldlog_galois::{bsgs, FiniteField};
//!
//! let field = FiniteField::new(7, &[3, 6, 1]).unwrap();
//! let g = field.find_generator().unwrap();
//! let h = field.element(&[4, 5]).unwrap();
//!
//! let x = bsgs(&field, &g, &h).unwrap();
//! assert_eq!(g.pow(x as i64).unwrap(), h);
//! ```

pub mod dlog;
pub mod element;
mod error;
pub mod field;
pub mod matrix;
pub mod prime;
pub mod primes;
mod xgcd;

pub use dlog::{bsgs, BabyStepTable};
pub use element::FiniteFieldElement;
pub use error::{FieldError, Result};
pub use field::{Elements, FiniteField};
pub use matrix::SquareMatrix;
pub use prime::PrimeFieldElement;
pub use primes::is_prime;
pub use xgcd::xgcd;
