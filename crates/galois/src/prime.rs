//! Scalar arithmetic in the prime field GF(p).

use crate::error::{FieldError, Result};
use crate::primes::is_prime;
use crate::xgcd::xgcd;

/// Largest modulus accepted; keeps every Bezout computation inside `i64` inputs.
pub const MAX_MODULUS: u64 = i64::MAX as u64;

/// Checks that `p` can be used as the characteristic of a field.
pub(crate) fn check_modulus(p: u64) -> Result<()> {
    if p > MAX_MODULUS {
        return Err(FieldError::Domain(format!(
            "modulus {} exceeds the supported maximum {}",
            p, MAX_MODULUS
        )));
    }
    if !is_prime(p) {
        return Err(FieldError::Domain(format!("p ({}) must be prime", p)));
    }
    Ok(())
}

/// Reduces a signed integer into `[0, p)`.
#[inline]
pub(crate) fn reduce(value: i64, p: u64) -> u64 {
    (value as i128).rem_euclid(p as i128) as u64
}

#[inline]
pub(crate) fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 + b as u128) % p as u128) as u64
}

#[inline]
pub(crate) fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 + p as u128 - b as u128) % p as u128) as u64
}

#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

/// Multiplicative inverse of `a` modulo `p` via the extended Euclidean algorithm.
///
/// # Errors
/// * `FieldError::DivideByZero` - `a` is congruent to zero
/// * `FieldError::NotInvertible` - `gcd(a, p) != 1`
pub(crate) fn inverse_mod(a: u64, p: u64) -> Result<u64> {
    let a = a % p;
    if a == 0 {
        return Err(FieldError::DivideByZero);
    }
    let (d, s, _) = xgcd(a as i64, p as i64)?;
    if d != 1 {
        return Err(FieldError::NotInvertible {
            value: a,
            modulus: p,
        });
    }
    Ok(s.rem_euclid(p as i128) as u64)
}

/// An element `a` of GF(p), always normalized into `[0, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeFieldElement {
    value: u64,
    modulus: u64,
}

impl PrimeFieldElement {
    /// Creates `value mod p`.
    ///
    /// # Errors
    /// Returns `FieldError::Domain` if `p` is not prime.
    ///
    /// # Examples
    /// ```
    /// use fieldlog_galois::PrimeFieldElement;
    ///
    /// let a = PrimeFieldElement::new(-3, 7).unwrap();
    /// assert_eq!(a.value(), 4);
    /// ```
    pub fn new(value: i64, p: u64) -> Result<Self> {
        check_modulus(p)?;
        Ok(Self {
            value: reduce(value, p),
            modulus: p,
        })
    }

    /// Builds an element from an already validated modulus.
    pub(crate) fn from_reduced(value: u64, modulus: u64) -> Self {
        Self {
            value: value % modulus,
            modulus,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn check_same_modulus(&self, other: &Self) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(FieldError::Mismatch(format!(
                "GF({}) and GF({})",
                self.modulus, other.modulus
            )));
        }
        Ok(())
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same_modulus(other)?;
        Ok(Self::from_reduced(
            add_mod(self.value, other.value, self.modulus),
            self.modulus,
        ))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_modulus(other)?;
        Ok(Self::from_reduced(
            sub_mod(self.value, other.value, self.modulus),
            self.modulus,
        ))
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_modulus(other)?;
        Ok(Self::from_reduced(
            mul_mod(self.value, other.value, self.modulus),
            self.modulus,
        ))
    }

    /// Computes `self * other^-1`.
    ///
    /// # Errors
    /// * `FieldError::Mismatch` - different moduli
    /// * `FieldError::DivideByZero` - `other` is zero
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.check_same_modulus(other)?;
        if other.is_zero() {
            return Err(FieldError::DivideByZero);
        }
        self.try_mul(&other.inverse()?)
    }

    /// Multiplicative inverse, taken from the Bezout coefficient of `xgcd(a, p)`.
    pub fn inverse(&self) -> Result<Self> {
        Ok(Self::from_reduced(
            inverse_mod(self.value, self.modulus)?,
            self.modulus,
        ))
    }

    pub fn neg(&self) -> Self {
        Self::from_reduced(sub_mod(0, self.value, self.modulus), self.modulus)
    }

    /// Square-and-multiply exponentiation.
    pub fn pow(&self, mut exp: u64) -> Self {
        let mut base = self.value;
        let mut result = 1 % self.modulus;
        while exp > 0 {
            if exp & 1 == 1 {
                result = mul_mod(result, base, self.modulus);
            }
            base = mul_mod(base, base, self.modulus);
            exp >>= 1;
        }
        Self::from_reduced(result, self.modulus)
    }
}

impl std::fmt::Display for PrimeFieldElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}
