//! Baby-step giant-step discrete logarithms in GF(p^n)*.
//!
//! Given `g` and `h`, finds `x` with `g^x = h`. With `m = sqrt(p^n)` every
//! `x < m^2` can be written `x = j*m + i` with `0 <= i, j < m`, and
//!
//! ```text
//! g^(j*m + i) = h  <=>  h * g^(-j*m) = g^i
//! ```
//!
//! so it is enough to tabulate `g^i` for `i < m` (baby steps) and probe the
//! table with `h * (g^-m)^j` for `j < m` (giant steps). Both phases are
//! `O(m)` in time and the table is `O(m)` in space.
//!
//! This implementation sizes `m` from the field size, which must therefore
//! be a perfect square.

use hashbrown::HashMap;

use crate::element::FiniteFieldElement;
use crate::error::{FieldError, Result};
use crate::field::FiniteField;
use crate::prime::{add_mod, mul_mod};
use crate::primes::exact_sqrt;

/// Baby-step lookup table.
///
/// Coefficient vectors are bucketed by a cheap integer key (their base-p
/// value reduced mod the bucket count). The key only narrows the search;
/// lookups always compare full vectors within the bucket.
#[derive(Debug, Clone)]
pub struct BabyStepTable {
    buckets: HashMap<u64, Vec<(u64, Vec<u64>)>>,
    weights: Vec<u64>,
    bucket_count: u64,
    len: usize,
}

impl BabyStepTable {
    /// Creates an empty table for vectors over GF(`p`) of length `degree`.
    pub fn new(p: u64, degree: usize, bucket_count: u64) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut weights = Vec::with_capacity(degree);
        let mut weight = 1 % bucket_count;
        for _ in 0..degree {
            weights.push(weight);
            weight = mul_mod(weight, p, bucket_count);
        }
        Self {
            buckets: HashMap::with_capacity(bucket_count.min(1 << 20) as usize),
            weights,
            bucket_count,
            len: 0,
        }
    }

    /// `sum(v_i * p^i) mod bucket_count`.
    pub fn key(&self, vector: &[u64]) -> u64 {
        vector
            .iter()
            .zip(&self.weights)
            .fold(0, |acc, (&v, &w)| {
                add_mod(acc, mul_mod(v, w, self.bucket_count), self.bucket_count)
            })
    }

    /// Records `vector` at `exponent` unless the exact vector is already present.
    ///
    /// Returns `false` when an earlier exponent is kept instead.
    pub fn insert(&mut self, exponent: u64, vector: &[u64]) -> bool {
        let key = self.key(vector);
        let bucket = self.buckets.entry(key).or_default();
        if bucket.iter().any(|(_, stored)| stored == vector) {
            return false;
        }
        bucket.push((exponent, vector.to_vec()));
        self.len += 1;
        true
    }

    /// Exponent recorded for exactly this vector.
    pub fn get(&self, vector: &[u64]) -> Option<u64> {
        self.buckets
            .get(&self.key(vector))?
            .iter()
            .find(|(_, stored)| stored == vector)
            .map(|&(exponent, _)| exponent)
    }

    /// Number of distinct vectors stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Solves `g^x = h` in the multiplicative group of `field`.
///
/// Returns the smallest `x` in `[0, p^n)` with `g^x = h`.
///
/// # Errors
/// * `FieldError::Mismatch` - `g` or `h` does not belong to `field`
/// * `FieldError::Domain` - `p^n` is not a perfect square (checked before
///   any baby step is computed)
/// * `FieldError::DivideByZero` - `g` is zero
/// * `FieldError::NotFound` - `h` is not in the subgroup generated by `g`
///
/// # Examples
/// ```
/// use fieldlog_galois::{bsgs, FiniteField};
///
/// let field = FiniteField::new(7, &[3, 6, 1]).unwrap();
/// let g = field.find_generator().unwrap();
/// let h = g.pow(29).unwrap();
/// assert_eq!(bsgs(&field, &g, &h).unwrap(), 29);
/// ```
pub fn bsgs(
    field: &FiniteField,
    g: &FiniteFieldElement<'_>,
    h: &FiniteFieldElement<'_>,
) -> Result<u64> {
    if g.field() != field || h.field() != field {
        return Err(FieldError::Mismatch(format!(
            "g and h must both belong to {}",
            field
        )));
    }

    let m = exact_sqrt(field.field_size()).ok_or_else(|| {
        FieldError::Domain(format!(
            "group size must be a perfect square, got {}",
            field.field_size()
        ))
    })?;
    let m_exp = i64::try_from(m)
        .map_err(|_| FieldError::Domain(format!("step size {} is too large", m)))?;

    let table = baby_steps(field, g, m)?;
    log::debug!(
        "baby steps: {} distinct powers of {} for m = {}",
        table.len(),
        g,
        m
    );

    let giant = g.pow(-m_exp)?;
    let mut probe = h.clone();
    for j in 0..m {
        if let Some(i) = table.get(probe.coefficients()) {
            let x = j * m + i;
            log::debug!("giant step {} matched baby step {}: x = {}", j, i, x);
            return Ok(x);
        }
        probe = probe.try_mul(&giant)?;
    }

    Err(FieldError::NotFound(format!(
        "{} is not in the cyclic subgroup generated by {}",
        h, g
    )))
}

/// Tabulates `g^i` for `i` in `[0, m)`, keeping the first exponent per value.
fn baby_steps(field: &FiniteField, g: &FiniteFieldElement<'_>, m: u64) -> Result<BabyStepTable> {
    let mut table = BabyStepTable::new(field.prime(), field.degree(), m);
    let mut power = field.one();
    for i in 0..m {
        if !table.insert(i, power.coefficients()) {
            log::trace!("baby step {} repeats an earlier power", i);
        }
        power = power.try_mul(g)?;
    }
    Ok(table)
}
