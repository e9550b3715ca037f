//! Extended Euclidean algorithm.

use crate::error::{FieldError, Result};

/// Computes `(d, s, t)` with `d = gcd(|a|, |b|) = s*a + t*b`.
///
/// The Bezout coefficients are computed on the magnitudes of the inputs and
/// then sign-adjusted to match `a` and `b`. Results are returned as `i128` so
/// that `gcd(i64::MIN, 0)` is representable.
///
/// # Errors
/// Returns `FieldError::InvalidInput` if both inputs are zero.
///
/// # Examples
/// ```
/// use fieldlog_galois::xgcd;
///
/// let (d, s, t) = xgcd(240, 46).unwrap();
/// assert_eq!(d, 2);
/// assert_eq!(s * 240 + t * 46, 2);
/// ```
pub fn xgcd(a: i64, b: i64) -> Result<(i128, i128, i128)> {
    if a == 0 && b == 0 {
        return Err(FieldError::InvalidInput(
            "at least one input must be non-zero".to_string(),
        ));
    }

    let (a, b) = (a as i128, b as i128);
    let (mag_a, mag_b) = (a.abs(), b.abs());

    let (d, mut s, mut t) = if a == 0 || b == 0 {
        (mag_a.max(mag_b), 1, 1)
    } else {
        let (mut old_r, mut r) = (mag_a, mag_b);
        let (mut old_s, mut cur_s) = (1i128, 0i128);
        let (mut old_t, mut cur_t) = (0i128, 1i128);

        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, cur_s) = (cur_s, old_s - q * cur_s);
            (old_t, cur_t) = (cur_t, old_t - q * cur_t);
        }
        (old_r, old_s, old_t)
    };

    if a < 0 {
        s = -s;
    }
    if b < 0 {
        t = -t;
    }

    assert!(
        d > 0 && d == s * a + t * b,
        "extended gcd post-condition violated for ({}, {})",
        a,
        b
    );

    Ok((d, s, t))
}
