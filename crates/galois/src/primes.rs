//! Small integer helpers: primality and exact square roots.

/// Check if `n` is a prime number.
///
/// Trial division up to sqrt(n). Moduli in this crate are small enough that
/// exhaustive element enumeration is feasible, so this is never the bottleneck.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Floor of the square root of `n`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // Newton iteration from an upper bound; decreases monotonically to floor(sqrt(n)).
    let mut x = n;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Returns `Some(m)` if `n == m * m`.
pub fn exact_sqrt(n: u64) -> Option<u64> {
    let m = isqrt(n);
    (m.checked_mul(m) == Some(n)).then_some(m)
}
