//! GF(p^n) described by an irreducible modulus polynomial.
//!
//! Polynomials are coefficient vectors ordered from the constant term up:
//! `[a_0, a_1, ..., a_n]` is `a_0 + a_1*x + ... + a_n*x^n`.

use crate::element::FiniteFieldElement;
use crate::error::{FieldError, Result};
use crate::prime::{add_mod, check_modulus, inverse_mod, mul_mod, reduce, sub_mod};

/// Degrees up to this bound are checked for irreducibility with a root search.
pub const MAX_CHECKED_DEGREE: usize = 3;

/// The extension field GF(p^n) = GF(p)[x] / (f(x)).
///
/// Irreducibility of `f` is verified exhaustively only for degree 2 and 3,
/// where having no root in GF(p) is equivalent to being irreducible. For
/// higher degrees the caller must supply an irreducible polynomial; a
/// reducible one silently yields a ring, not a field.
#[derive(Debug, Clone)]
pub struct FiniteField {
    p: u64,
    modulus: Vec<u64>,
    monic: Vec<u64>,
    degree: usize,
    field_size: u64,
    reduction: Vec<u64>,
}

impl FiniteField {
    /// Creates GF(p^n) from a prime and the coefficients of `f`.
    ///
    /// # Errors
    /// Returns `FieldError::Domain` if
    /// * `p` is not prime
    /// * `f` has degree zero or a zero leading coefficient mod p
    /// * the constant coefficient of `f` is zero mod p
    /// * `f` has degree at most 3 and a root in GF(p)
    /// * `p^n` does not fit in a `u64`
    ///
    /// # Examples
    /// ```
    /// use fieldlog_galois::FiniteField;
    ///
    /// let field = FiniteField::new(7, &[3, 6, 1]).unwrap();
    /// assert_eq!(field.field_size(), 49);
    /// assert_eq!(field.reduction(), &[4, 1]);
    /// ```
    pub fn new(p: u64, coeffs: &[i64]) -> Result<Self> {
        check_modulus(p)?;

        let modulus: Vec<u64> = coeffs.iter().map(|&c| reduce(c, p)).collect();
        if modulus.len() < 2 {
            return Err(FieldError::Domain(format!(
                "the modulus polynomial {:?} must have degree at least 1",
                coeffs
            )));
        }
        if modulus[0] == 0 {
            return Err(FieldError::Domain(format!(
                "the constant coefficient of {:?} cannot be zero mod {}",
                coeffs, p
            )));
        }
        let leading = modulus[modulus.len() - 1];
        if leading == 0 {
            return Err(FieldError::Domain(format!(
                "the leading coefficient of {:?} cannot be zero mod {}",
                coeffs, p
            )));
        }

        let degree = modulus.len() - 1;
        let field_size = u32::try_from(degree)
            .ok()
            .and_then(|d| p.checked_pow(d))
            .ok_or_else(|| {
                FieldError::Domain(format!("field size {}^{} overflows u64", p, degree))
            })?;

        if degree <= MAX_CHECKED_DEGREE {
            if let Some(root) = (0..p).find(|&x| evaluate(&modulus, x, p) == 0) {
                return Err(FieldError::Domain(format!(
                    "the polynomial {:?} is not irreducible over GF({}): {} is a root",
                    coeffs, p, root
                )));
            }
        } else {
            log::debug!(
                "assuming {:?} is irreducible over GF({}) (degree {} is not checked)",
                coeffs,
                p,
                degree
            );
        }

        let monic = to_monic(&modulus, p)?;
        let reduction = monic[..degree].iter().map(|&c| sub_mod(0, c, p)).collect();

        log::debug!("constructed GF({}^{}) with monic modulus {:?}", p, degree, monic);

        Ok(Self {
            p,
            modulus,
            monic,
            degree,
            field_size,
            reduction,
        })
    }

    /// The characteristic `p`.
    pub fn prime(&self) -> u64 {
        self.p
    }

    /// The extension degree `n`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The modulus polynomial as supplied, reduced mod p.
    pub fn modulus(&self) -> &[u64] {
        &self.modulus
    }

    /// The modulus scaled so its leading coefficient is 1.
    pub fn monic(&self) -> &[u64] {
        &self.monic
    }

    /// Number of elements, `p^n`.
    pub fn field_size(&self) -> u64 {
        self.field_size
    }

    /// Coefficients `c` with `x^n = c_0 + c_1*x + ... + c_{n-1}*x^{n-1}`.
    pub fn reduction(&self) -> &[u64] {
        &self.reduction
    }

    /// Builds an element of this field from signed coefficients.
    pub fn element(&self, coeffs: &[i64]) -> Result<FiniteFieldElement<'_>> {
        FiniteFieldElement::new(self, coeffs)
    }

    /// The additive identity.
    pub fn zero(&self) -> FiniteFieldElement<'_> {
        FiniteFieldElement::from_reduced(self, vec![0; self.degree])
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FiniteFieldElement<'_> {
        let mut coeffs = vec![0; self.degree];
        coeffs[0] = 1;
        FiniteFieldElement::from_reduced(self, coeffs)
    }

    /// Uniformly random element drawn from `rng`.
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> FiniteFieldElement<'_> {
        let coeffs = (0..self.degree).map(|_| rng.gen_range(0..self.p)).collect();
        FiniteFieldElement::from_reduced(self, coeffs)
    }

    /// Every element of the field, in base-p counting order with the
    /// constant coefficient as the least significant digit.
    ///
    /// The iterator is lazy and can be restarted by calling this again or
    /// by cloning it.
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            field: self,
            next: 0,
        }
    }

    /// Finds a generator of the multiplicative group.
    ///
    /// Scans `elements()` skipping zero and one, and returns the first element
    /// whose multiplicative order is `p^n - 1`.
    ///
    /// # Errors
    /// Returns `FieldError::NotFound` if no element has full order, and
    /// propagates `FieldError::Domain` for a candidate with no finite order.
    /// Both only happen when the modulus was not actually irreducible.
    pub fn find_generator(&self) -> Result<FiniteFieldElement<'_>> {
        let group_order = self.field_size - 1;
        for candidate in self.elements() {
            if candidate.is_zero() || candidate.is_one() {
                continue;
            }
            let order = candidate.multiplicative_order()?;
            log::trace!("candidate {} has order {}", candidate, order);
            if order == group_order {
                log::debug!("found generator {} of GF({}^{})", candidate, self.p, self.degree);
                return Ok(candidate);
            }
        }
        Err(FieldError::NotFound(format!(
            "no element of {} has multiplicative order {}",
            self, group_order
        )))
    }
}

impl PartialEq for FiniteField {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.p == other.p && self.monic == other.monic)
    }
}

impl Eq for FiniteField {}

impl std::fmt::Display for FiniteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GF({}^{}) with modulus {:?}",
            self.p, self.degree, self.monic
        )
    }
}

/// Lazy enumeration of all `p^n` elements of a field.
#[derive(Debug, Clone)]
pub struct Elements<'f> {
    field: &'f FiniteField,
    next: u64,
}

impl<'f> Iterator for Elements<'f> {
    type Item = FiniteFieldElement<'f>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.field.field_size {
            return None;
        }
        let mut index = self.next;
        self.next += 1;

        let p = self.field.p;
        let coeffs = (0..self.field.degree)
            .map(|_| {
                let digit = index % p;
                index /= p;
                digit
            })
            .collect();
        Some(FiniteFieldElement::from_reduced(self.field, coeffs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.field.field_size - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Evaluates a polynomial at `x` modulo `p` using Horner's method.
fn evaluate(coeffs: &[u64], x: u64, p: u64) -> u64 {
    coeffs
        .iter()
        .rev()
        .fold(0, |acc, &c| add_mod(mul_mod(acc, x, p), c, p))
}

/// Scales `coeffs` by the inverse of its leading coefficient.
fn to_monic(coeffs: &[u64], p: u64) -> Result<Vec<u64>> {
    let leading = coeffs[coeffs.len() - 1];
    if leading == 1 {
        return Ok(coeffs.to_vec());
    }
    let inv = inverse_mod(leading, p)?;
    Ok(coeffs.iter().map(|&c| mul_mod(c, inv, p)).collect())
}
