//! Elements of GF(p^n) with their multiplication-matrix representation.
//!
//! An element `a` is stored as its coefficient vector together with the
//! matrix of the linear map `v -> a*v` on the basis `1, x, ..., x^(n-1)`.
//! Column `i` of that matrix is the coefficient vector of `a * x^i mod f`,
//! so products and quotients reduce to matrix-vector arithmetic over GF(p).

use crate::error::{FieldError, Result};
use crate::field::FiniteField;
use crate::matrix::SquareMatrix;
use crate::prime::{add_mod, mul_mod, reduce, sub_mod};

/// An element of a [`FiniteField`].
///
/// Elements borrow their field and are immutable; every operation returns a
/// new element. The matrix representation is derived from the coefficients
/// at construction and never set independently.
#[derive(Clone)]
pub struct FiniteFieldElement<'f> {
    field: &'f FiniteField,
    coeffs: Vec<u64>,
    matrix: SquareMatrix,
    is_zero: bool,
}

impl<'f> FiniteFieldElement<'f> {
    /// Creates an element from signed coefficients, lowest degree first.
    ///
    /// Coefficients are reduced mod p and zero-padded to the field degree.
    ///
    /// # Errors
    /// Returns `FieldError::Degree` if there are more coefficients than the
    /// extension degree.
    ///
    /// # Examples
    /// ```
    /// use fieldlog_galois::{FiniteField, FiniteFieldElement};
    ///
    /// let field = FiniteField::new(7, &[3, 6, 1]).unwrap();
    /// let a = FiniteFieldElement::new(&field, &[1, 3]).unwrap();
    /// assert_eq!(a.pow(48).unwrap(), field.one());
    /// ```
    pub fn new(field: &'f FiniteField, coeffs: &[i64]) -> Result<Self> {
        if coeffs.len() > field.degree() {
            return Err(FieldError::Degree {
                max: field.degree(),
                got: coeffs.len(),
            });
        }
        let p = field.prime();
        Ok(Self::from_reduced(
            field,
            coeffs.iter().map(|&c| reduce(c, p)).collect(),
        ))
    }

    /// Builds an element from coefficients already in `[0, p)`.
    pub(crate) fn from_reduced(field: &'f FiniteField, mut coeffs: Vec<u64>) -> Self {
        debug_assert!(coeffs.len() <= field.degree());
        coeffs.resize(field.degree(), 0);
        let is_zero = coeffs.iter().all(|&c| c == 0);
        let matrix = multiplication_matrix(field, &coeffs);
        Self {
            field,
            coeffs,
            matrix,
            is_zero,
        }
    }

    pub fn field(&self) -> &'f FiniteField {
        self.field
    }

    /// Coefficient vector of length `n`, lowest degree first.
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// The `n x n` matrix of multiplication by this element.
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero
    }

    pub fn is_one(&self) -> bool {
        self.coeffs[0] == 1 && self.coeffs[1..].iter().all(|&c| c == 0)
    }

    fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.field != other.field {
            return Err(FieldError::Mismatch(format!(
                "{} and {}",
                self.field, other.field
            )));
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: fn(u64, u64, u64) -> u64) -> Result<Self> {
        self.check_same_field(other)?;
        let p = self.field.prime();
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| op(a, b, p))
            .collect();
        Ok(Self::from_reduced(self.field, coeffs))
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, add_mod)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, sub_mod)
    }

    /// Product of two elements.
    ///
    /// The result is column 0 of `self.matrix() * other.matrix()`. Column 0 of
    /// `other.matrix()` is `other`'s coefficient vector, so only that column
    /// of the product is computed.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other)?;
        let p = self.field.prime();
        let coeffs = self.matrix.mul_column_mod(&other.matrix.column(0), p);
        Ok(Self::from_reduced(self.field, coeffs))
    }

    /// Quotient `self / other` through the adjugate of `other`'s matrix.
    ///
    /// The divisor's matrix is inverted as `det^-1 * adj` with exact
    /// arithmetic mod p, then multiplied onto the dividend's matrix.
    ///
    /// # Errors
    /// * `FieldError::Mismatch` - elements of different fields
    /// * `FieldError::DivideByZero` - `other` is zero, or its matrix is
    ///   singular because the modulus is not irreducible
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.check_same_field(other)?;
        if other.is_zero {
            return Err(FieldError::DivideByZero);
        }
        if self.is_zero {
            return Ok(self.field.zero());
        }

        let p = self.field.prime();
        let inverse = other.matrix.inverse_mod(p)?;

        let coeffs = self.matrix.mul_column_mod(&inverse.column(0), p);
        Ok(Self::from_reduced(self.field, coeffs))
    }

    /// Multiplicative inverse, `1 / self`.
    pub fn inverse(&self) -> Result<Self> {
        self.field.one().try_div(self)
    }

    /// Additive inverse.
    pub fn neg(&self) -> Self {
        let p = self.field.prime();
        let coeffs = self.coeffs.iter().map(|&c| sub_mod(0, c, p)).collect();
        Self::from_reduced(self.field, coeffs)
    }

    /// Raises the element to a signed power.
    ///
    /// Negative exponents invert first. Positive exponents use
    /// square-and-multiply over the bits of `exp`, least significant first.
    ///
    /// # Errors
    /// Returns `FieldError::DivideByZero` for a negative power of zero.
    pub fn pow(&self, exp: i64) -> Result<Self> {
        match exp {
            0 => Ok(self.field.one()),
            1 => Ok(self.clone()),
            e if e < 0 => self.inverse()?.pow_unsigned(e.unsigned_abs()),
            e => self.pow_unsigned(e as u64),
        }
    }

    fn pow_unsigned(&self, mut exp: u64) -> Result<Self> {
        let mut result = self.field.one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Smallest `k >= 1` with `self^k == 1`, found by repeated multiplication.
    ///
    /// # Errors
    /// Returns `FieldError::Domain` for the zero element, or when no power up
    /// to `p^n - 1` reaches one (only possible with a reducible modulus).
    pub fn multiplicative_order(&self) -> Result<u64> {
        if self.is_zero {
            return Err(FieldError::Domain(
                "the zero element has no multiplicative order".to_string(),
            ));
        }

        let limit = self.field.field_size() - 1;
        let mut current = self.clone();
        let mut order = 1;
        while !current.is_one() {
            if order >= limit {
                return Err(FieldError::Domain(format!(
                    "{} has no multiplicative order in {}",
                    self, self.field
                )));
            }
            current = current.try_mul(self)?;
            order += 1;
        }
        Ok(order)
    }

    /// Human readable polynomial, lowest degree first, e.g. `1 + 2x + 3x^2`.
    pub fn poly_string(&self) -> String {
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, &c)| match (i, c) {
                (0, c) => c.to_string(),
                (1, 1) => "x".to_string(),
                (1, c) => format!("{}x", c),
                (i, 1) => format!("x^{}", i),
                (i, c) => format!("{}x^{}", c, i),
            })
            .collect();

        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }
}

/// Builds the matrix of multiplication by `coeffs` column by column.
///
/// Each column is the previous one multiplied by `x`: shift every
/// coefficient up one degree and fold the coefficient pushed past `x^(n-1)`
/// back in through the field's reduction vector.
fn multiplication_matrix(field: &FiniteField, coeffs: &[u64]) -> SquareMatrix {
    let n = field.degree();
    let p = field.prime();
    let mut columns = Vec::with_capacity(n);
    let mut column = coeffs.to_vec();

    for i in 0..n {
        if i > 0 {
            let top = column[n - 1];
            column.rotate_right(1);
            column[0] = 0;
            if top != 0 {
                for (c, &r) in column.iter_mut().zip(field.reduction()) {
                    *c = add_mod(*c, mul_mod(top, r, p), p);
                }
            }
        }
        columns.push(column.clone());
    }
    SquareMatrix::from_columns(&columns)
}

impl PartialEq for FiniteFieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs && self.field == other.field
    }
}

impl Eq for FiniteFieldElement<'_> {}

impl std::hash::Hash for FiniteFieldElement<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
    }
}

impl std::fmt::Display for FiniteFieldElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.poly_string())
    }
}

impl std::fmt::Debug for FiniteFieldElement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FiniteFieldElement(GF({}^{}), {:?})",
            self.field.prime(),
            self.field.degree(),
            self.coeffs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;

    fn gf125() -> FiniteField {
        FiniteField::new(5, &[3, 3, 0, 1]).unwrap()
    }

    fn gf49() -> FiniteField {
        FiniteField::new(7, &[3, 6, 1]).unwrap()
    }

    #[test]
    fn test_addition() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        let y = field.element(&[4, 3, 2]).unwrap();
        let z = x.try_add(&y).unwrap();
        assert_eq!(z.coefficients(), &[0, 0, 0]);
        assert!(z.is_zero());
    }

    #[test]
    fn test_subtraction() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        let y = field.element(&[4, 3, 2]).unwrap();
        assert_eq!(x.try_sub(&y).unwrap().coefficients(), &[2, 4, 1]);
    }

    #[test]
    fn test_multiplication() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        let y = field.element(&[4, 3, 2]).unwrap();
        assert_eq!(x.try_mul(&y).unwrap().coefficients(), &[0, 4, 2]);
    }

    #[test]
    fn test_multiplication_is_matrix_product_column() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        let y = field.element(&[4, 3, 2]).unwrap();
        let product = x.matrix().mul_mod(y.matrix(), 5);
        assert_eq!(x.try_mul(&y).unwrap().coefficients(), &product.column(0)[..]);
        // and the product's own matrix is the product of the matrices
        assert_eq!(x.try_mul(&y).unwrap().matrix(), &product);
    }

    #[test]
    fn test_division() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        let y = field.element(&[4, 3, 2]).unwrap();
        let z = x.try_div(&y).unwrap();
        assert_eq!(z.coefficients(), &[4, 0, 0]);
        assert_eq!(z.try_mul(&y).unwrap(), x);
    }

    #[test]
    fn test_inverse_matrix_is_matrix_of_inverse() {
        let field = gf125();
        let y = field.element(&[4, 3, 2]).unwrap();
        let inverse = y.inverse().unwrap();
        assert_eq!(
            &y.matrix().inverse_mod(field.prime()).unwrap(),
            inverse.matrix()
        );
        assert!(y.try_mul(&inverse).unwrap().is_one());
    }

    #[test]
    fn test_division_by_zero() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        assert_eq!(x.try_div(&field.zero()), Err(FieldError::DivideByZero));
        assert_eq!(field.zero().inverse(), Err(FieldError::DivideByZero));
    }

    #[test]
    fn test_zero_dividend() {
        let field = gf125();
        let y = field.element(&[4, 3, 2]).unwrap();
        assert_eq!(field.zero().try_div(&y).unwrap(), field.zero());
    }

    #[test]
    fn test_matrix_representation() {
        let field = FiniteField::new(47, &[42, 3, 0, 1]).unwrap();
        let a = field.element(&[1, 2, 3]).unwrap();
        assert_eq!(a.matrix().column(0), vec![1, 2, 3]);
        assert_eq!(a.matrix().column(1), vec![15, 39, 2]);
        assert_eq!(a.matrix().column(2), vec![10, 9, 39]);

        let field = gf49();
        let a = field.element(&[1, 3]).unwrap();
        assert_eq!(a.matrix().to_string(), "[1 5]\n[3 4]");
    }

    #[test]
    fn test_matrix_of_short_vector_is_padded() {
        let field = gf125();
        let a = field.element(&[2]).unwrap();
        assert_eq!(a.coefficients(), &[2, 0, 0]);
        assert_eq!(a.matrix(), &SquareMatrix::identity(3).scale_mod(2, 5));
        assert_eq!(field.zero().matrix(), &SquareMatrix::zero(3));
    }

    #[test]
    fn test_degree_error() {
        let field = gf49();
        assert_eq!(
            field.element(&[1, 2, 3]),
            Err(FieldError::Degree { max: 2, got: 3 })
        );
    }

    #[test]
    fn test_coefficients_round_trip() {
        let field = gf125();
        let a = field.element(&[1, 7, -1]).unwrap();
        assert_eq!(a.coefficients(), &[1, 2, 4]);
        let b = field.element(&[4, 3, 2]).unwrap();
        assert_eq!(b.coefficients(), &[4, 3, 2]);
    }

    #[test]
    fn test_equality() {
        let field = gf125();
        let x = field.element(&[1, 2, 3]).unwrap();
        let y = field.element(&[1, 2, 3]).unwrap();
        let z = field.element(&[3, 2, 1]).unwrap();
        assert_eq!(x, y);
        assert_ne!(x, z);
        assert_eq!(field.element(&[1]).unwrap(), field.element(&[1, 0, 0]).unwrap());

        let other = FiniteField::new(5, &[2, 4, 1]).unwrap();
        assert_ne!(
            field.element(&[1, 2]).unwrap(),
            other.element(&[1, 2]).unwrap()
        );
    }

    #[test]
    fn test_mismatched_fields() {
        let f125 = gf125();
        let f49 = gf49();
        let x = f125.element(&[1, 2]).unwrap();
        let y = f49.element(&[1, 2]).unwrap();
        assert!(matches!(x.try_add(&y), Err(FieldError::Mismatch(_))));
        assert!(matches!(x.try_sub(&y), Err(FieldError::Mismatch(_))));
        assert!(matches!(x.try_mul(&y), Err(FieldError::Mismatch(_))));
        assert!(matches!(x.try_div(&y), Err(FieldError::Mismatch(_))));
    }

    #[test]
    fn test_equal_fields_interoperate() {
        let a = FiniteField::new(7, &[3, 6, 1]).unwrap();
        let b = FiniteField::new(7, &[6, 5, 2]).unwrap();
        let x = a.element(&[1, 3]).unwrap();
        let y = b.element(&[2, 5]).unwrap();
        assert!(x.try_mul(&y).is_ok());
    }

    #[test]
    fn test_multiplicative_order() {
        let field = FiniteField::new(3, &[1, 0, 1]).unwrap();
        assert!(matches!(
            field.zero().multiplicative_order(),
            Err(FieldError::Domain(_))
        ));
        assert_eq!(field.one().multiplicative_order().unwrap(), 1);

        let field = gf49();
        assert_eq!(field.element(&[0, 1]).unwrap().multiplicative_order().unwrap(), 48);
        assert_eq!(field.element(&[4, 5]).unwrap().multiplicative_order().unwrap(), 16);
    }

    #[test]
    fn test_order_divides_group_order() {
        let field = gf125();
        for element in field.elements().filter(|e| !e.is_zero()) {
            let order = element.multiplicative_order().unwrap();
            assert_eq!(124 % order, 0, "order of {} is {}", element, order);
        }
    }

    #[test]
    fn test_order_in_reducible_ring_is_an_error() {
        let ring = FiniteField::new(3, &[1, 0, 0, 0, 1]).unwrap();
        // (x^2 + x + 2)(x^2 + 2x + 2) = x^4 + 1 over GF(3)
        let zero_divisor = ring.element(&[2, 1, 1]).unwrap();
        assert!(matches!(
            zero_divisor.multiplicative_order(),
            Err(FieldError::Domain(_))
        ));
    }

    #[test]
    fn test_power_of_unit_group_order() {
        let field = gf49();
        let a = field.element(&[1, 3]).unwrap();
        assert_eq!(a.pow(48).unwrap(), field.element(&[1, 0]).unwrap());
    }

    #[test]
    fn test_pow_matches_repeated_multiplication() {
        let field = gf49();
        let a = field.element(&[1, 3]).unwrap();
        assert_eq!(a.pow(1).unwrap(), a);

        let mut expected = field.one();
        for e in 0..=60 {
            assert_eq!(a.pow(e).unwrap(), expected, "exponent {}", e);
            expected = expected.try_mul(&a).unwrap();
        }
    }

    #[test]
    fn test_pow_zero_and_one() {
        let field = gf49();
        let x = field.element(&[0, 1]).unwrap();
        assert_eq!(x.pow(0).unwrap(), field.one());
        assert_eq!(field.zero().pow(0).unwrap(), field.one());
        assert_eq!(field.zero().pow(5).unwrap(), field.zero());
        assert_eq!(x.pow(2).unwrap(), field.element(&[4, 1]).unwrap());
    }

    #[test]
    fn test_negative_exponents() {
        let field = FiniteField::new(2, &[1, 1, 1]).unwrap();
        let a = field.element(&[1, 1]).unwrap();
        let product = a.pow(-1).unwrap().try_mul(&a.pow(1).unwrap()).unwrap();
        assert_eq!(product, field.element(&[1, 0]).unwrap());

        let field = gf49();
        let a = field.element(&[2, 5]).unwrap();
        let product = a.pow(-1).unwrap().try_mul(&a).unwrap();
        assert_eq!(product, field.element(&[-6, -7]).unwrap());

        let a = field.element(&[3, 5]).unwrap();
        let product = a.pow(-2).unwrap().try_mul(&a.pow(2).unwrap()).unwrap();
        assert_eq!(product, field.element(&[344, 518]).unwrap());

        assert_eq!(field.zero().pow(-1), Err(FieldError::DivideByZero));
        assert!(a.pow(i64::MIN).is_ok());
    }

    #[test]
    fn test_inverse_and_neg() {
        let field = gf125();
        for element in field.elements().filter(|e| !e.is_zero()) {
            let inv = element.inverse().unwrap();
            assert!(element.try_mul(&inv).unwrap().is_one());
            assert!(element.try_add(&element.neg()).unwrap().is_zero());
        }
    }

    #[test]
    fn test_field_laws_random() {
        let field = gf125();
        let mut rng = rand_chacha::ChaCha8Rng::from_seed([7; 32]);

        for _ in 0..200 {
            let a = field.random_element(&mut rng);
            let b = field.random_element(&mut rng);
            let c = field.random_element(&mut rng);

            // distributivity
            let lhs = a.try_mul(&b.try_add(&c).unwrap()).unwrap();
            let rhs = a.try_mul(&b).unwrap().try_add(&a.try_mul(&c).unwrap()).unwrap();
            assert_eq!(lhs, rhs);

            // associativity
            let lhs = a.try_mul(&b).unwrap().try_mul(&c).unwrap();
            let rhs = a.try_mul(&b.try_mul(&c).unwrap()).unwrap();
            assert_eq!(lhs, rhs);

            // commutativity
            assert_eq!(a.try_mul(&b).unwrap(), b.try_mul(&a).unwrap());
        }
    }

    #[test]
    fn test_exponent_laws_random() {
        use rand::Rng;

        let field = gf49();
        let mut rng = rand_chacha::ChaCha8Rng::from_seed([11; 32]);

        for _ in 0..100 {
            let a = field.random_element(&mut rng);
            let i = rng.gen_range(1..200);
            let j = rng.gen_range(1..200);
            let lhs = a.pow(i).unwrap().try_mul(&a.pow(j).unwrap()).unwrap();
            assert_eq!(lhs, a.pow(i + j).unwrap());

            if !a.is_zero() {
                assert!(a.pow(-1).unwrap().try_mul(&a).unwrap().is_one());
            }
        }
    }

    #[test]
    fn test_poly_string() {
        let field = gf125();
        assert_eq!(field.element(&[1, 2, 3]).unwrap().to_string(), "1 + 2x + 3x^2");
        assert_eq!(field.element(&[0, 1, 1]).unwrap().to_string(), "x + x^2");
        assert_eq!(field.element(&[4]).unwrap().poly_string(), "4");
        assert_eq!(field.zero().poly_string(), "0");
    }

    #[test]
    fn test_debug() {
        let field = gf49();
        let a = field.element(&[1, 3]).unwrap();
        assert_eq!(format!("{:?}", a), "FiniteFieldElement(GF(7^2), [1, 3])");
    }
}
