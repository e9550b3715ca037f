//! Square matrices over GF(p).
//!
//! Everything here is exact integer arithmetic modulo `p`; entries are kept in
//! `[0, p)` by every operation.

use crate::error::{FieldError, Result};
use crate::prime::{add_mod, inverse_mod, mul_mod, sub_mod};

/// An `n x n` matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix {
    dim: usize,
    entries: Vec<u64>,
}

impl SquareMatrix {
    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            entries: vec![0; dim * dim],
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zero(dim);
        for i in 0..dim {
            m.set(i, i, 1);
        }
        m
    }

    /// Builds a matrix whose `j`-th column is `columns[j]`.
    ///
    /// # Panics
    /// Panics if the columns do not form a square matrix.
    pub fn from_columns(columns: &[Vec<u64>]) -> Self {
        let dim = columns.len();
        let mut m = Self::zero(dim);
        for (j, column) in columns.iter().enumerate() {
            assert_eq!(column.len(), dim, "column {} has the wrong length", j);
            for (i, &value) in column.iter().enumerate() {
                m.set(i, j, value);
            }
        }
        m
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.entries[row * self.dim + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: u64) {
        self.entries[row * self.dim + col] = value;
    }

    pub fn column(&self, col: usize) -> Vec<u64> {
        (0..self.dim).map(|row| self.get(row, col)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        self.entries.chunks(self.dim.max(1)).take(self.dim)
    }

    /// Matrix product `self * other` modulo `p`.
    pub fn mul_mod(&self, other: &Self, p: u64) -> Self {
        debug_assert_eq!(self.dim, other.dim);
        let mut out = Self::zero(self.dim);
        for i in 0..self.dim {
            for j in 0..self.dim {
                let value = (0..self.dim).fold(0, |acc, k| {
                    add_mod(acc, mul_mod(self.get(i, k), other.get(k, j), p), p)
                });
                out.set(i, j, value);
            }
        }
        out
    }

    /// Product `self * v` of the matrix with a column vector modulo `p`.
    ///
    /// Equal to column 0 of `self * other` when `v` is column 0 of `other`.
    pub fn mul_column_mod(&self, v: &[u64], p: u64) -> Vec<u64> {
        debug_assert_eq!(self.dim, v.len());
        (0..self.dim)
            .map(|i| {
                v.iter().enumerate().fold(0, |acc, (k, &x)| {
                    add_mod(acc, mul_mod(self.get(i, k), x, p), p)
                })
            })
            .collect()
    }

    pub fn scale_mod(&self, factor: u64, p: u64) -> Self {
        Self {
            dim: self.dim,
            entries: self.entries.iter().map(|&e| mul_mod(e, factor, p)).collect(),
        }
    }

    /// Determinant modulo `p` by Gaussian elimination over GF(p).
    ///
    /// `p` must be prime so that every non-zero pivot is invertible.
    pub fn determinant_mod(&self, p: u64) -> u64 {
        let n = self.dim;
        let mut a = self.entries.iter().map(|&e| e % p).collect::<Vec<_>>();
        let mut det = 1 % p;

        for col in 0..n {
            let Some(pivot) = (col..n).find(|&row| a[row * n + col] != 0) else {
                return 0;
            };
            if pivot != col {
                for k in 0..n {
                    a.swap(pivot * n + k, col * n + k);
                }
                det = sub_mod(0, det, p);
            }

            let pivot_value = a[col * n + col];
            det = mul_mod(det, pivot_value, p);
            let Ok(pivot_inv) = inverse_mod(pivot_value, p) else {
                // only reachable for a composite p
                return 0;
            };

            for row in col + 1..n {
                let factor = mul_mod(a[row * n + col], pivot_inv, p);
                if factor == 0 {
                    continue;
                }
                for k in col..n {
                    let delta = mul_mod(factor, a[col * n + k], p);
                    a[row * n + k] = sub_mod(a[row * n + k], delta, p);
                }
            }
        }
        det
    }

    /// The matrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        let dim = self.dim.saturating_sub(1);
        let entries = (0..self.dim)
            .filter(|&i| i != row)
            .flat_map(|i| {
                (0..self.dim)
                    .filter(move |&j| j != col)
                    .map(move |j| self.get(i, j))
            })
            .collect();
        Self { dim, entries }
    }

    /// Classical adjoint: transpose of the cofactor matrix, modulo `p`.
    pub fn adjugate_mod(&self, p: u64) -> Self {
        let n = self.dim;
        if n == 1 {
            return Self::identity(1);
        }
        let mut adj = Self::zero(n);
        for i in 0..n {
            for j in 0..n {
                let minor_det = self.minor(i, j).determinant_mod(p);
                let cofactor = if (i + j) % 2 == 0 {
                    minor_det
                } else {
                    sub_mod(0, minor_det, p)
                };
                adj.set(j, i, cofactor);
            }
        }
        adj
    }

    /// Inverse modulo `p` as `det^-1 * adj`.
    ///
    /// # Errors
    /// Returns `FieldError::DivideByZero` if the matrix is singular mod `p`.
    pub fn inverse_mod(&self, p: u64) -> Result<Self> {
        let det = self.determinant_mod(p);
        if det == 0 {
            return Err(FieldError::DivideByZero);
        }
        let det_inv = inverse_mod(det, p)?;
        Ok(self.adjugate_mod(p).scale_mod(det_inv, p))
    }
}

impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .entries
            .iter()
            .map(|e| e.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", value, width = width)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[u64]]) -> SquareMatrix {
        let n = rows.len();
        let columns: Vec<Vec<u64>> = (0..n).map(|j| rows.iter().map(|r| r[j]).collect()).collect();
        SquareMatrix::from_columns(&columns)
    }

    #[test]
    fn test_layout() {
        let m = matrix(&[&[1, 2], &[3, 4]]);
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.column(1), vec![2, 4]);
        assert_eq!(m.rows().collect::<Vec<_>>(), vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn test_determinant() {
        let m = matrix(&[&[1, 2], &[3, 4]]);
        // 4 - 6 = -2 = 5 (mod 7)
        assert_eq!(m.determinant_mod(7), 5);

        let m = matrix(&[&[2, 0, 1], &[1, 3, 2], &[1, 1, 1]]);
        // 2*(3-2) - 0 + 1*(1-3) = 0
        assert_eq!(m.determinant_mod(11), 0);

        let m = matrix(&[&[0, 1], &[1, 0]]);
        assert_eq!(m.determinant_mod(5), 4);

        assert_eq!(SquareMatrix::identity(4).determinant_mod(13), 1);
        assert_eq!(SquareMatrix::zero(0).determinant_mod(13), 1);
    }

    #[test]
    fn test_adjugate() {
        let m = matrix(&[&[1, 2], &[3, 4]]);
        // adj = [[4, -2], [-3, 1]]
        assert_eq!(m.adjugate_mod(7), matrix(&[&[4, 5], &[4, 1]]));

        let product = m.mul_mod(&m.adjugate_mod(7), 7);
        assert_eq!(product, SquareMatrix::identity(2).scale_mod(m.determinant_mod(7), 7));
    }

    #[test]
    fn test_inverse() {
        let m = matrix(&[&[2, 1, 0], &[1, 3, 1], &[0, 1, 4]]);
        assert_eq!(m.determinant_mod(47), 18);
        let inv = m.inverse_mod(47).unwrap();
        assert_eq!(m.mul_mod(&inv, 47), SquareMatrix::identity(3));
        assert_eq!(inv.mul_mod(&m, 47), SquareMatrix::identity(3));
    }

    #[test]
    fn test_singular_inverse() {
        let m = matrix(&[&[1, 2], &[2, 4]]);
        assert_eq!(m.inverse_mod(7), Err(FieldError::DivideByZero));
    }

    #[test]
    fn test_one_by_one() {
        let m = matrix(&[&[3]]);
        assert_eq!(m.determinant_mod(7), 3);
        assert_eq!(m.inverse_mod(7).unwrap(), matrix(&[&[5]]));
    }

    #[test]
    fn test_mul_column_matches_product() {
        let a = matrix(&[&[1, 2, 3], &[4, 0, 1], &[2, 2, 2]]);
        let b = matrix(&[&[4, 1, 0], &[3, 3, 3], &[2, 4, 1]]);
        assert_eq!(a.mul_column_mod(&b.column(0), 5), a.mul_mod(&b, 5).column(0));
    }

    #[test]
    fn test_display() {
        let m = matrix(&[&[1, 12], &[3, 4]]);
        assert_eq!(m.to_string(), "[ 1 12]\n[ 3  4]");
    }
}
