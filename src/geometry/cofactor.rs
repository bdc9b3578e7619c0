// SPDX-License-Identifier: MIT

//! Cofactor-expansion machinery: minors, determinants and the adjugate
//! inverse.
//!
//! Laplace expansion is O(D!) and only acceptable because dimensions stay
//! small (at most 4 or so in practice). The public surface is
//! const-generic; the recursion itself runs over flat scratch buffers
//! because `D - 1` cannot appear in a type on stable Rust.

use crate::geometry::matrix::{Matrix, SquareMatrix};
use crate::numeric::scalar::Scalar;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Submatrix with the given row and column removed.
    ///
    /// The output dimensions are explicit const parameters and must equal
    /// `R - 1` and `C - 1`; this and an out-of-range `row`/`col` are
    /// structural misuse and panic.
    pub fn minor<const RM: usize, const CM: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, RM, CM> {
        assert!(
            RM + 1 == R && CM + 1 == C,
            "minor: output must be {}x{}",
            R - 1,
            C - 1
        );
        assert!(row < R && col < C, "minor: invalid row or column");

        Matrix::from_fn(|r, c| {
            let sr = if r < row { r } else { r + 1 };
            let sc = if c < col { c } else { c + 1 };
            self.0[sr][sc].clone()
        })
    }
}

impl<T: Scalar, const D: usize> SquareMatrix<T, D> {
    /// Determinant by cofactor expansion.
    ///
    /// Sizes 1-3 use the closed-form formulas; larger sizes recurse by
    /// Laplace expansion along the first row. Exact for exact scalars.
    pub fn determinant(&self) -> T {
        let flat: Vec<T> = self.iter().cloned().collect();
        det_flat(&flat, D)
    }

    /// Adjugate inverse: entry `(c, r)` is
    /// `(-1)^(r+c) * det(minor(r, c)) / det`.
    ///
    /// Returns `None` iff the determinant is exactly zero; no epsilon is
    /// applied at this layer.
    pub fn invert(&self) -> Option<SquareMatrix<T, D>> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }

        let flat: Vec<T> = self.iter().cloned().collect();
        Some(Matrix::from_fn(|r, c| {
            // (r, c) of the result is the (c, r) cofactor: the transpose
            // baked into the adjugate.
            let sub = delete_row_col(&flat, D, c, r);
            let cof = det_flat(&sub, D - 1);
            if (r + c) % 2 == 0 {
                cof / det.clone()
            } else {
                -cof / det.clone()
            }
        }))
    }
}

/// Determinant of an n x n row-major slice.
fn det_flat<T: Scalar>(m: &[T], n: usize) -> T {
    debug_assert_eq!(m.len(), n * n);
    match n {
        0 => T::one(),
        1 => m[0].clone(),
        2 => m[0].clone() * m[3].clone() - m[1].clone() * m[2].clone(),
        3 => {
            let mut det = m[0].clone() * m[4].clone() * m[8].clone();
            let t = m[1].clone() * m[5].clone() * m[6].clone();
            det += &t;
            let t = m[2].clone() * m[3].clone() * m[7].clone();
            det += &t;
            let t = m[2].clone() * m[4].clone() * m[6].clone();
            det -= &t;
            let t = m[0].clone() * m[5].clone() * m[7].clone();
            det -= &t;
            let t = m[1].clone() * m[3].clone() * m[8].clone();
            det -= &t;
            det
        }
        _ => {
            let mut sum = T::zero();
            for i in 0..n {
                let sub = delete_row_col(m, n, 0, i);
                let term = m[i].clone() * det_flat(&sub, n - 1);
                if i % 2 == 0 {
                    sum += &term;
                } else {
                    sum -= &term;
                }
            }
            sum
        }
    }
}

/// Copy of an n x n row-major slice with one row and one column removed.
fn delete_row_col<T: Scalar>(m: &[T], n: usize, row: usize, col: usize) -> Vec<T> {
    let mut out = Vec::with_capacity((n - 1) * (n - 1));
    for r in 0..n {
        if r == row {
            continue;
        }
        for c in 0..n {
            if c == col {
                continue;
            }
            out.push(m[r * n + c].clone());
        }
    }
    out
}
