// SPDX-License-Identifier: MIT

//! Affine transform factories in homogeneous form.
//!
//! The homogeneous builders return (D+1)x(D+1) matrices so translations
//! and linear maps compose by matrix product; apply them to points with
//! [`Vector::transform`](crate::geometry::matrix::Matrix::transform)
//! (row-vector convention, translation in the last row).

use crate::geometry::matrix::{Matrix, SquareMatrix, Vector2, Vector3};
use crate::numeric::scalar::{Real, Scalar};

/// D x D identity matrix.
pub fn identity<T: Scalar, const D: usize>() -> SquareMatrix<T, D> {
    Matrix::from_fn(|r, c| if r == c { T::one() } else { T::zero() })
}

/// Homogeneous 2-D scale about the origin.
pub fn scaling_2d<T: Scalar>(factors: &Vector2<T>) -> SquareMatrix<T, 3> {
    let mut m = identity();
    m.0[0][0] = factors.x().clone();
    m.0[1][1] = factors.y().clone();
    m
}

/// Homogeneous 3-D scale about the origin.
pub fn scaling_3d<T: Scalar>(factors: &Vector3<T>) -> SquareMatrix<T, 4> {
    let mut m = identity();
    m.0[0][0] = factors.x().clone();
    m.0[1][1] = factors.y().clone();
    m.0[2][2] = factors.z().clone();
    m
}

/// Homogeneous 2-D rotation by `angle` radians, filling the standard
/// rotation block `[c s; -s c]`.
pub fn rotation_2d<T: Real>(angle: &T) -> SquareMatrix<T, 3> {
    let c = angle.cos();
    let s = angle.sin();

    let mut m = identity();
    m.0[0][0] = c.clone();
    m.0[0][1] = s.clone();
    m.0[1][0] = -s;
    m.0[1][1] = c;
    m
}

/// Homogeneous 2-D translation (offset in the last row).
pub fn translation_2d<T: Scalar>(offset: &Vector2<T>) -> SquareMatrix<T, 3> {
    let mut m = identity();
    m.0[2][0] = offset.x().clone();
    m.0[2][1] = offset.y().clone();
    m
}

/// Homogeneous 3-D translation (offset in the last row).
pub fn translation_3d<T: Scalar>(offset: &Vector3<T>) -> SquareMatrix<T, 4> {
    let mut m = identity();
    m.0[3][0] = offset.x().clone();
    m.0[3][1] = offset.y().clone();
    m.0[3][2] = offset.z().clone();
    m
}
