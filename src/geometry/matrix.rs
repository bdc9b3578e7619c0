// SPDX-License-Identifier: MIT

use std::{
    array,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{numeric::scalar::Scalar, operations::Zero};

/// Dense row-major matrix with compile-time dimensions R x C.
///
/// The backing store is a contiguous `[[T; C]; R]`; flat element order is
/// row-major, and `Index<usize>` exposes the flat view (`i -> (i / C,
/// i % C)`). Element access is bounds-checked by the backing arrays and
/// panics on out-of-range indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

/// Geometric vector (or point) in D-dimensional space.
pub type Vector<T, const D: usize> = Matrix<T, 1, D>;

/// Linear or affine transform over D (or D-1 homogeneous) dimensions.
pub type SquareMatrix<T, const D: usize> = Matrix<T, D, D>;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

/// 2-D vector from its components.
#[inline]
pub fn vec2<T: Scalar>(x: T, y: T) -> Vector2<T> {
    Matrix([[x, y]])
}

/// 3-D vector from its components.
#[inline]
pub fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector3<T> {
    Matrix([[x, y, z]])
}

// ---------- Basics ----------
impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn new(data: [[T; C]; R]) -> Self {
        Matrix(data)
    }

    /// Matrix filled with a single value.
    #[inline]
    pub fn splat(val: T) -> Self {
        Matrix(array::from_fn(|_| array::from_fn(|_| val.clone())))
    }

    /// Build element-wise from a function of (row, col).
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Matrix(array::from_fn(|r| array::from_fn(|c| f(r, c))))
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        R
    }

    #[inline]
    pub fn col_count(&self) -> usize {
        C
    }

    /// Number of elements (always R * C).
    #[inline]
    pub fn len(&self) -> usize {
        R * C
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flat_map(|row| row.iter())
    }

    /// Explicit element-wise conversion from another element type.
    #[inline]
    pub fn cast<U>(&self) -> Matrix<U, R, C>
    where
        U: Scalar + From<T>,
    {
        Matrix(array::from_fn(|r| {
            array::from_fn(|c| U::from(self.0[r][c].clone()))
        }))
    }

    /// Transpose into C x R.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(array::from_fn(|c| array::from_fn(|r| self.0[r][c].clone())))
    }
}

// ---------- Vector element accessors ----------
impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn x(&self) -> &T {
        &self.0[0][0]
    }

    #[inline]
    pub fn y(&self) -> &T {
        &self.0[0][1]
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn x(&self) -> &T {
        &self.0[0][0]
    }

    #[inline]
    pub fn y(&self) -> &T {
        &self.0[0][1]
    }

    #[inline]
    pub fn z(&self) -> &T {
        &self.0[0][2]
    }
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;
    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.0[r][c]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.0[r][c]
    }
}

impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i / C][i % C]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i / C][i % C]
    }
}

// ---------- Zero ----------
impl<T: Scalar, const R: usize, const C: usize> Zero for Matrix<T, R, C> {
    #[inline]
    fn zero() -> Self {
        Matrix(array::from_fn(|_| array::from_fn(|_| T::zero())))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.iter().all(|x| x.is_zero())
    }
}

// ---------- Negation ----------
impl<'a, T: Scalar, const R: usize, const C: usize> Neg for &'a Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn neg(self) -> Self::Output {
        Matrix::from_fn(|r, c| -self.0[r][c].clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

// ---------- Add / Sub (by-ref primary impls) ----------
impl<'a, 'b, T: Scalar, const R: usize, const C: usize> Add<&'b Matrix<T, R, C>>
    for &'a Matrix<T, R, C>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn add(self, rhs: &'b Matrix<T, R, C>) -> Self::Output {
        let mut out = self.clone();
        for r in 0..R {
            for c in 0..C {
                out.0[r][c] += &rhs.0[r][c];
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        &self + &rhs
    }
}

impl<'a, 'b, T: Scalar, const R: usize, const C: usize> Sub<&'b Matrix<T, R, C>>
    for &'a Matrix<T, R, C>
{
    type Output = Matrix<T, R, C>;
    #[inline]
    fn sub(self, rhs: &'b Matrix<T, R, C>) -> Self::Output {
        let mut out = self.clone();
        for r in 0..R {
            for c in 0..C {
                out.0[r][c] -= &rhs.0[r][c];
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        &self - &rhs
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> AddAssign<&'a Matrix<T, R, C>>
    for Matrix<T, R, C>
{
    #[inline]
    fn add_assign(&mut self, rhs: &'a Matrix<T, R, C>) {
        for r in 0..R {
            for c in 0..C {
                self.0[r][c] += &rhs.0[r][c];
            }
        }
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> SubAssign<&'a Matrix<T, R, C>>
    for Matrix<T, R, C>
{
    #[inline]
    fn sub_assign(&mut self, rhs: &'a Matrix<T, R, C>) {
        for r in 0..R {
            for c in 0..C {
                self.0[r][c] -= &rhs.0[r][c];
            }
        }
    }
}

// ---------- Scalar multiply / divide ----------
impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Matrix::from_fn(|r, c| self.0[r][c].clone() * rhs.clone())
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> Mul<T> for &'a Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Matrix::from_fn(|r, c| self.0[r][c].clone() * rhs.clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Matrix::from_fn(|r, c| self.0[r][c].clone() / rhs.clone())
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> Div<T> for &'a Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Matrix::from_fn(|r, c| self.0[r][c].clone() / rhs.clone())
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for r in 0..R {
            for c in 0..C {
                self.0[r][c] = self.0[r][c].clone() * rhs.clone();
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for r in 0..R {
            for c in 0..C {
                self.0[r][c] = self.0[r][c].clone() / rhs.clone();
            }
        }
    }
}

// ---------- Matrix product ----------
impl<'a, 'b, T: Scalar, const R: usize, const D: usize, const C: usize> Mul<&'b Matrix<T, D, C>>
    for &'a Matrix<T, R, D>
{
    type Output = Matrix<T, R, C>;

    /// Standard R x D times D x C product, O(R * D * C).
    fn mul(self, rhs: &'b Matrix<T, D, C>) -> Self::Output {
        Matrix::from_fn(|r, c| {
            let mut sum = T::zero();
            for i in 0..D {
                let term = self.0[r][i].clone() * rhs.0[i][c].clone();
                sum += &term;
            }
            sum
        })
    }
}

// ---------- Homogeneous application ----------
impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Applies a homogeneous (D+1)x(D+1) transform to this point using the
    /// row-vector convention: `out[d] = m[(D, d)] + sum_i self[i] * m[(i, d)]`.
    ///
    /// Panics unless `H == D + 1` (the relation is not expressible as a
    /// const bound on stable Rust).
    pub fn transform<const H: usize>(&self, m: &SquareMatrix<T, H>) -> Vector<T, D> {
        assert!(H == D + 1, "transform: matrix must be {}x{}", D + 1, D + 1);
        Matrix([array::from_fn(|d| {
            let mut sum = m.0[D][d].clone();
            for i in 0..D {
                let term = self.0[0][i].clone() * m.0[i][d].clone();
                sum += &term;
            }
            sum
        })])
    }
}
