// SPDX-License-Identifier: MIT

use num_traits::ToPrimitive;

use crate::operations::{Abs, One, Round, Sqr, Sqrt, Trig, Zero};

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Element type of matrices, vectors and shapes.
///
/// Covers everything the algebraic core needs: ring arithmetic, exact
/// zero/one, absolute value and sign, squaring, and lowering to primitive
/// floats. Square roots and trigonometry live on [`Real`], so exact types
/// such as [`crate::numeric::Rational`] can flow through determinants,
/// inverses and the predicate layer without approximation.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Zero
    + One
    + Abs
    + Sqr
    + ToPrimitive
{
    /// Builds the quotient `num / den` in this scalar's arithmetic.
    /// Integer scalars truncate; exact scalars keep the ratio.
    fn from_num_den(num: i32, den: i32) -> Self;

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }
}

/// Scalars with real-valued square root, trigonometry and rounding.
/// Lengths, units, distances, angles, rotations and the triangle
/// constructions require this; the rest of the kernel does not.
pub trait Real: Scalar + Sqrt + Trig + Round {}

impl<T: Scalar + Sqrt + Trig + Round> Real for T {}

impl Scalar for f32 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f32 / den as f32
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }
}

impl Scalar for i32 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num / den
    }
}

impl Scalar for i64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        (num / den) as i64
    }
}
