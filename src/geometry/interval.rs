// SPDX-License-Identifier: MIT

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::numeric::scalar::Scalar;

/// Half-open range `[lower, upper)` over an ordered scalar.
///
/// No ordering invariant is enforced: `lower` may exceed `upper`,
/// representing an empty or inverted interval, and callers must not rely
/// on non-inversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<T: Scalar> {
    pub lower: T,
    pub upper: T,
}

impl<T: Scalar> Interval<T> {
    pub fn new(lower: T, upper: T) -> Self {
        Interval { lower, upper }
    }

    pub fn empty(&self) -> bool {
        self.lower == self.upper
    }

    pub fn size(&self) -> T {
        self.upper.clone() - self.lower.clone()
    }

    /// `lower * t + upper * (1 - t)`: `t = 1` yields the lower bound,
    /// `t = 0` the upper.
    pub fn interpolate(&self, t: &T) -> T {
        self.lower.clone() * t.clone() + self.upper.clone() * (T::one() - t.clone())
    }
}

impl<T: Scalar> Default for Interval<T> {
    fn default() -> Self {
        Interval::new(T::zero(), T::zero())
    }
}

// ---------- Shift and scale by a scalar ----------
impl<T: Scalar> Add<T> for Interval<T> {
    type Output = Interval<T>;
    fn add(self, rhs: T) -> Interval<T> {
        Interval::new(self.lower + rhs.clone(), self.upper + rhs)
    }
}

impl<T: Scalar> Sub<T> for Interval<T> {
    type Output = Interval<T>;
    fn sub(self, rhs: T) -> Interval<T> {
        Interval::new(self.lower - rhs.clone(), self.upper - rhs)
    }
}

impl<T: Scalar> Mul<T> for Interval<T> {
    type Output = Interval<T>;
    fn mul(self, rhs: T) -> Interval<T> {
        Interval::new(self.lower * rhs.clone(), self.upper * rhs)
    }
}

impl<T: Scalar> Div<T> for Interval<T> {
    type Output = Interval<T>;
    fn div(self, rhs: T) -> Interval<T> {
        Interval::new(self.lower / rhs.clone(), self.upper / rhs)
    }
}

impl<'a, T: Scalar> AddAssign<&'a T> for Interval<T> {
    fn add_assign(&mut self, rhs: &'a T) {
        self.lower += rhs;
        self.upper += rhs;
    }
}

impl<'a, T: Scalar> SubAssign<&'a T> for Interval<T> {
    fn sub_assign(&mut self, rhs: &'a T) {
        self.lower -= rhs;
        self.upper -= rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Interval<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.lower = self.lower.clone() * rhs.clone();
        self.upper = self.upper.clone() * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Interval<T> {
    fn div_assign(&mut self, rhs: T) {
        self.lower = self.lower.clone() / rhs.clone();
        self.upper = self.upper.clone() / rhs;
    }
}
