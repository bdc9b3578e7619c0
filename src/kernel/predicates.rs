// SPDX-License-Identifier: MIT

//! Containment and overlap predicates for the shape primitives.

use crate::geometry::circular::CircularShape;
use crate::geometry::interval::Interval;
use crate::geometry::matrix::{Vector, Vector2};
use crate::geometry::polygon::Triangle2;
use crate::geometry::region::Region;
use crate::kernel::orientation::orientation_sign;
use crate::numeric::scalar::Scalar;

fn inclusive_between<T: Scalar>(v: &T, lo: &T, up: &T) -> bool {
    lo <= v && v <= up
}

impl<T: Scalar> Interval<T> {
    /// Half-open membership: `lower <= value < upper`.
    pub fn contains(&self, value: &T) -> bool {
        self.lower <= *value && *value < self.upper
    }

    /// Inclusive containment of both endpoints of `other`.
    pub fn encloses(&self, other: &Self) -> bool {
        inclusive_between(&other.lower, &self.lower, &self.upper)
            && inclusive_between(&other.upper, &self.lower, &self.upper)
    }

    /// Overlap test, endpoint-wise: true iff any endpoint of either
    /// interval lies inclusively within the other.
    pub fn intersects(&self, other: &Self) -> bool {
        inclusive_between(&self.lower, &other.lower, &other.upper)
            || inclusive_between(&self.upper, &other.lower, &other.upper)
            || inclusive_between(&other.lower, &self.lower, &self.upper)
            || inclusive_between(&other.upper, &self.lower, &self.upper)
    }
}

impl<T: Scalar, const D: usize> Region<T, D> {
    /// Per-axis conjunction of interval containment.
    pub fn encloses(&self, other: &Self) -> bool {
        (0..D).all(|d| self.0[d].encloses(&other.0[d]))
    }

    /// Per-axis conjunction of interval overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        (0..D).all(|d| self.0[d].intersects(&other.0[d]))
    }
}

impl<T: Scalar, const D: usize> CircularShape<T, D> {
    /// Squared-distance test with inclusive boundary:
    /// `norm(point - center) <= radius^2`.
    pub fn contains(&self, point: &Vector<T, D>) -> bool {
        (point - &self.center).norm() <= self.radius.sqr()
    }
}

fn same_sign(a: i8, b: i8) -> bool {
    (a <= 0 && b <= 0) || (a >= 0 && b >= 0)
}

impl<T: Scalar> Triangle2<T> {
    /// Point-in-triangle with inclusive boundary.
    ///
    /// The point is inside iff its orientation against the three directed
    /// edges carries one consistent sign (zeros agree with either), which
    /// treats both windings uniformly.
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        let mut signs = [0i8; 3];
        for i in 0..3 {
            signs[i] = orientation_sign(point, &self.0[i], &self.0[(i + 1) % 3]);
        }

        same_sign(signs[0], signs[1])
            && same_sign(signs[0], signs[2])
            && same_sign(signs[1], signs[2])
    }
}
