// SPDX-License-Identifier: MIT

//! Vector algebra on [`Vector`]: inner products, lengths, projections and
//! the dimension-specific cross products and angles.

use crate::geometry::matrix::{Vector, Vector2, Vector3, vec2, vec3};
use crate::numeric::scalar::{Real, Scalar};

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Inner product, O(D).
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..D {
            let term = self.0[0][i].clone() * other.0[0][i].clone();
            sum += &term;
        }
        sum
    }

    /// Squared length (`dot(v, v)`); avoids a square root.
    pub fn norm(&self) -> T {
        self.dot(self)
    }

    /// Vector projection of `self` onto `other`:
    /// `other * (dot(other, self) / norm(other))`.
    pub fn project_onto(&self, other: &Self) -> Self {
        other * (other.dot(self) / other.norm())
    }

    /// Component of `self` orthogonal to `other`.
    pub fn reject_from(&self, other: &Self) -> Self {
        self - &self.project_onto(other)
    }
}

impl<T: Real, const D: usize> Vector<T, D> {
    pub fn length(&self) -> T {
        self.norm().sqrt()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A vector of exactly zero length comes back unchanged; callers that
    /// must tell that case apart from a genuine unit vector check for it
    /// themselves.
    pub fn unit(&self) -> Self {
        let len = self.length();
        if len.is_zero() { self.clone() } else { self / len }
    }

    pub fn distance_to(&self, other: &Self) -> T {
        (other - self).length()
    }
}

impl<T: Scalar> Vector2<T> {
    /// 2-D cross product: the scalar `x1*y2 - y1*x2`, the signed area of
    /// the spanned parallelogram. Positive means a counter-clockwise turn
    /// from `self` to `other`.
    pub fn cross(&self, other: &Self) -> T {
        self.x().clone() * other.y().clone() - self.y().clone() * other.x().clone()
    }

    /// Rotation by 90 degrees counter-clockwise: `(-y, x)`.
    pub fn perpendicular(&self) -> Self {
        vec2(-self.y().clone(), self.x().clone())
    }
}

impl<T: Real> Vector2<T> {
    /// Signed angle from `self` to `other`, in `(-pi, pi]`.
    pub fn angle_to(&self, other: &Self) -> T {
        self.cross(other).atan2(&self.dot(other))
    }
}

impl<T: Scalar> Vector3<T> {
    /// 3-D vector cross product.
    pub fn cross(&self, other: &Self) -> Self {
        vec3(
            self.y().clone() * other.z().clone() - self.z().clone() * other.y().clone(),
            self.z().clone() * other.x().clone() - self.x().clone() * other.z().clone(),
            self.x().clone() * other.y().clone() - self.y().clone() * other.x().clone(),
        )
    }
}

impl<T: Real> Vector3<T> {
    /// Unsigned angle between `self` and `other`, in `[0, pi]`.
    /// NaN when either vector has zero length.
    pub fn angle_to(&self, other: &Self) -> T {
        (self.dot(other) / (self.length() * other.length())).acos()
    }
}
