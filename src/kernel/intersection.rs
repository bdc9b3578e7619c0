// SPDX-License-Identifier: MIT

//! Line-shape intersection and point projection in the plane.
//!
//! Both operations solve on the infinite supporting lines first and then
//! filter the resulting parameters through each shape's domain, so one
//! implementation covers every line/ray/segment pairing.

use crate::geometry::linear_shape::{LinearShape, ParamDomain};
use crate::geometry::matrix::Vector2;
use crate::numeric::scalar::Scalar;

/// Affine blend with `interpolate(1, a, b) == a` and
/// `interpolate(0, a, b) == b`.
pub fn interpolate<T, V>(t: &T, a: V, b: V) -> V
where
    T: Scalar,
    V: std::ops::Mul<T, Output = V> + std::ops::Add<Output = V>,
{
    a * t.clone() + b * (T::one() - t.clone())
}

/// Parameters `(t_a, t_b)` at which the infinite lines through
/// `a0 -> a1` and `b0 -> b1` meet, solved by Cramer's rule.
///
/// `None` when the directions are parallel within `epsilon`:
/// `|cross(dir_a, dir_b)| <= epsilon`.
pub fn line_intersection_parameters<T: Scalar>(
    a0: &Vector2<T>,
    a1: &Vector2<T>,
    b0: &Vector2<T>,
    b1: &Vector2<T>,
    epsilon: &T,
) -> Option<(T, T)> {
    let dir_a = a1 - a0;
    let dir_b = b1 - b0;
    let det = dir_a.cross(&dir_b);
    if det.abs() <= *epsilon {
        return None;
    }

    let v = b0 - a0;
    let t_a = v.cross(&dir_b) / det.clone();
    let t_b = v.cross(&dir_a) / det;
    Some((t_a, t_b))
}

impl<K: ParamDomain, T: Scalar> LinearShape<K, T, 2> {
    /// Intersection point with `other`, if the supporting lines meet at
    /// parameters admitted by both shapes' domains.
    ///
    /// `None` for parallel supporting lines (`|cross| <= epsilon`) and for
    /// crossings that fall outside either domain. Overlapping collinear
    /// shapes count as parallel.
    pub fn intersection<K2: ParamDomain>(
        &self,
        other: &LinearShape<K2, T, 2>,
        epsilon: &T,
    ) -> Option<Vector2<T>> {
        let (t_a, t_b) = line_intersection_parameters(
            &self.points[0],
            &self.points[1],
            &other.points[0],
            &other.points[1],
            epsilon,
        )?;

        if self.admits(&t_a) && other.admits(&t_b) {
            Some(self.point_at(&t_a))
        } else {
            None
        }
    }

    /// Orthogonal projection of `point` onto this shape, if the foot of
    /// the perpendicular falls inside the shape's domain.
    ///
    /// `None` when the defining points are closer than `epsilon`
    /// (`norm(direction) <= epsilon`) or the foot lies outside the domain.
    pub fn project(&self, point: &Vector2<T>, epsilon: &T) -> Option<Vector2<T>> {
        let dir = self.direction();
        let n = dir.norm();
        if n.abs() <= *epsilon {
            return None;
        }

        let t = dir.dot(&(point - &self.points[0])) / n;
        if self.admits(&t) {
            Some(self.point_at(&t))
        } else {
            None
        }
    }

    /// Shape of the same kind through `origin`, rotated 90 degrees
    /// counter-clockwise.
    pub fn perpendicular_at(&self, origin: &Vector2<T>) -> Self {
        let dir = self.direction();
        Self::new(origin.clone(), origin + &dir.perpendicular())
    }

    /// [`perpendicular_at`](Self::perpendicular_at) the first defining point.
    pub fn perpendicular(&self) -> Self {
        self.perpendicular_at(&self.points[0])
    }
}
