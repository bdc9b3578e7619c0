// SPDX-License-Identifier: MIT

use crate::geometry::matrix::Vector2;
use crate::numeric::scalar::Scalar;

/// Signed area test: `cross(b - a, point - a)`.
///
/// Returns:
/// - >0 if `point` lies left of the directed line a -> b
/// - <0 if it lies right
/// - =0 if collinear
pub fn orientation<T: Scalar>(point: &Vector2<T>, a: &Vector2<T>, b: &Vector2<T>) -> T {
    (b - a).cross(&(point - a))
}

/// Sign of [`orientation`]: -1, 0, or +1.
pub fn orientation_sign<T: Scalar>(point: &Vector2<T>, a: &Vector2<T>, b: &Vector2<T>) -> i8 {
    orientation(point, a, b).sign()
}
