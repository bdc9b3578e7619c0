// SPDX-License-Identifier: MIT

use std::ops::{Add, Sub};

use crate::geometry::matrix::Vector;
use crate::numeric::scalar::Scalar;

/// Center point plus radius: a circle in 2-D, a sphere in 3-D.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularShape<T: Scalar, const D: usize> {
    pub center: Vector<T, D>,
    pub radius: T,
}

pub type Circle<T> = CircularShape<T, 2>;
pub type Sphere<T> = CircularShape<T, 3>;

impl<T: Scalar, const D: usize> CircularShape<T, D> {
    pub fn new(center: Vector<T, D>, radius: T) -> Self {
        CircularShape { center, radius }
    }
}

// ---------- Translation ----------
impl<'a, 'b, T: Scalar, const D: usize> Add<&'b Vector<T, D>> for &'a CircularShape<T, D> {
    type Output = CircularShape<T, D>;
    fn add(self, rhs: &'b Vector<T, D>) -> Self::Output {
        CircularShape::new(&self.center + rhs, self.radius.clone())
    }
}

impl<'a, 'b, T: Scalar, const D: usize> Sub<&'b Vector<T, D>> for &'a CircularShape<T, D> {
    type Output = CircularShape<T, D>;
    fn sub(self, rhs: &'b Vector<T, D>) -> Self::Output {
        CircularShape::new(&self.center - rhs, self.radius.clone())
    }
}
