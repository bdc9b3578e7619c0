// SPDX-License-Identifier: MIT

use std::ops::{Index, IndexMut};

use crate::geometry::interval::Interval;
use crate::geometry::matrix::{Matrix, Vector};
use crate::numeric::scalar::Scalar;

/// Axis-aligned D-dimensional box: the Cartesian product of one
/// [`Interval`] per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Region<T: Scalar, const D: usize>(pub [Interval<T>; D]);

pub type Rect<T> = Region<T, 2>;
pub type Cuboid<T> = Region<T, 3>;

impl<T: Scalar, const D: usize> Region<T, D> {
    pub fn new(axes: [Interval<T>; D]) -> Self {
        Region(axes)
    }

    /// Per-axis lower bounds as a point.
    pub fn lower(&self) -> Vector<T, D> {
        Matrix::from_fn(|_, d| self.0[d].lower.clone())
    }

    /// Per-axis upper bounds as a point.
    pub fn upper(&self) -> Vector<T, D> {
        Matrix::from_fn(|_, d| self.0[d].upper.clone())
    }

    /// Per-axis sizes (`upper - lower`).
    pub fn size(&self) -> Vector<T, D> {
        &self.upper() - &self.lower()
    }

    /// Midpoint of the box; integer scalars truncate.
    pub fn center(&self) -> Vector<T, D> {
        (&self.lower() + &self.upper()) / T::from_num_den(2, 1)
    }
}

impl<T: Scalar, const D: usize> Index<usize> for Region<T, D> {
    type Output = Interval<T>;
    fn index(&self, d: usize) -> &Interval<T> {
        &self.0[d]
    }
}

impl<T: Scalar, const D: usize> IndexMut<usize> for Region<T, D> {
    fn index_mut(&mut self, d: usize) -> &mut Interval<T> {
        &mut self.0[d]
    }
}
