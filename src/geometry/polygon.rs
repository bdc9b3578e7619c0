// SPDX-License-Identifier: MIT

use std::ops::{Index, IndexMut};

use crate::geometry::linear_shape::Segment;
use crate::geometry::matrix::Vector;
use crate::numeric::scalar::Scalar;

/// Fixed-size polygon: N vertices in D dimensions.
///
/// No closedness or convexity invariant is enforced; sign-based
/// predicates (orientation, point-in-triangle) assume the caller supplies
/// vertices in a consistent winding.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon<T: Scalar, const D: usize, const N: usize>(pub [Vector<T, D>; N]);

pub type Triangle<T, const D: usize> = Polygon<T, D, 3>;
pub type Quad<T, const D: usize> = Polygon<T, D, 4>;

pub type Triangle2<T> = Triangle<T, 2>;
pub type Quad2<T> = Quad<T, 2>;

impl<T: Scalar, const D: usize, const N: usize> Polygon<T, D, N> {
    pub fn new(vertices: [Vector<T, D>; N]) -> Self {
        Polygon(vertices)
    }

    pub fn vertex(&self, i: usize) -> &Vector<T, D> {
        &self.0[i]
    }

    /// Edge from vertex `i` to vertex `i + 1`, wrapping around.
    pub fn side(&self, i: usize) -> Segment<T, D> {
        Segment::new(self.0[i % N].clone(), self.0[(i + 1) % N].clone())
    }
}

impl<T: Scalar, const D: usize, const N: usize> Index<usize> for Polygon<T, D, N> {
    type Output = Vector<T, D>;
    fn index(&self, i: usize) -> &Vector<T, D> {
        &self.0[i]
    }
}

impl<T: Scalar, const D: usize, const N: usize> IndexMut<usize> for Polygon<T, D, N> {
    fn index_mut(&mut self, i: usize) -> &mut Vector<T, D> {
        &mut self.0[i]
    }
}

/// Run-time-sized vertex list; a plain data holder.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DynPolygon<T: Scalar, const D: usize>(pub Vec<Vector<T, D>>);

impl<T: Scalar, const D: usize> DynPolygon<T, D> {
    pub fn new(vertices: Vec<Vector<T, D>>) -> Self {
        DynPolygon(vertices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vertex(&self, i: usize) -> &Vector<T, D> {
        &self.0[i]
    }

    pub fn push(&mut self, vertex: Vector<T, D>) {
        self.0.push(vertex);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T, D>> {
        self.0.iter()
    }
}
