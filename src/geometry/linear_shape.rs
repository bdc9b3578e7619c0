// SPDX-License-Identifier: MIT

use std::marker::PhantomData;
use std::ops::{Add, Index, Sub};

use crate::geometry::matrix::{SquareMatrix, Vector};
use crate::numeric::scalar::{Real, Scalar};

/// Parameter-domain policy of a linear shape.
///
/// Every point of a linear shape is `p0 + t * (p1 - p0)`; the policy
/// decides which values of `t` belong to the shape. This is the single
/// polymorphic axis of the family: lines, rays and segments share their
/// representation and every algorithm except this predicate.
pub trait ParamDomain {
    fn admits<T: Scalar>(t: &T) -> bool;
}

/// All parameters: the infinite line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineKind;

/// `t >= 0`: the half-line from `p0` through `p1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayKind;

/// `0 <= t <= 1`: the segment between `p0` and `p1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentKind;

impl ParamDomain for LineKind {
    fn admits<T: Scalar>(_t: &T) -> bool {
        true
    }
}

impl ParamDomain for RayKind {
    fn admits<T: Scalar>(t: &T) -> bool {
        *t >= T::zero()
    }
}

impl ParamDomain for SegmentKind {
    fn admits<T: Scalar>(t: &T) -> bool {
        T::zero() <= *t && *t <= T::one()
    }
}

/// Two points `p0`, `p1` tagged with a [`ParamDomain`].
#[derive(Clone, Debug, PartialEq)]
pub struct LinearShape<K: ParamDomain, T: Scalar, const D: usize> {
    pub points: [Vector<T, D>; 2],
    kind: PhantomData<K>,
}

pub type Line<T, const D: usize> = LinearShape<LineKind, T, D>;
pub type Ray<T, const D: usize> = LinearShape<RayKind, T, D>;
pub type Segment<T, const D: usize> = LinearShape<SegmentKind, T, D>;

pub type Line2<T> = Line<T, 2>;
pub type Ray2<T> = Ray<T, 2>;
pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;

impl<K: ParamDomain, T: Scalar, const D: usize> LinearShape<K, T, D> {
    pub fn new(p0: Vector<T, D>, p1: Vector<T, D>) -> Self {
        LinearShape {
            points: [p0, p1],
            kind: PhantomData,
        }
    }

    /// `p1 - p0`.
    pub fn direction(&self) -> Vector<T, D> {
        &self.points[1] - &self.points[0]
    }

    /// Point at parameter `t`: `p0 + t * (p1 - p0)`.
    pub fn point_at(&self, t: &T) -> Vector<T, D> {
        &self.points[0] + &(self.direction() * t.clone())
    }

    /// Whether `t` belongs to this shape's parameter domain.
    pub fn admits(&self, t: &T) -> bool {
        K::admits(t)
    }

    /// The infinite supporting line through the same two points.
    pub fn to_line(&self) -> Line<T, D> {
        Line::new(self.points[0].clone(), self.points[1].clone())
    }

    /// Same shape with the endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.points[1].clone(), self.points[0].clone())
    }

    /// Midpoint of the two defining points; integer scalars truncate.
    pub fn midpoint(&self) -> Vector<T, D> {
        (&self.points[0] + &self.points[1]) / T::from_num_den(2, 1)
    }

    /// Applies a homogeneous transform to both defining points.
    pub fn transform<const H: usize>(&self, m: &SquareMatrix<T, H>) -> Self {
        Self::new(self.points[0].transform(m), self.points[1].transform(m))
    }
}

impl<K: ParamDomain, T: Real, const D: usize> LinearShape<K, T, D> {
    /// Distance between the defining points.
    pub fn length(&self) -> T {
        self.direction().length()
    }
}

impl<K: ParamDomain, T: Scalar, const D: usize> Index<usize> for LinearShape<K, T, D> {
    type Output = Vector<T, D>;
    fn index(&self, i: usize) -> &Vector<T, D> {
        &self.points[i]
    }
}

// ---------- Translation ----------
impl<'a, 'b, K: ParamDomain, T: Scalar, const D: usize> Add<&'b Vector<T, D>>
    for &'a LinearShape<K, T, D>
{
    type Output = LinearShape<K, T, D>;
    fn add(self, rhs: &'b Vector<T, D>) -> Self::Output {
        LinearShape::new(&self.points[0] + rhs, &self.points[1] + rhs)
    }
}

impl<'a, 'b, K: ParamDomain, T: Scalar, const D: usize> Sub<&'b Vector<T, D>>
    for &'a LinearShape<K, T, D>
{
    type Output = LinearShape<K, T, D>;
    fn sub(self, rhs: &'b Vector<T, D>) -> Self::Output {
        LinearShape::new(&self.points[0] - rhs, &self.points[1] - rhs)
    }
}
