// SPDX-License-Identifier: MIT

pub mod circular;
pub mod cofactor;
pub mod interval;
pub mod linear_shape;
pub mod matrix;
pub mod polygon;
pub mod region;
pub mod transform;
pub mod vector;

pub use circular::{Circle, CircularShape, Sphere};
pub use interval::Interval;
pub use linear_shape::{
    Line, Line2, LinearShape, ParamDomain, Ray, Ray2, Segment, Segment2, Segment3,
};
pub use matrix::{Matrix, SquareMatrix, Vector, Vector2, Vector3, vec2, vec3};
pub use polygon::{DynPolygon, Polygon, Quad, Quad2, Triangle, Triangle2};
pub use region::{Cuboid, Rect, Region};
