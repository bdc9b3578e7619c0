// SPDX-License-Identifier: MIT

//! Derived points and circles of a planar triangle.

use crate::geometry::circular::Circle;
use crate::geometry::linear_shape::Segment2;
use crate::geometry::matrix::Vector2;
use crate::geometry::polygon::Triangle2;
use crate::numeric::scalar::{Real, Scalar};
use crate::operations::Zero;

impl<T: Scalar> Triangle2<T> {
    /// Arithmetic mean of the vertices; integer scalars truncate.
    pub fn centroid(&self) -> Vector2<T> {
        (&(&self.0[0] + &self.0[1]) + &self.0[2]) / T::from_num_den(3, 1)
    }
}

impl<T: Real> Triangle2<T> {
    /// Altitude from vertex `i`: the segment from the vertex to the foot
    /// of the perpendicular on the supporting line of the opposite side.
    ///
    /// Panics when the opposite side is shorter than the tolerance 1/10,
    /// the triangle is then degenerate.
    pub fn altitude(&self, i: usize) -> Segment2<T> {
        let epsilon = T::from_num_den(1, 10);
        let vertex = self.0[i % 3].clone();
        let foot = self
            .side(i + 1)
            .to_line()
            .project(&vertex, &epsilon)
            .expect("degenerate triangle");
        Segment2::new(vertex, foot)
    }

    /// Common point of the altitudes.
    ///
    /// Panics for a degenerate triangle.
    pub fn orthocenter(&self) -> Vector2<T> {
        let epsilon = T::from_num_den(1, 10_000);
        self.altitude(0)
            .to_line()
            .intersection(&self.altitude(1).to_line(), &epsilon)
            .expect("degenerate triangle")
    }

    /// Common point of the perpendicular side bisectors; equidistant from
    /// all three vertices.
    ///
    /// Panics for a degenerate triangle.
    pub fn circumcenter(&self) -> Vector2<T> {
        let epsilon = T::from_num_den(1, 10_000);
        let bisector = |i: usize| {
            let side = self.side(i);
            side.perpendicular_at(&side.midpoint()).to_line()
        };
        bisector(0)
            .intersection(&bisector(1), &epsilon)
            .expect("degenerate triangle")
    }

    /// Common point of the angle bisectors: the side-length-weighted mean
    /// of the vertices.
    pub fn incenter(&self) -> Vector2<T> {
        let mut weighted = Vector2::zero();
        let mut perimeter = T::zero();
        for i in 0..3 {
            // Weight of vertex i is the length of the side it faces.
            let w = self.side(i + 1).length();
            weighted += &(&self.0[i] * w.clone());
            perimeter += &w;
        }
        weighted / perimeter
    }

    /// Inscribed circle: centered at the incenter, tangent to the sides.
    ///
    /// Panics for a degenerate triangle.
    pub fn incircle(&self) -> Circle<T> {
        let epsilon = T::from_num_den(1, 10);
        let center = self.incenter();
        let touch = self
            .side(0)
            .to_line()
            .project(&center, &epsilon)
            .expect("degenerate triangle");
        let radius = center.distance_to(&touch);
        Circle::new(center, radius)
    }

    /// Circumscribed circle through all three vertices.
    ///
    /// Panics for a degenerate triangle.
    pub fn circumcircle(&self) -> Circle<T> {
        let center = self.circumcenter();
        let radius = center.distance_to(&self.0[0]);
        Circle::new(center, radius)
    }
}
