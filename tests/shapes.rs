// SPDX-License-Identifier: MIT

use algeo::geometry::circular::Circle;
use algeo::geometry::interval::Interval;
use algeo::geometry::linear_shape::{Segment, Segment2};
use algeo::geometry::matrix::{vec2, vec3};
use algeo::geometry::polygon::{DynPolygon, Polygon, Triangle2};
use algeo::geometry::region::{Rect, Region};

#[test]
fn interval_contains_is_half_open() {
    let i = Interval::new(2.0, 7.0);

    assert!(i.contains(&2.0));
    assert!(i.contains(&6.999));
    assert!(!i.contains(&7.0));
    assert!(!i.contains(&1.999));
}

#[test]
fn interval_size_and_interpolate() {
    let i = Interval::new(2.0, 7.0);

    assert_eq!(i.size(), 5.0);
    assert_eq!(i.interpolate(&1.0), 2.0);
    assert_eq!(i.interpolate(&0.0), 7.0);
    assert_eq!(i.interpolate(&0.5), 4.5);
}

#[test]
fn interval_encloses_is_inclusive() {
    let outer = Interval::new(0.0, 10.0);

    assert!(outer.encloses(&Interval::new(0.0, 10.0)));
    assert!(outer.encloses(&Interval::new(3.0, 7.0)));
    assert!(!outer.encloses(&Interval::new(-1.0, 5.0)));
    assert!(!outer.encloses(&Interval::new(5.0, 11.0)));
}

#[test]
fn interval_intersects_at_shared_endpoint() {
    let a = Interval::new(0.0, 5.0);
    let b = Interval::new(5.0, 9.0);
    let c = Interval::new(6.0, 9.0);

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
}

#[test]
fn interval_shift_and_scale() {
    let i = Interval::new(1.0, 3.0) + 2.0;
    assert_eq!(i, Interval::new(3.0, 5.0));

    let j = Interval::new(1.0, 3.0) * 2.0;
    assert_eq!(j, Interval::new(2.0, 6.0));
}

#[test]
fn region_bounds_size_and_center() {
    let r: Rect<f64> = Region::new([Interval::new(0.0, 5.0), Interval::new(1.0, 3.0)]);

    assert_eq!(r.lower(), vec2(0.0, 1.0));
    assert_eq!(r.upper(), vec2(5.0, 3.0));
    assert_eq!(r.size(), vec2(5.0, 2.0));
    assert_eq!(r.center(), vec2(2.5, 2.0));
}

#[test]
fn region_encloses_and_intersects_per_axis() {
    let outer: Rect<f64> = Region::new([Interval::new(0.0, 10.0), Interval::new(0.0, 10.0)]);
    let inner: Rect<f64> = Region::new([Interval::new(2.0, 4.0), Interval::new(3.0, 8.0)]);
    let crossing: Rect<f64> = Region::new([Interval::new(8.0, 12.0), Interval::new(5.0, 6.0)]);
    let outside: Rect<f64> = Region::new([Interval::new(11.0, 12.0), Interval::new(5.0, 6.0)]);

    assert!(outer.encloses(&inner));
    assert!(!outer.encloses(&crossing));
    assert!(outer.intersects(&crossing));
    // One disjoint axis is enough to reject.
    assert!(!outer.intersects(&outside));
}

#[test]
fn segment_direction_point_at_midpoint() {
    let s = Segment2::new(vec2(1.0, 2.0), vec2(5.0, 10.0));

    assert_eq!(s.direction(), vec2(4.0, 8.0));
    assert_eq!(s.point_at(&0.0), vec2(1.0, 2.0));
    assert_eq!(s.point_at(&1.0), vec2(5.0, 10.0));
    assert_eq!(s.point_at(&0.25), vec2(2.0, 4.0));
    assert_eq!(s.midpoint(), vec2(3.0, 6.0));
}

#[test]
fn segment_length_and_reversal() {
    let s = Segment2::new(vec2(0.0, 0.0), vec2(3.0, 4.0));

    assert_eq!(s.length(), 5.0);
    let r = s.reversed();
    assert_eq!(r.points[0], vec2(3.0, 4.0));
    assert_eq!(r.points[1], vec2(0.0, 0.0));
    assert_eq!(r.length(), 5.0);
}

#[test]
fn segment_translation() {
    let s = Segment::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
    let t = &s + &vec3(2.0, 0.0, -1.0);

    assert_eq!(t.points[0], vec3(2.0, 0.0, -1.0));
    assert_eq!(t.points[1], vec3(3.0, 1.0, 0.0));
}

#[test]
fn circle_contains_includes_boundary() {
    let c = Circle::new(vec2(0.0, 0.0), 5.0);

    assert!(c.contains(&vec2(3.0, 4.0)));
    assert!(c.contains(&vec2(1.0, 1.0)));
    assert!(!c.contains(&vec2(4.0, 4.0)));
}

#[test]
fn circle_translation() {
    let c = Circle::new(vec2(1.0, 1.0), 2.0);
    let moved = &c + &vec2(3.0, -1.0);

    assert_eq!(moved.center, vec2(4.0, 0.0));
    assert_eq!(moved.radius, 2.0);
}

#[test]
fn polygon_sides_wrap_around() {
    let t = Triangle2::new([vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)]);

    let s2 = t.side(2);
    assert_eq!(s2.points[0], vec2(0.0, 4.0));
    assert_eq!(s2.points[1], vec2(0.0, 0.0));
}

#[test]
fn quad_vertex_access() {
    let q = Polygon::new([
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(1.0, 1.0),
        vec2(0.0, 1.0),
    ]);

    assert_eq!(*q.vertex(3), vec2(0.0, 1.0));
    assert_eq!(q[1], vec2(1.0, 0.0));
}

#[test]
fn triangle_contains_boundary_and_interior() {
    let t = Triangle2::new([vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)]);

    assert!(t.contains(&vec2(1.0, 1.0)));
    assert!(t.contains(&vec2(2.0, 0.0)));
    assert!(t.contains(&vec2(0.0, 0.0)));
    assert!(!t.contains(&vec2(3.0, 3.0)));
    assert!(!t.contains(&vec2(-0.1, 1.0)));
}

#[test]
fn dyn_polygon_grows() {
    let mut p: DynPolygon<f64, 2> = DynPolygon::new(vec![vec2(0.0, 0.0)]);
    assert_eq!(p.len(), 1);

    p.push(vec2(1.0, 0.0));
    p.push(vec2(1.0, 1.0));
    assert_eq!(p.len(), 3);
    assert_eq!(*p.vertex(2), vec2(1.0, 1.0));
    assert!(!p.is_empty());
}
