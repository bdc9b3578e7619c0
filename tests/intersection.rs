// SPDX-License-Identifier: MIT

use algeo::geometry::linear_shape::{Line2, Ray2, Segment2};
use algeo::geometry::matrix::vec2;
use algeo::kernel::{interpolate, line_intersection_parameters, orientation_sign};

const EPS: f64 = 1e-9;

#[test]
fn crossing_segments_meet_in_the_middle() {
    let a = Segment2::new(vec2(0.0, 0.0), vec2(10.0, 10.0));
    let b = Segment2::new(vec2(0.0, 10.0), vec2(10.0, 0.0));

    assert_eq!(a.intersection(&b, &EPS), Some(vec2(5.0, 5.0)));
    assert_eq!(b.intersection(&a, &EPS), Some(vec2(5.0, 5.0)));
}

#[test]
fn parallel_shapes_never_intersect() {
    let a = Segment2::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
    let b = Segment2::new(vec2(0.0, 1.0), vec2(10.0, 1.0));

    assert_eq!(a.intersection(&b, &EPS), None);
}

#[test]
fn collinear_overlap_counts_as_parallel() {
    let a = Segment2::new(vec2(0.0, 0.0), vec2(10.0, 0.0));
    let b = Segment2::new(vec2(5.0, 0.0), vec2(15.0, 0.0));

    assert_eq!(a.intersection(&b, &EPS), None);
}

#[test]
fn domain_policies_differ_on_the_same_lines() {
    // Supporting lines cross at (15, 0), beyond the right end of `a`.
    let a0 = vec2(0.0, 0.0);
    let a1 = vec2(10.0, 0.0);
    let b0 = vec2(15.0, -5.0);
    let b1 = vec2(15.0, 5.0);

    let seg = Segment2::new(a0.clone(), a1.clone());
    let ray = Ray2::new(a0.clone(), a1.clone());
    let line = Line2::new(a0, a1);
    let other = Segment2::new(b0, b1);

    assert_eq!(seg.intersection(&other, &EPS), None);
    assert_eq!(ray.intersection(&other, &EPS), Some(vec2(15.0, 0.0)));
    assert_eq!(line.intersection(&other, &EPS), Some(vec2(15.0, 0.0)));
}

#[test]
fn ray_misses_behind_its_origin() {
    let ray = Ray2::new(vec2(0.0, 0.0), vec2(1.0, 0.0));
    let line = Line2::new(vec2(0.0, 0.0), vec2(1.0, 0.0));
    let other = Line2::new(vec2(-3.0, -5.0), vec2(-3.0, 5.0));

    assert_eq!(ray.intersection(&other, &EPS), None);
    assert_eq!(line.intersection(&other, &EPS), Some(vec2(-3.0, 0.0)));
}

#[test]
fn raw_parameters_locate_the_crossing_on_both_shapes() {
    let (t_a, t_b) = line_intersection_parameters(
        &vec2(0.0, 0.0),
        &vec2(10.0, 10.0),
        &vec2(0.0, 10.0),
        &vec2(10.0, 0.0),
        &EPS,
    )
    .unwrap();

    assert_eq!(t_a, 0.5);
    assert_eq!(t_b, 0.5);
}

#[test]
fn projection_onto_segment() {
    let s = Segment2::new(vec2(0.0, 0.0), vec2(10.0, 0.0));

    assert_eq!(s.project(&vec2(3.0, 7.0), &EPS), Some(vec2(3.0, 0.0)));
    assert_eq!(s.project(&vec2(5.0, 0.0), &EPS), Some(vec2(5.0, 0.0)));
    // Foot of the perpendicular falls outside 0 <= t <= 1.
    assert_eq!(s.project(&vec2(12.0, 7.0), &EPS), None);
}

#[test]
fn projection_onto_line_is_unbounded() {
    let l = Line2::new(vec2(0.0, 0.0), vec2(10.0, 0.0));

    assert_eq!(l.project(&vec2(12.0, 7.0), &EPS), Some(vec2(12.0, 0.0)));
    assert_eq!(l.project(&vec2(-4.0, -2.0), &EPS), Some(vec2(-4.0, 0.0)));
}

#[test]
fn projection_onto_degenerate_shape_fails() {
    let s = Segment2::new(vec2(2.0, 2.0), vec2(2.0, 2.0));
    assert_eq!(s.project(&vec2(5.0, 5.0), &EPS), None);
}

#[test]
fn perpendicular_is_a_ccw_quarter_turn() {
    let s = Segment2::new(vec2(0.0, 0.0), vec2(4.0, 0.0));
    let p = s.perpendicular();

    assert_eq!(p.points[0], vec2(0.0, 0.0));
    assert_eq!(p.points[1], vec2(0.0, 4.0));
    assert_eq!(s.direction().dot(&p.direction()), 0.0);

    let at = s.perpendicular_at(&vec2(2.0, 0.0));
    assert_eq!(at.points[0], vec2(2.0, 0.0));
    assert_eq!(at.points[1], vec2(2.0, 4.0));
}

#[test]
fn interpolate_blends_toward_the_first_argument() {
    assert_eq!(interpolate(&1.0, 10.0, 20.0), 10.0);
    assert_eq!(interpolate(&0.0, 10.0, 20.0), 20.0);
    assert_eq!(interpolate(&0.25, 10.0, 20.0), 17.5);

    let a = vec2(0.0, 0.0);
    let b = vec2(4.0, 8.0);
    assert_eq!(interpolate(&0.5, a, b), vec2(2.0, 4.0));
}

#[test]
fn orientation_agrees_with_intersection_side() {
    let a = vec2(0.0, 0.0);
    let b = vec2(10.0, 0.0);

    assert_eq!(orientation_sign(&vec2(5.0, 3.0), &a, &b), 1);
    assert_eq!(orientation_sign(&vec2(5.0, -3.0), &a, &b), -1);
    assert_eq!(orientation_sign(&vec2(20.0, 0.0), &a, &b), 0);
}
