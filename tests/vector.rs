// SPDX-License-Identifier: MIT

use algeo::geometry::matrix::{Vector2, vec2, vec3};

#[test]
fn dot_product() {
    let a = vec2(2.0, 3.0);
    let b = vec2(4.0, 5.0);
    assert_eq!(a.dot(&b), 23.0);
}

#[test]
fn dot_is_commutative() {
    let a = vec2(2.0, 3.0);
    let b = vec2(4.0, 5.0);
    assert_eq!(a.dot(&b), b.dot(&a));

    let u = vec3(1.0, -2.0, 3.0);
    let v = vec3(-4.0, 5.0, 0.5);
    assert_eq!(u.dot(&v), v.dot(&u));
}

#[test]
fn norm_is_squared_length() {
    let v = vec2(2.0, 3.0);
    assert_eq!(v.norm(), 13.0);
}

#[test]
fn length_of_unit_diagonal() {
    let v: Vector2<f64> = vec2(1.0, 1.0);
    assert!((v.length() - 1.4142).abs() < 0.001);
}

#[test]
fn cross_2d_is_antisymmetric() {
    let a = vec2(2.0, 3.0);
    let b = vec2(4.0, 5.0);
    assert_eq!(a.cross(&b), -2.0);
    assert_eq!(b.cross(&a), 2.0);
}

#[test]
fn cross_3d_is_antisymmetric_and_orthogonal() {
    let a = vec3(1.0, 2.0, 3.0);
    let b = vec3(4.0, 5.0, 6.0);
    let c = a.cross(&b);

    assert_eq!(c, vec3(-3.0, 6.0, -3.0));
    assert_eq!(b.cross(&a), -&c);
    assert_eq!(c.dot(&a), 0.0);
    assert_eq!(c.dot(&b), 0.0);
}

#[test]
fn unit_has_length_one() {
    let v: Vector2<f64> = vec2(3.0, 4.0);
    let u = v.unit();
    assert!((u.length() - 1.0).abs() < 1e-12);
    assert_eq!(u, vec2(0.6, 0.8));
}

#[test]
fn unit_of_zero_vector_stays_zero() {
    let z = vec2(0.0, 0.0);
    assert_eq!(z.unit(), z);
}

#[test]
fn projection_and_rejection_decompose() {
    let a = vec2(3.0, 4.0);
    let b = vec2(2.0, 0.0);

    let p = a.project_onto(&b);
    let r = a.reject_from(&b);

    assert_eq!(p, vec2(3.0, 0.0));
    assert_eq!(r, vec2(0.0, 4.0));
    assert_eq!(&p + &r, a);
}

#[test]
fn perpendicular_rotates_ccw() {
    let v = vec2(2.0, 1.0);
    let p = v.perpendicular();
    assert_eq!(p, vec2(-1.0, 2.0));
    assert_eq!(v.dot(&p), 0.0);
    assert!(v.cross(&p) > 0.0);
}

#[test]
fn distance_between_points() {
    let a = vec2(1.0, 1.0);
    let b = vec2(4.0, 5.0);
    assert_eq!(a.distance_to(&b), 5.0);
}

#[test]
fn signed_angle_2d() {
    let x = vec2(1.0, 0.0);
    let y = vec2(0.0, 1.0);
    let half_pi = std::f64::consts::FRAC_PI_2;

    assert!((x.angle_to(&y) - half_pi).abs() < 1e-12);
    assert!((y.angle_to(&x) + half_pi).abs() < 1e-12);
}

#[test]
fn unsigned_angle_3d() {
    let x = vec3(1.0, 0.0, 0.0);
    let y = vec3(0.0, 2.0, 0.0);
    assert!((x.angle_to(&y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn integer_vectors_support_ring_operations() {
    let a = vec2(2i64, 3);
    let b = vec2(4i64, 5);

    assert_eq!(a.dot(&b), 23);
    assert_eq!(a.cross(&b), -2);
    assert_eq!(&a + &b, vec2(6, 8));
}
