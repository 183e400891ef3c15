#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_sub_is_componentwise() {
    let d = Point::new(10.0, 4.0).sub(Point::new(3.0, 6.0));
    assert_eq!(d, Point::new(7.0, -2.0));
}

#[test]
fn point_clamp_keeps_inside_points() {
    let p = Point::new(120.0, 80.0).clamp_to(500.0, 500.0);
    assert_eq!(p, Point::new(120.0, 80.0));
}

#[test]
fn point_clamp_pins_outside_points_to_edges() {
    assert_eq!(Point::new(-5.0, 900.0).clamp_to(500.0, 500.0), Point::new(0.0, 500.0));
    assert_eq!(Point::new(501.0, -1.0).clamp_to(500.0, 500.0), Point::new(500.0, 0.0));
}

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn rect_contains_interior_and_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert!(r.contains(Point::new(25.0, 30.0)));
    assert!(r.contains(Point::new(10.0, 20.0)));
    assert!(r.contains(Point::new(40.0, 60.0)));
}

#[test]
fn rect_rejects_outside_points() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert!(!r.contains(Point::new(9.9, 30.0)));
    assert!(!r.contains(Point::new(25.0, 60.1)));
}
