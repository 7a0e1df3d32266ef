use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 2.0, 3.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.min_x(), 0.0);
    assert_eq!(rect.max_x(), 4.0);
    assert_eq!(rect.min_y(), 0.0);
    assert_eq!(rect.max_y(), 6.0);
    assert_eq!(rect.center(), Point::new(2.0, 3.0));
}

#[test]
fn test_contains_point_center() {
    let rect = Rectangle::new(0.0, 0.0, 2.0, 3.0);
    assert!(rect.contains(&Point::new(0.0, 0.0)));
}

#[test]
fn test_contains_point_is_inclusive() {
    let rect = Rectangle::new(0.0, 0.0, 8.0, 8.0);
    assert!(rect.contains(&Point::new(8.0, 8.0)));
    assert!(rect.contains(&Point::new(-8.0, -8.0)));
    assert!(rect.contains(&Point::new(8.0, -3.0)));
    assert!(!rect.contains(&Point::new(8.000001, 0.0)));
    assert!(!rect.contains(&Point::new(0.0, -8.5)));
}

#[test]
fn test_intersects() {
    let a = Rectangle::new(0.0, 0.0, 5.0, 5.0);
    let b = Rectangle::new(7.0, 7.0, 5.0, 5.0);
    let c = Rectangle::new(20.0, 20.0, 5.0, 5.0);

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
    assert!(!c.intersects(&a));
}

#[test]
fn test_intersects_touching_edges() {
    let a = Rectangle::new(0.0, 0.0, 1.0, 1.0);
    let right = Rectangle::new(2.0, 0.0, 1.0, 1.0);
    let corner = Rectangle::new(2.0, 2.0, 1.0, 1.0);
    assert!(a.intersects(&right));
    assert!(a.intersects(&corner));
    assert!(!a.intersects(&Rectangle::new(2.5, 0.0, 1.0, 1.0)));
}

#[test]
fn test_intersects_containment() {
    let outer = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    let inner = Rectangle::new(1.0, 1.0, 1.0, 1.0);
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn test_is_valid() {
    assert!(Rectangle::new(0.0, 0.0, 0.0, 0.0).is_valid());
    assert!(Rectangle::new(-3.0, 4.0, 1.0, 2.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, -1.0, 1.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, 1.0, f64::INFINITY).is_valid());
    assert!(!Rectangle::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
}

#[test]
fn test_quadrants_share_center_edges() {
    let rect = Rectangle::new(1.0, -1.0, 4.0, 2.0);
    let [nw, ne, sw, se] = rect.quadrants();
    let center = rect.center();
    for quadrant in [nw, ne, sw, se] {
        assert!(quadrant.contains(&center));
        assert_eq!(quadrant.w, 2.0);
        assert_eq!(quadrant.h, 1.0);
    }
    assert!(nw.max_y() == rect.max_y() && nw.min_x() == rect.min_x());
    assert!(se.min_y() == rect.min_y() && se.max_x() == rect.max_x());
}

#[test]
fn test_point_equality_is_exact() {
    assert_eq!(Point::new(1.0, 2.0), Point::from((1.0, 2.0)));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.0 + f64::EPSILON * 4.0));
}

#[test]
fn test_random_point_inside() {
    let rect = Rectangle::new(2.0, 3.0, 3.0, 4.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let p = rect.random_point_inside(&mut rng);
        assert!(rect.contains(&p));
    }
}

#[test]
fn test_random_point_inside_degenerate_rectangle() {
    let rect = Rectangle::new(2.0, 3.0, 0.0, 0.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let p = rect.random_point_inside(&mut rng);
    assert_eq!(p, Point::new(2.0, 3.0));
}
