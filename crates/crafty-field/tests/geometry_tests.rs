// Host-side tests for the geometry helpers.

use crafty_field::geometry::*;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

#[test]
fn distance_is_euclidean_and_symmetric() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(distance(a, b), 5.0);
    assert_eq!(distance(b, a), 5.0);
    assert_eq!(distance_squared(a, b), 25.0);
    assert_eq!(distance(b, b), 0.0);
}

#[test]
fn squared_distance_preserves_ordering() {
    let o = Vec2::new(10.0, -3.0);
    let pts = [Vec2::new(1.0, 1.0), Vec2::new(50.0, 2.0), Vec2::new(10.5, -3.0)];
    for p in pts {
        for q in pts {
            assert_eq!(
                distance(o, p) < distance(o, q),
                distance_squared(o, p) < distance_squared(o, q)
            );
        }
    }
}

#[test]
fn angle_points_along_axes() {
    let o = Vec2::ZERO;
    assert_eq!(angle(o, Vec2::new(1.0, 0.0)), 0.0);
    assert!((angle(o, Vec2::new(0.0, 2.0)) - FRAC_PI_2).abs() < 1e-6);
    assert!((angle(o, Vec2::new(-1.0, 0.0)) - PI).abs() < 1e-6);
}

#[test]
fn ease_in_out_endpoints_and_monotonic() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    assert_eq!(ease_in_out(-3.0), 0.0);
    assert_eq!(ease_in_out(7.0), 1.0);
    assert_eq!(ease_in_out(f32::NAN), 0.0);
    let mut prev = 0.0;
    for i in 0..=100 {
        let e = ease_in_out(i as f32 / 100.0);
        assert!(e >= prev);
        prev = e;
    }
}

#[test]
fn lerp_hits_endpoints() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(5.0, -2.0);
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    assert_eq!(lerp(a, b, 0.5), Vec2::new(3.0, 0.0));
}
