// Host-side tests for pure card-tilt math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tilt {
    include!("../src/core/tilt.rs");
}

use glam::Vec2;
use tilt::*;

#[test]
fn center_pointer_yields_no_rotation() {
    let size = Vec2::new(300.0, 200.0);
    let rot = tilt_angles(size * 0.5, size);

    assert_eq!(rot.x, 0.0);
    assert_eq!(rot.y, 0.0);
}

#[test]
fn corner_magnitudes_follow_half_extents() {
    let (w, h) = (300.0_f32, 200.0_f32);
    let rot = tilt_angles(Vec2::ZERO, Vec2::new(w, h));

    // Top-left corner: displacement is half the card on each axis
    assert!((rot.x.abs() - (h / 2.0) / TILT_DIVISOR).abs() < 1e-6);
    assert!((rot.y.abs() - (w / 2.0) / TILT_DIVISOR).abs() < 1e-6);
}

#[test]
fn rotation_signs_tip_toward_pointer() {
    let size = Vec2::new(300.0, 200.0);

    // Pointer above center: top edge dips toward the pointer
    let above = tilt_angles(Vec2::new(150.0, 0.0), size);
    assert!(above.x < 0.0);
    assert_eq!(above.y, 0.0);

    // Pointer left of center: horizontal axis is sign-inverted
    let left = tilt_angles(Vec2::new(0.0, 100.0), size);
    assert_eq!(left.x, 0.0);
    assert!(left.y > 0.0);

    // Opposite corner flips both signs
    let bottom_right = tilt_angles(size, size);
    assert!(bottom_right.x > 0.0);
    assert!(bottom_right.y < 0.0);
}

#[test]
fn rotation_scales_linearly_with_displacement() {
    let size = Vec2::new(400.0, 400.0);
    let near = tilt_angles(Vec2::new(200.0, 250.0), size);
    let far = tilt_angles(Vec2::new(200.0, 300.0), size);

    assert!((far.x - near.x * 2.0).abs() < 1e-6);
}
