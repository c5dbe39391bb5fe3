// Host-side tests for the cursor-trail buffer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod trail {
    include!("../src/core/trail.rs");
}

use glam::Vec2;
use instant::Instant;
use trail::*;

#[test]
fn starts_empty() {
    let trail = CursorTrail::new();
    assert!(trail.is_empty());
    assert_eq!(trail.len(), 0);
}

#[test]
fn never_exceeds_capacity() {
    let mut trail = CursorTrail::new();
    let now = Instant::now();

    for i in 0..100 {
        trail.push(Vec2::new(i as f32, 0.0), now);
        assert!(trail.len() <= TRAIL_CAPACITY);
    }
    assert_eq!(trail.len(), TRAIL_CAPACITY);
}

#[test]
fn evicts_oldest_first() {
    let mut trail = CursorTrail::new();
    let now = Instant::now();

    for i in 0..(TRAIL_CAPACITY + 5) {
        trail.push(Vec2::new(i as f32, 0.0), now);
    }

    // The first five samples fell off the front; order is preserved
    let xs: Vec<f32> = trail.points().map(|p| p.pos.x).collect();
    assert_eq!(xs.len(), TRAIL_CAPACITY);
    assert_eq!(xs[0], 5.0);
    assert_eq!(*xs.last().unwrap(), (TRAIL_CAPACITY + 4) as f32);
    assert!(xs.windows(2).all(|w| w[1] == w[0] + 1.0));
}

#[test]
fn keeps_samples_below_capacity_intact() {
    let mut trail = CursorTrail::new();
    let now = Instant::now();

    for i in 0..7 {
        trail.push(Vec2::new(i as f32, i as f32 * 2.0), now);
    }

    assert_eq!(trail.len(), 7);
    let first = trail.points().next().unwrap();
    assert_eq!(first.pos, Vec2::new(0.0, 0.0));
}
