use glam::Vec2;

// Displacement-to-degrees divisor for both tilt axes
pub const TILT_DIVISOR: f32 = 25.0;

/// Rotation angles (degrees) for a pointer at `pointer` over a card of
/// `size`, both in card-local pixels.
///
/// `x` is the rotation around the horizontal axis and follows the vertical
/// displacement; `y` follows the horizontal displacement with the sign
/// flipped so the card tips toward the pointer. A pointer at the exact
/// center yields zero on both axes.
#[inline]
pub fn tilt_angles(pointer: Vec2, size: Vec2) -> Vec2 {
    let center = size * 0.5;
    Vec2::new(
        (pointer.y - center.y) / TILT_DIVISOR,
        (center.x - pointer.x) / TILT_DIVISOR,
    )
}
