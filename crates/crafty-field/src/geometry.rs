//! Distance, angle and easing helpers shared by the field and motion code.

use glam::Vec2;

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Squared Euclidean distance; used wherever only comparisons are needed.
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2) -> f32 {
    a.distance_squared(b)
}

/// Heading from `from` towards `to` in radians, in (-PI, PI].
#[inline]
pub fn angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Cubic ease-in-out on a clamped `t`.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
