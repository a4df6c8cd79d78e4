//! Per-frame drawing of a field onto an abstract 2D surface.

use crate::constants::*;
use crate::field::Field;
use crate::geometry::distance;
use glam::Vec2;

pub type Rgba = [f32; 4];

/// Minimal 2D drawing target. The web front-end implements it on a canvas
/// 2D context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    /// `glow` is a blur radius in pixels, `None` for a flat disc.
    fn disc(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<f32>);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub lines: usize,
    pub points: usize,
}

/// Pointer influence: 1 at distance 0, linear falloff to 0 at `radius`.
#[inline]
pub fn activity_for_distance(d: f32, radius: f32) -> f32 {
    if d.is_nan() || radius <= 0.0 {
        return 0.0;
    }
    (1.0 - d / radius).clamp(0.0, 1.0)
}

/// Twinkle factor in `[OFFSET - AMPLITUDE, OFFSET + AMPLITUDE]`.
#[inline]
pub fn twinkle(phase: f32, speed: f32, time_s: f32) -> f32 {
    (phase + speed * time_s).sin() * TWINKLE_AMPLITUDE + TWINKLE_OFFSET
}

#[inline]
pub fn point_alpha(brightness: f32, twinkle: f32, activity: f32) -> f32 {
    (brightness * twinkle + activity * ACTIVITY_BOOST).clamp(0.0, 1.0)
}

/// Recomputes every point's activity against the pointer, in field order.
pub fn update_activity(field: &mut Field, pointer: Vec2) {
    for p in &mut field.points {
        p.activity = activity_for_distance(distance(pointer, p.position), ACTIVITY_RADIUS);
    }
}

pub fn draw_frame<S: Surface + ?Sized>(
    field: &mut Field,
    pointer: Vec2,
    time_s: f32,
    surface: &mut S,
) -> FrameStats {
    let mut stats = FrameStats::default();
    surface.clear(field.width, field.height);
    update_activity(field, pointer);

    if field.profile.edges_enabled {
        stats.lines = draw_edges(field, surface);
    }

    let glow = field.profile.glow_enabled;
    for p in &field.points {
        let alpha = point_alpha(
            p.brightness,
            twinkle(p.twinkle_phase, p.twinkle_speed, time_s),
            p.activity,
        );
        let radius = p.radius * (1.0 + p.activity * (ACTIVITY_RADIUS_GROWTH - 1.0));
        let [r, g, b] = p.color;
        surface.disc(
            p.position,
            radius,
            [r, g, b, alpha],
            glow.then(|| GLOW_BLUR * (0.5 + p.activity)),
        );
        stats.points += 1;
    }
    stats
}

fn draw_edges<S: Surface + ?Sized>(field: &Field, surface: &mut S) -> usize {
    let points = &field.points;
    let [r, g, b] = EDGE_COLOR;
    let mut lines = 0;
    for (i, p) in points.iter().enumerate() {
        if p.activity <= 0.0 {
            continue;
        }
        for &j in &p.neighbors {
            let Some(q) = points.get(j) else { continue };
            // mutual links are drawn once, from the lower index
            if j < i && q.activity > 0.0 && q.neighbors.contains(&i) {
                continue;
            }
            let avg = (p.activity + q.activity) * 0.5;
            if avg < EDGE_MIN_ALPHA {
                continue;
            }
            surface.line(
                p.position,
                q.position,
                [r, g, b, avg * EDGE_MAX_ALPHA],
                avg * EDGE_MAX_WIDTH,
            );
            lines += 1;
        }
    }
    lines
}
