use glam::Vec2;

// ---------------- Coordinate helpers ----------------

/// Maps a client-space pointer position into field space.
///
/// `rect_origin`/`rect_size` are the canvas bounding client rect, which already
/// reflects the current scroll offset; `field_size` is the size the field was
/// built for. A collapsed rect maps everything to the field center.
#[inline]
pub fn client_to_canvas(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    field_size: Vec2,
) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return field_size * 0.5;
    }
    (client - rect_origin) / rect_size * field_size
}

/// Whether a vertical span `[top, bottom)` in client space overlaps the
/// viewport by at least `min_px`.
#[inline]
pub fn region_visible(top: f64, bottom: f64, viewport_height: f64, min_px: f64) -> bool {
    let overlap = bottom.min(viewport_height) - top.max(0.0);
    overlap >= min_px
}

/// Device pixel ratio clamped to `[1, max]`; unknown ratios fall back to 1.
#[inline]
pub fn effective_pixel_ratio(dpr: f64, max: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.clamp(1.0, max.max(1.0))
    } else {
        1.0
    }
}
