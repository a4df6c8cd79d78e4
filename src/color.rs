/// CSS `rgba()` string for a linear `[r, g, b, a]` color in 0..1.
pub fn css_rgba(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    let alpha = if color[3].is_nan() {
        0.0
    } else {
        color[3].clamp(0.0, 1.0)
    };
    format!(
        "rgba({},{},{},{:.3})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        alpha
    )
}
