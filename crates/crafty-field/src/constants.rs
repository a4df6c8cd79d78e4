// Shared tuning constants for the point field, wander motion and frame drawing.

// Point attributes (sampled uniformly at field construction)
pub const POINT_RADIUS_MIN: f32 = 0.5;
pub const POINT_RADIUS_MAX: f32 = 2.5;
pub const BRIGHTNESS_MIN: f32 = 0.2;
pub const BRIGHTNESS_MAX: f32 = 1.0;
pub const TWINKLE_SPEED_MIN: f32 = 0.5; // radians per second
pub const TWINKLE_SPEED_MAX: f32 = 2.0;

// Palette the points pick their color from
pub const POINT_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.97, 0.92], // warm white
    [0.98, 0.82, 0.55], // gold
    [0.96, 0.66, 0.72], // rose
    [0.76, 0.72, 0.96], // lavender
];

// Wander
pub const WANDER_RADIUS: f32 = 30.0; // max offset from origin in canvas px
pub const WANDER_DURATION_MIN_MS: f64 = 2000.0;
pub const WANDER_DURATION_MAX_MS: f64 = 4000.0;

// Pointer influence
pub const ACTIVITY_RADIUS: f32 = 180.0; // activity reaches 0 at this distance
pub const ACTIVITY_BOOST: f32 = 0.6; // extra alpha at full activity
pub const ACTIVITY_RADIUS_GROWTH: f32 = 1.5; // extra radius factor at full activity

// Twinkle: sin(phase) * amplitude + offset
pub const TWINKLE_AMPLITUDE: f32 = 0.3;
pub const TWINKLE_OFFSET: f32 = 0.7;

// Edges between graph neighbors
pub const EDGE_MIN_ALPHA: f32 = 0.05; // averages below this are not drawn
pub const EDGE_MAX_ALPHA: f32 = 0.6;
pub const EDGE_MAX_WIDTH: f32 = 1.2;
pub const EDGE_COLOR: [f32; 3] = [0.98, 0.86, 0.7];

// Glow
pub const GLOW_BLUR: f32 = 8.0;

// Device classification
pub const SMALL_VIEWPORT_WIDTH: f32 = 768.0;
pub const LOW_HARDWARE_CONCURRENCY: u32 = 2;
