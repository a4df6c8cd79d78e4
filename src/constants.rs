// Front-end wiring constants: page bindings, timer cadence and visibility.

// Canvas the star network is drawn into; pages without it simply skip the animation
pub const CANVAS_ELEMENT_ID: &str = "crafty-canvas";

// Wander timer cadence, independent of the animation-frame rate
pub const MOTION_TICK_MS: i32 = 33;

// A canvas counts as visible while at least this many px of it are on screen
pub const VISIBLE_MIN_PX: f64 = 1.0;

// Media query matched by devices whose primary pointer cannot hover
pub const TOUCH_ONLY_QUERY: &str = "(hover: none)";

// Backing-store scale is capped so very dense screens do not blow up fill cost
pub const MAX_PIXEL_RATIO: f64 = 2.0;
