// Host-side tests for front-end constants and the core tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use crafty_field::constants as tuning;

#[test]
#[allow(clippy::assertions_on_constants)]
fn wiring_constants_are_sane() {
    assert!(!CANVAS_ELEMENT_ID.is_empty());
    assert!(!CANVAS_ELEMENT_ID.starts_with('#'));
    // the wander timer must tick many times within the shortest wander leg
    assert!(MOTION_TICK_MS > 0);
    assert!((MOTION_TICK_MS as f64) * 10.0 < tuning::WANDER_DURATION_MIN_MS);
    assert!(VISIBLE_MIN_PX >= 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(TOUCH_ONLY_QUERY.starts_with('(') && TOUCH_ONLY_QUERY.ends_with(')'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_ranges_are_ordered() {
    assert!(tuning::POINT_RADIUS_MIN > 0.0);
    assert!(tuning::POINT_RADIUS_MIN < tuning::POINT_RADIUS_MAX);
    assert!(tuning::BRIGHTNESS_MIN < tuning::BRIGHTNESS_MAX && tuning::BRIGHTNESS_MAX <= 1.0);
    assert!(tuning::TWINKLE_SPEED_MIN < tuning::TWINKLE_SPEED_MAX);
    assert!(tuning::WANDER_DURATION_MIN_MS < tuning::WANDER_DURATION_MAX_MS);
    assert!(tuning::WANDER_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn twinkle_and_edge_weights_stay_in_unit_range() {
    // twinkle term never goes negative nor above 1
    assert!(tuning::TWINKLE_OFFSET - tuning::TWINKLE_AMPLITUDE >= 0.0);
    assert!(tuning::TWINKLE_OFFSET + tuning::TWINKLE_AMPLITUDE <= 1.0 + 1e-6);
    assert!(tuning::EDGE_MIN_ALPHA > 0.0 && tuning::EDGE_MIN_ALPHA < 1.0);
    assert!(tuning::EDGE_MAX_ALPHA <= 1.0);
    assert!(tuning::ACTIVITY_BOOST > 0.0 && tuning::ACTIVITY_BOOST <= 1.0);
    assert!(tuning::ACTIVITY_RADIUS_GROWTH >= 1.0);
    for c in tuning::POINT_PALETTE.iter().chain(std::iter::once(&tuning::EDGE_COLOR)) {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_reach_exceeds_link_length() {
    // a link can only light up if both ends can be active at once
    let full = crafty_field::Profile::full();
    assert!(tuning::ACTIVITY_RADIUS > full.connection_distance);
}
