//! Device classification and the performance profile it selects.
//!
//! The selector is a pure function of the hints gathered once at startup; the
//! web front-end is responsible for reading them from the browser. A profile is
//! never re-evaluated during a session.

use crate::constants::{LOW_HARDWARE_CONCURRENCY, SMALL_VIEWPORT_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Full,
    Constrained,
}

/// Immutable set of tunables for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub class: DeviceClass,
    pub point_count: usize,
    pub neighbor_k: usize,
    /// Neighbors farther than this (canvas px) are never linked.
    pub connection_distance: f32,
    pub frame_interval_ms: f64,
    pub edges_enabled: bool,
    pub glow_enabled: bool,
    /// The motion driver wanders every `wander_stride`-th point.
    pub wander_stride: usize,
}

impl Profile {
    pub fn full() -> Self {
        Self {
            class: DeviceClass::Full,
            point_count: 150,
            neighbor_k: 3,
            connection_distance: 100.0,
            frame_interval_ms: 16.0,
            edges_enabled: true,
            glow_enabled: true,
            wander_stride: 1,
        }
    }

    pub fn constrained() -> Self {
        Self {
            class: DeviceClass::Constrained,
            point_count: 60,
            neighbor_k: 2,
            connection_distance: 100.0,
            frame_interval_ms: 33.0,
            edges_enabled: false,
            glow_enabled: false,
            wander_stride: 2,
        }
    }

    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Full => Self::full(),
            DeviceClass::Constrained => Self::constrained(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::full()
    }
}

/// Environment signals available at startup.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentHints {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub mobile_user_agent: bool,
    /// `navigator.hardwareConcurrency`; `None` when the browser hides it.
    pub hardware_concurrency: Option<u32>,
}

const MOBILE_UA_PATTERNS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
    "mobile",
];

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_PATTERNS.iter().any(|p| ua.contains(p))
}

pub fn classify(hints: &EnvironmentHints) -> DeviceClass {
    let small_viewport = hints.viewport_width < SMALL_VIEWPORT_WIDTH;
    let low_concurrency = hints
        .hardware_concurrency
        .is_some_and(|c| c <= LOW_HARDWARE_CONCURRENCY);
    if small_viewport || hints.mobile_user_agent || low_concurrency {
        DeviceClass::Constrained
    } else {
        DeviceClass::Full
    }
}

pub fn select_profile(hints: &EnvironmentHints) -> Profile {
    let class = classify(hints);
    log::info!(
        "[profile] {:?} (viewport={}x{} mobile_ua={} cores={:?})",
        class,
        hints.viewport_width,
        hints.viewport_height,
        hints.mobile_user_agent,
        hints.hardware_concurrency
    );
    Profile::for_class(class)
}
