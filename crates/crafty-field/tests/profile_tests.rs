// Host-side tests for device classification and profile selection.

use crafty_field::profile::classify;
use crafty_field::*;

fn desktop_hints() -> EnvironmentHints {
    EnvironmentHints {
        viewport_width: 1440.0,
        viewport_height: 900.0,
        mobile_user_agent: false,
        hardware_concurrency: Some(8),
    }
}

#[test]
fn desktop_gets_full_profile() {
    let p = select_profile(&desktop_hints());
    assert_eq!(p, Profile::full());
    assert_eq!(p.point_count, 150);
    assert_eq!(p.neighbor_k, 3);
    assert_eq!(p.connection_distance, 100.0);
    assert!(p.edges_enabled && p.glow_enabled);
    assert_eq!(p.wander_stride, 1);
}

#[test]
fn each_constraint_alone_selects_constrained() {
    let small = EnvironmentHints {
        viewport_width: 600.0,
        ..desktop_hints()
    };
    let mobile = EnvironmentHints {
        mobile_user_agent: true,
        ..desktop_hints()
    };
    let dual_core = EnvironmentHints {
        hardware_concurrency: Some(2),
        ..desktop_hints()
    };
    for hints in [small, mobile, dual_core] {
        assert_eq!(classify(&hints), DeviceClass::Constrained, "{hints:?}");
        assert_eq!(select_profile(&hints), Profile::constrained());
    }
}

#[test]
fn unknown_concurrency_does_not_constrain() {
    let hints = EnvironmentHints {
        hardware_concurrency: None,
        ..desktop_hints()
    };
    assert_eq!(classify(&hints), DeviceClass::Full);
    let quad = EnvironmentHints {
        hardware_concurrency: Some(3),
        ..desktop_hints()
    };
    assert_eq!(classify(&quad), DeviceClass::Full);
}

#[test]
fn constrained_profile_is_lighter_than_full() {
    let full = Profile::full();
    let lite = Profile::constrained();
    assert!(lite.point_count < full.point_count);
    assert!(lite.neighbor_k <= full.neighbor_k);
    assert!(lite.frame_interval_ms > full.frame_interval_ms);
    assert!(lite.wander_stride > full.wander_stride);
    assert!(!lite.edges_enabled && !lite.glow_enabled);
    assert_eq!(Profile::for_class(DeviceClass::Constrained), lite);
    assert_eq!(Profile::default(), full);
}

#[test]
fn mobile_user_agents_are_detected() {
    let mobile = [
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
        "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/120.0 Mobile Safari/537.36",
        "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)",
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
        "Mozilla/5.0 (BlackBerry; U; BlackBerry 9900)",
    ];
    for ua in mobile {
        assert!(is_mobile_user_agent(ua), "{ua}");
    }
    let desktop = [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_1) AppleWebKit/605.1.15 Version/17.1 Safari/605.1.15",
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
        "",
    ];
    for ua in desktop {
        assert!(!is_mobile_user_agent(ua), "{ua}");
    }
}
