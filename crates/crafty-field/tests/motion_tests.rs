// Host-side tests for the wander motion driver.

use crafty_field::geometry::distance;
use crafty_field::motion::{wander_duration_ms, wander_target};
use crafty_field::*;
use rand::prelude::*;

fn make_field(profile: &Profile) -> Field {
    Field::build_seeded(800.0, 600.0, profile, 21)
}

#[test]
fn start_spawns_one_task_per_stride() {
    let mut rng = StdRng::seed_from_u64(1);
    let full = make_field(&Profile::full());
    let driver = MotionDriver::start(&full, 1, 0.0, &mut rng);
    assert_eq!(driver.live_tasks(), 150);

    let constrained = make_field(&Profile::constrained());
    let driver = MotionDriver::start(&constrained, 2, 0.0, &mut rng);
    assert_eq!(driver.live_tasks(), 30);
    assert!(driver.tasks().iter().all(|t| t.point % 2 == 0));

    // a zero stride behaves like 1
    let driver = MotionDriver::start(&constrained, 0, 0.0, &mut rng);
    assert_eq!(driver.live_tasks(), 60);
}

#[test]
fn targets_and_durations_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(2);
    let origin = glam::Vec2::new(100.0, 100.0);
    for _ in 0..500 {
        let t = wander_target(origin, &mut rng);
        assert!(distance(origin, t) <= WANDER_RADIUS + 1e-3);
        let d = wander_duration_ms(&mut rng);
        assert!((WANDER_DURATION_MIN_MS..=WANDER_DURATION_MAX_MS).contains(&d));
    }
}

#[test]
fn wander_is_bounded_continuous_and_never_stops() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = make_field(&Profile::full());
    let mut driver = MotionDriver::start(&field, 1, 0.0, &mut rng);

    let mut prev: Vec<glam::Vec2> = field.points.iter().map(|p| p.position).collect();
    let mut moved_late = false;
    let step_ms = 16.0;
    for step in 1..=1500 {
        let now = step as f64 * step_ms;
        driver.tick(now, &mut field, &mut rng);
        for (i, p) in field.points.iter().enumerate() {
            assert!(
                distance(p.origin, p.position) <= WANDER_RADIUS + 1e-3,
                "point {i} left its wander disk"
            );
            // 60px across the disk in >= 2s never needs a big jump per 16ms
            assert!(distance(prev[i], p.position) < 5.0, "point {i} teleported");
            if step > 1400 && distance(prev[i], p.position) > 0.0 {
                moved_late = true;
            }
            prev[i] = p.position;
        }
    }
    // 24s is several legs in; points still wander
    assert!(moved_late);
    assert_eq!(driver.live_tasks(), 150);
}

#[test]
fn cancelled_tasks_freeze_their_points() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = make_field(&Profile::full());
    let mut driver = MotionDriver::start(&field, 1, 0.0, &mut rng);
    driver.tick(500.0, &mut field, &mut rng);

    let first = driver.handles().next().expect("a live task");
    assert!(driver.cancel(first));
    assert!(!driver.cancel(first));
    assert_eq!(driver.live_tasks(), 149);

    let cancelled = driver.cancel_all();
    assert_eq!(cancelled, 149);
    assert_eq!(driver.live_tasks(), 0);
    assert_eq!(driver.cancel_all(), 0);

    let frozen: Vec<glam::Vec2> = field.points.iter().map(|p| p.position).collect();
    driver.tick(1500.0, &mut field, &mut rng);
    driver.tick(9000.0, &mut field, &mut rng);
    for (p, f) in field.points.iter().zip(&frozen) {
        assert_eq!(p.position, *f);
    }
}

#[test]
fn tasks_for_missing_points_are_skipped() {
    let mut rng = StdRng::seed_from_u64(5);
    let field = make_field(&Profile::full());
    let mut driver = MotionDriver::start(&field, 1, 0.0, &mut rng);
    let mut smaller = make_field(&Profile::constrained());
    // must not panic on indices past the end
    driver.tick(1000.0, &mut smaller, &mut rng);
    assert_eq!(smaller.len(), 60);
}
