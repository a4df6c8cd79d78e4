//! Eased random wander of points around their origins.
//!
//! Every wandering point owns one repeating task. A task tweens the point from
//! where it is to a random target near its origin, and on completion picks the
//! next target straight away. Tasks are sampled by `tick`, which the front-end
//! calls from its own timer, independent of the frame loop.

use crate::constants::{WANDER_DURATION_MAX_MS, WANDER_DURATION_MIN_MS, WANDER_RADIUS};
use crate::field::Field;
use crate::geometry::{ease_in_out, lerp};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Clone, Debug)]
pub struct WanderTask {
    pub handle: TaskHandle,
    pub point: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub start_ms: f64,
    pub duration_ms: f64,
    cancelled: bool,
}

impl WanderTask {
    /// Eased position at `now_ms`, clamped to the current leg.
    pub fn sample(&self, now_ms: f64) -> Vec2 {
        let t = if self.duration_ms > 0.0 {
            ((now_ms - self.start_ms) / self.duration_ms) as f32
        } else {
            1.0
        };
        lerp(self.from, self.to, ease_in_out(t))
    }

    #[inline]
    fn finished(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

/// Picks a point uniformly inside the wander disk around `origin`.
pub fn wander_target<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Vec2 {
    let theta = rng.gen_range(0.0..TAU);
    let r = WANDER_RADIUS * rng.gen::<f32>().sqrt();
    origin + Vec2::from_angle(theta) * r
}

#[inline]
pub fn wander_duration_ms<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(WANDER_DURATION_MIN_MS..=WANDER_DURATION_MAX_MS)
}

#[derive(Debug, Default)]
pub struct MotionDriver {
    tasks: Vec<WanderTask>,
    live: FnvHashMap<TaskHandle, usize>,
    next_id: u64,
}

impl MotionDriver {
    /// Starts a wander task for every `stride`-th point of the field.
    pub fn start<R: Rng + ?Sized>(field: &Field, stride: usize, now_ms: f64, rng: &mut R) -> Self {
        let mut driver = Self::default();
        for (i, p) in field.points.iter().enumerate().step_by(stride.max(1)) {
            driver.spawn(i, p.position, p.origin, now_ms, rng);
        }
        log::debug!("[motion] started {} wander tasks", driver.live_tasks());
        driver
    }

    fn spawn<R: Rng + ?Sized>(
        &mut self,
        point: usize,
        from: Vec2,
        origin: Vec2,
        now_ms: f64,
        rng: &mut R,
    ) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.live.insert(handle, self.tasks.len());
        self.tasks.push(WanderTask {
            handle,
            point,
            from,
            to: wander_target(origin, rng),
            start_ms: now_ms,
            duration_ms: wander_duration_ms(rng),
            cancelled: false,
        });
        handle
    }

    /// Moves every live task's point to its eased position at `now_ms` and
    /// starts the next leg of any task whose current leg has completed.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, field: &mut Field, rng: &mut R) {
        for task in self.tasks.iter_mut().filter(|t| !t.cancelled) {
            let Some(point) = field.points.get_mut(task.point) else {
                continue;
            };
            if task.finished(now_ms) {
                point.position = task.to;
                task.from = task.to;
                task.to = wander_target(point.origin, rng);
                task.start_ms = now_ms;
                task.duration_ms = wander_duration_ms(rng);
            } else {
                point.position = task.sample(now_ms);
            }
        }
    }

    /// Returns false when the handle is unknown or already cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        match self.live.remove(&handle) {
            Some(idx) => {
                self.tasks[idx].cancelled = true;
                true
            }
            None => false,
        }
    }

    /// Cancels every outstanding task and reports how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.live.len();
        for (_, idx) in self.live.drain() {
            self.tasks[idx].cancelled = true;
        }
        n
    }

    #[inline]
    pub fn live_tasks(&self) -> usize {
        self.live.len()
    }

    pub fn handles(&self) -> impl Iterator<Item = TaskHandle> + '_ {
        self.tasks.iter().filter(|t| !t.cancelled).map(|t| t.handle)
    }

    pub fn tasks(&self) -> &[WanderTask] {
        &self.tasks
    }
}
