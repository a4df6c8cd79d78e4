//! One running animation: a field, the profile it was built under, the pointer
//! state, its wander tasks and its render loop.
//!
//! Sessions are replaced, not mutated, when the viewport changes: `rebuild`
//! cancels every outstanding wander task of the superseded session before the
//! successor's field is built, so nothing can keep animating a discarded field.

use crate::field::Field;
use crate::frame::{LoopState, RenderLoop, Tick};
use crate::motion::MotionDriver;
use crate::pointer::PointerTracker;
use crate::profile::Profile;
use crate::render::{draw_frame, FrameStats, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub points: usize,
    pub links: usize,
    pub live_tasks: usize,
}

pub struct AnimationSession {
    field: Field,
    pointer: PointerTracker,
    motion: MotionDriver,
    render_loop: RenderLoop,
    rng: StdRng,
    epoch_ms: f64,
    last_frame: FrameStats,
}

impl AnimationSession {
    pub fn new(width: f32, height: f32, profile: Profile, seed: u64, now_ms: f64) -> Self {
        let pointer = PointerTracker::new(width, height);
        let rng = StdRng::seed_from_u64(seed);
        Self::assemble(width, height, profile, pointer, rng, now_ms, now_ms)
    }

    fn assemble(
        width: f32,
        height: f32,
        profile: Profile,
        pointer: PointerTracker,
        mut rng: StdRng,
        epoch_ms: f64,
        now_ms: f64,
    ) -> Self {
        let field = Field::build(width, height, &profile, &mut rng);
        let motion = MotionDriver::start(&field, profile.wander_stride, now_ms, &mut rng);
        let render_loop = RenderLoop::new(profile.frame_interval_ms);
        let session = Self {
            field,
            pointer,
            motion,
            render_loop,
            rng,
            epoch_ms,
            last_frame: FrameStats::default(),
        };
        let stats = session.stats();
        log::info!(
            "[session] {}x{} points={} links={} tasks={}",
            width,
            height,
            stats.points,
            stats.links,
            stats.live_tasks
        );
        session
    }

    /// Advances the wander tasks; driven by the motion timer.
    pub fn step_motion(&mut self, now_ms: f64) {
        self.motion.tick(now_ms, &mut self.field, &mut self.rng);
    }

    /// One animation-frame callback. Draws only when the loop is active and
    /// the frame interval has elapsed.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        visible: bool,
        surface: &mut S,
    ) -> Tick {
        let tick = self.render_loop.tick(now_ms, visible);
        if tick == Tick::Drawn {
            let time_s = ((now_ms - self.epoch_ms) / 1000.0) as f32;
            self.last_frame = draw_frame(
                &mut self.field,
                self.pointer.current_position(),
                time_s,
                surface,
            );
        }
        tick
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.update(position);
    }

    /// Cancels all wander tasks of this session, returning how many were live.
    pub fn shutdown(&mut self) -> usize {
        self.motion.cancel_all()
    }

    /// Cancels this session and builds its successor for the new viewport.
    /// Returns the successor and the number of tasks cancelled here.
    pub fn rebuild(&mut self, width: f32, height: f32, now_ms: f64) -> (Self, usize) {
        let cancelled = self.shutdown();
        log::debug!("[session] superseded, cancelled {} wander tasks", cancelled);
        let rng = StdRng::seed_from_u64(self.rng.gen());
        let pointer = self.pointer.retarget(width, height);
        let next = Self::assemble(
            width,
            height,
            self.field.profile.clone(),
            pointer,
            rng,
            self.epoch_ms,
            now_ms,
        );
        (next, cancelled)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            points: self.field.len(),
            links: self.field.link_count(),
            live_tasks: self.motion.live_tasks(),
        }
    }

    #[inline]
    pub fn field(&self) -> &Field {
        &self.field
    }

    #[inline]
    pub fn profile(&self) -> &Profile {
        &self.field.profile
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn motion(&self) -> &MotionDriver {
        &self.motion
    }

    #[inline]
    pub fn loop_state(&self) -> LoopState {
        self.render_loop.state()
    }

    #[inline]
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }
}
