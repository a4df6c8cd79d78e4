/// Gates drawing to at most one frame per `interval_ms`, whatever rate the
/// animation-frame callback fires at.
#[derive(Clone, Debug)]
pub struct FrameThrottle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_ms: None,
        }
    }

    /// True (and the frame is consumed) once `interval_ms` has elapsed since
    /// the last accepted frame. The first call always passes.
    ///
    /// Accepted frames stay on the `interval_ms` grid: the overshoot past the
    /// deadline is carried, so callbacks that do not divide the interval
    /// evenly still average out to the configured rate.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            Some(last) if self.interval_ms > 0.0 => {
                self.last_ms = Some(now_ms - (now_ms - last) % self.interval_ms);
                true
            }
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Active,
    Suspended,
}

/// Outcome of one animation-frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Drawn,
    Throttled,
    Suspended,
}

/// The render loop has no terminal state: it alternates between ACTIVE and
/// SUSPENDED with the visibility gate and keeps being rescheduled.
#[derive(Clone, Debug)]
pub struct RenderLoop {
    throttle: FrameThrottle,
    state: LoopState,
    frames_drawn: u64,
}

impl RenderLoop {
    pub fn new(frame_interval_ms: f64) -> Self {
        Self {
            throttle: FrameThrottle::new(frame_interval_ms),
            state: LoopState::Active,
            frames_drawn: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Decides what this callback does. `Drawn` means the caller must draw.
    pub fn tick(&mut self, now_ms: f64, visible: bool) -> Tick {
        let next = if visible {
            LoopState::Active
        } else {
            LoopState::Suspended
        };
        if next != self.state {
            log::debug!("[loop] {:?} -> {:?}", self.state, next);
            self.state = next;
        }
        match self.state {
            LoopState::Suspended => Tick::Suspended,
            LoopState::Active if self.throttle.ready(now_ms) => {
                self.frames_drawn += 1;
                Tick::Drawn
            }
            LoopState::Active => Tick::Throttled,
        }
    }
}
