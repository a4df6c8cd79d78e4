use crate::render::CanvasSurface;
use crafty_field::{AnimationSession, Tick};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic milliseconds since startup, shared by the frame loop, the
/// motion timer and the resize handler.
#[derive(Clone, Copy)]
pub struct Clock {
    epoch: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FrameContext {
    pub session: Rc<RefCell<AnimationSession>>,
    pub surface: CanvasSurface,
    pub visible: Rc<Cell<bool>>,
    pub clock: Clock,
    pub frames_suspended: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        // a resize handler holding the session skips this frame
        let Ok(mut session) = self.session.try_borrow_mut() else {
            return;
        };
        match session.frame(now, self.visible.get(), &mut self.surface) {
            Tick::Suspended => self.frames_suspended += 1,
            Tick::Drawn if self.frames_suspended > 0 => {
                log::debug!("[frame] resumed after {} suspended frames", self.frames_suspended);
                self.frames_suspended = 0;
            }
            _ => {}
        }
    }
}

/// Runs `frame` on every animation frame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Ok(mut ctx) = frame_ctx_tick.try_borrow_mut() {
            ctx.frame();
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
