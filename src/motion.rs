use crate::constants::MOTION_TICK_MS;
use crate::frame::Clock;
use crafty_field::AnimationSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns a `setInterval` registration; dropping it clears the interval and
/// releases the callback.
pub struct IntervalHandle {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// Drives the session's wander tasks from a timer, independent of the
/// animation-frame loop.
pub fn start_motion_timer(
    session: Rc<RefCell<AnimationSession>>,
    clock: Clock,
) -> anyhow::Result<IntervalHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move || {
        if let Ok(mut s) = session.try_borrow_mut() {
            s.step_motion(clock.now_ms());
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            MOTION_TICK_MS,
        )
        .map_err(|e| anyhow::anyhow!("setInterval failed: {:?}", e))?;
    Ok(IntervalHandle {
        id,
        _closure: closure,
    })
}
