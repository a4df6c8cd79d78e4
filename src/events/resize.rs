use crate::dom;
use crate::frame::Clock;
use crate::motion::{self, IntervalHandle};
use crafty_field::AnimationSession;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ResizeWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<AnimationSession>>,
    pub motion_timer: Rc<RefCell<Option<IntervalHandle>>>,
    pub visible: Rc<Cell<bool>>,
    pub clock: Clock,
}

/// Replaces the session for the new viewport. The superseded session's wander
/// tasks and its timer are cancelled before the new field starts moving.
fn rebuild_for_viewport(w: &ResizeWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let (width, height) = dom::sync_canvas_backing_size(&window, &w.canvas);
    w.visible.set(dom::canvas_visible(&window, &w.canvas));
    {
        let Ok(mut s) = w.session.try_borrow_mut() else {
            return;
        };
        if s.field().width == width && s.field().height == height {
            return;
        }
        w.motion_timer.borrow_mut().take();
        let (next, cancelled) = s.rebuild(width, height, w.clock.now_ms());
        *s = next;
        log::info!(
            "[resize] {}x{}: cancelled {} wander tasks, now {:?}",
            width,
            height,
            cancelled,
            s.stats()
        );
    }
    match motion::start_motion_timer(w.session.clone(), w.clock) {
        Ok(timer) => *w.motion_timer.borrow_mut() = Some(timer),
        Err(e) => log::warn!("[resize] motion timer not restarted: {:?}", e),
    }
}

pub fn wire_resize(w: ResizeWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        rebuild_for_viewport(&w);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
