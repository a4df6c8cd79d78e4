use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Keeps the visibility gate read by the frame loop in step with scrolling
pub fn wire_scroll_visibility(canvas: web::HtmlCanvasElement, visible: Rc<Cell<bool>>) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let now_visible = dom::canvas_visible(&win, &canvas);
        if now_visible != visible.get() {
            log::debug!("[scroll] canvas visible={}", now_visible);
            visible.set(now_visible);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
