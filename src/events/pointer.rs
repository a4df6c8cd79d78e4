use crate::input;
use crafty_field::AnimationSession;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_field_position(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
    field_size: Vec2,
) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        field_size,
    )
}

/// Feeds raw pointer positions to whichever session is current.
pub fn wire_pointermove(canvas: web::HtmlCanvasElement, session: Rc<RefCell<AnimationSession>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Ok(mut s) = session.try_borrow_mut() else {
            return;
        };
        let field_size = Vec2::new(s.field().width, s.field().height);
        s.pointer_moved(pointer_field_position(&ev, &canvas, field_size));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
