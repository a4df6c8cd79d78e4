#![cfg(target_arch = "wasm32")]
use crafty_field::{select_profile, AnimationSession};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod color;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod motion;
mod render;

use constants::CANVAS_ELEMENT_ID;
use dom::BindError;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The animation is decorative: nothing here may break the host page.
    match init() {
        Ok(()) => {}
        Err(e) => match e.downcast_ref::<BindError>() {
            Some(BindError::MissingCanvas(id)) => {
                log::debug!("#{} not on this page; star network disabled", id)
            }
            _ => log::warn!("star network disabled: {:#}", e),
        },
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let canvas = dom::bind_canvas(&document, CANVAS_ELEMENT_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    let viewport = dom::sync_canvas_backing_size(&window, &canvas);
    let hints = dom::environment_hints(&window, viewport);
    let touch_only = dom::is_touch_only(&window, &hints);
    let profile = select_profile(&hints);

    let clock = frame::Clock::new();
    let session = Rc::new(RefCell::new(AnimationSession::new(
        viewport.0,
        viewport.1,
        profile,
        rand::random(),
        clock.now_ms(),
    )));
    let visible = Rc::new(Cell::new(dom::canvas_visible(&window, &canvas)));
    let motion_timer = Rc::new(RefCell::new(Some(motion::start_motion_timer(
        session.clone(),
        clock,
    )?)));

    if touch_only {
        log::info!("[pointer] touch-only device, pointer stays centered");
    } else {
        events::wire_pointermove(canvas.clone(), session.clone());
    }
    events::wire_scroll_visibility(canvas.clone(), visible.clone());
    events::wire_resize(events::ResizeWiring {
        canvas: canvas.clone(),
        session: session.clone(),
        motion_timer,
        visible: visible.clone(),
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        surface: render::CanvasSurface::new(canvas, ctx),
        visible,
        clock,
        frames_suspended: 0,
    }));
    frame::start_loop(frame_ctx);
    log::info!("crafty star network started");
    Ok(())
}
