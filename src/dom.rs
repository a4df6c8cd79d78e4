use crate::constants::{MAX_PIXEL_RATIO, TOUCH_ONLY_QUERY, VISIBLE_MIN_PX};
use crate::input;
use crafty_field::{is_mobile_user_agent, EnvironmentHints};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    NoContext,
}

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), BindError> {
    let window = web::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    Ok((window, document))
}

pub fn bind_canvas(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingCanvas(id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| BindError::NotACanvas(id.to_string()))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, BindError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(BindError::NoContext)
}

/// Viewport size in CSS px; falls back to the canvas rect if the window
/// reports nothing usable.
pub fn viewport_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    match (w, h) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => (w as f32, h as f32),
        _ => {
            let rect = canvas.get_bounding_client_rect();
            (rect.width().max(1.0) as f32, rect.height().max(1.0) as f32)
        }
    }
}

/// Matches the canvas backing store to the viewport (times the pixel ratio)
/// and returns the viewport size in CSS px, which is the field's space.
pub fn sync_canvas_backing_size(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> (f32, f32) {
    let (w, h) = viewport_size(window, canvas);
    let dpr = input::effective_pixel_ratio(window.device_pixel_ratio(), MAX_PIXEL_RATIO);
    canvas.set_width(((w as f64 * dpr) as u32).max(1));
    canvas.set_height(((h as f64 * dpr) as u32).max(1));
    (w, h)
}

pub fn environment_hints(window: &web::Window, viewport: (f32, f32)) -> EnvironmentHints {
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let cores = navigator.hardware_concurrency();
    EnvironmentHints {
        viewport_width: viewport.0,
        viewport_height: viewport.1,
        mobile_user_agent: is_mobile_user_agent(&user_agent),
        hardware_concurrency: (cores.is_finite() && cores >= 1.0).then_some(cores as u32),
    }
}

/// Touch-only devices never get a pointer-move subscription.
pub fn is_touch_only(window: &web::Window, hints: &EnvironmentHints) -> bool {
    let no_hover = window
        .match_media(TOUCH_ONLY_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    hints.mobile_user_agent || no_hover
}

pub fn canvas_visible(window: &web::Window, canvas: &web::HtmlCanvasElement) -> bool {
    let rect = canvas.get_bounding_client_rect();
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(rect.height());
    input::region_visible(rect.top(), rect.bottom(), viewport_h, VISIBLE_MIN_PX)
}
