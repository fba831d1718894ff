pub mod painter;
pub mod resize;
pub mod surface;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use surface::CanvasSurface;

/// Run `f` on the next animation frame.
pub fn request_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        log::error!("No window object");
        return;
    };
    let cb = Closure::once_into_js(f);
    if let Err(e) = window.request_animation_frame(cb.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Coalesces redraw requests for one surface into a single animation
/// frame. The surface's frame gate decides whether a frame is needed and
/// whether it is still current when it fires.
#[derive(Clone, Copy)]
pub struct FrameRequest {
    surface: StoredValue<Option<CanvasSurface>, LocalStorage>,
}

impl FrameRequest {
    pub fn new(surface: StoredValue<Option<CanvasSurface>, LocalStorage>) -> Self {
        Self { surface }
    }

    pub fn schedule(&self, draw: impl FnOnce(u64) + 'static) {
        let queued = self.surface.try_update_value(|s| s.as_mut().is_some_and(CanvasSurface::queue_frame));
        if queued != Some(true) {
            return;
        }
        let surface = self.surface;
        request_frame(move || {
            let Some(Some(generation)) = surface.try_update_value(|s| s.as_mut().and_then(CanvasSurface::take_frame))
            else {
                return;
            };
            draw(generation);
        });
    }
}
