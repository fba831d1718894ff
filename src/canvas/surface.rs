use logiview_core::render::{FrameGate, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::painter::CanvasPainter;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    canvas
        .get_context("2d")
        .map_err(|e| format!("get_context failed: {:?}", e))?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "context is not a CanvasRenderingContext2d".to_string())
}

pub fn device_pixel_ratio() -> f64 {
    web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// A canvas plus its context, sized in layout pixels and drawn at the
/// device pixel ratio.
///
/// Every resize bumps the frame gate's generation. A frame scheduled for an
/// older generation is dropped instead of drawn at the wrong size.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    frames: FrameGate,
    attached: bool,
}

impl CanvasSurface {
    pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx, viewport: Viewport::default(), frames: FrameGate::new(), attached: true })
    }

    /// A detached canvas for cached bitmaps.
    pub fn offscreen() -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| format!("create canvas failed: {:?}", e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "created element is not a canvas".to_string())?;
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx, viewport: Viewport::default(), frames: FrameGate::new(), attached: false })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn generation(&self) -> u64 {
        self.frames.generation()
    }

    /// Queue a redraw. Returns true when the caller must request an
    /// animation frame for it.
    pub fn queue_frame(&mut self) -> bool {
        self.frames.schedule()
    }

    /// Take the queued redraw, if it was queued for the current size.
    pub fn take_frame(&mut self) -> Option<u64> {
        let pending = self.frames.is_pending();
        let frame = self.frames.take_if_current();
        if pending && frame.is_none() {
            log::debug!("dropping stale frame, surface is at generation {}", self.frames.generation());
        }
        frame
    }

    /// Size the backing store for `viewport`. Returns whether the surface
    /// can be drawn on; a zero-size viewport leaves it untouched.
    pub fn configure(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() {
            log::debug!("skipping zero-size surface {}x{}", viewport.width, viewport.height);
            return false;
        }
        if viewport == self.viewport {
            return true;
        }
        self.canvas.set_width(viewport.backing_width());
        self.canvas.set_height(viewport.backing_height());
        if self.attached {
            let style = self.canvas.style();
            let _ = style.set_property("width", &format!("{}px", viewport.width));
            let _ = style.set_property("height", &format!("{}px", viewport.height));
        }
        let dpr = viewport.device_pixel_ratio;
        // Resizing resets the context, so the scale goes back on every time.
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.viewport = viewport;
        self.frames.bump();
        true
    }

    /// Clear and draw with `draw`, unless `generation` is stale or the
    /// surface has no size. Returns whether anything was drawn.
    pub fn render_with(&self, generation: u64, draw: impl FnOnce(&mut CanvasPainter<'_>, &Viewport)) -> bool {
        if !self.frames.is_current(generation) {
            log::debug!("dropping frame for generation {generation}, surface is at {}", self.frames.generation());
            return false;
        }
        if self.viewport.is_empty() {
            return false;
        }
        self.ctx.clear_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
        draw(&mut CanvasPainter(&self.ctx), &self.viewport);
        true
    }

    /// Copy `source` over this whole surface.
    pub fn blit(&self, source: &CanvasSurface) -> Result<(), String> {
        self.ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(
                &source.canvas,
                0.0,
                0.0,
                self.viewport.width,
                self.viewport.height,
            )
            .map_err(|e| format!("blit failed: {:?}", e))
    }
}
