use logiview_core::render::Painter;
use web_sys::CanvasRenderingContext2d;

/// [`Painter`] backed by a 2-D canvas context.
pub struct CanvasPainter<'a>(pub &'a CanvasRenderingContext2d);

impl Painter for CanvasPainter<'_> {
    fn set_fill_style(&mut self, color: &str) {
        self.0.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.0.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.0.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.0.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.0.stroke_rect(x, y, w, h);
    }

    fn begin_path(&mut self) {
        self.0.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.0.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.0.fill_text(text, x, y);
    }

    fn text_width(&mut self, text: &str) -> f64 {
        self.0.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }
}
