/// Drawing surface seen by the renderers, in layout-pixel coordinates.
/// The browser adapter forwards to a 2-D canvas context; tests use
/// [`RecordingPainter`].
pub trait Painter {
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Rendered width of `text` in the current font.
    fn text_width(&mut self, text: &str) -> f64;
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    Font(String),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    FillText(String, f64, f64),
}

/// Painter that records every call, with a fixed 6 px per character text width.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                PaintOp::FillRect(x, y, w, h) => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    /// Points of every `MoveTo`/`LineTo` path segment, one `Vec` per path.
    pub fn paths(&self) -> Vec<Vec<(f64, f64)>> {
        let mut paths = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for op in &self.ops {
            match *op {
                PaintOp::MoveTo(x, y) => {
                    if !current.is_empty() {
                        paths.push(std::mem::take(&mut current));
                    }
                    current.push((x, y));
                }
                PaintOp::LineTo(x, y) => current.push((x, y)),
                _ => {}
            }
        }
        if !current.is_empty() {
            paths.push(current);
        }
        paths
    }
}

impl Painter for RecordingPainter {
    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(PaintOp::FillStyle(color.to_string()));
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(PaintOp::StrokeStyle(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(PaintOp::LineWidth(width));
    }
    fn set_font(&mut self, font: &str) {
        self.ops.push(PaintOp::Font(font.to_string()));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(PaintOp::FillRect(x, y, w, h));
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(PaintOp::StrokeRect(x, y, w, h));
    }
    fn begin_path(&mut self) {
        self.ops.push(PaintOp::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PaintOp::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(PaintOp::LineTo(x, y));
    }
    fn stroke(&mut self) {
        self.ops.push(PaintOp::Stroke);
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(PaintOp::FillText(text.to_string(), x, y));
    }
    fn text_width(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * 6.0
    }
}
