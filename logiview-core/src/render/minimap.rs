use super::colors::{WINDOW_EDGE, WINDOW_FILL};
use super::painter::Painter;
use crate::pan_zoom::ViewRange;

/// Left edge and width, in pixels, of the minimap window for `range`.
/// The width never drops below `min_fraction` of the minimap so a deep
/// zoom stays grabbable; a widened window is kept inside the minimap.
pub fn window_rect(range: ViewRange, width: f64, min_fraction: f64) -> (f64, f64) {
    let min_w = (min_fraction * width).min(width);
    let w = (range.span() * width).max(min_w);
    let x = (range.start * width).min(width - w).max(0.0);
    (x, w)
}

pub fn draw_minimap_window<P: Painter + ?Sized>(
    p: &mut P,
    range: ViewRange,
    width: f64,
    height: f64,
    min_fraction: f64,
) {
    if !(width > 0.0 && height > 0.0) {
        return;
    }
    let (x, w) = window_rect(range, width, min_fraction);
    p.set_fill_style(WINDOW_FILL);
    p.fill_rect(x, 0.0, w, height);
    p.set_stroke_style(WINDOW_EDGE);
    p.set_line_width(1.0);
    p.stroke_rect(x + 0.5, 0.5, (w - 1.0).max(0.0), (height - 1.0).max(0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::painter::RecordingPainter;

    #[test]
    fn test_window_follows_range() {
        let (x, w) = window_rect(ViewRange::new(0.25, 0.5), 400.0, 0.02);
        assert_eq!((x, w), (100.0, 100.0));
    }

    #[test]
    fn test_narrow_window_has_min_width() {
        let (x, w) = window_rect(ViewRange::new(0.5, 0.5001), 400.0, 0.02);
        assert_eq!(w, 8.0);
        assert_eq!(x, 200.0);
        // Widened at the right edge, it shifts left to stay visible.
        let (x, w) = window_rect(ViewRange::new(0.9999, 1.0), 400.0, 0.02);
        assert_eq!(x + w, 400.0);
    }

    #[test]
    fn test_draws_fill_and_outline() {
        let mut p = RecordingPainter::new();
        draw_minimap_window(&mut p, ViewRange::new(0.5, 0.75), 200.0, 40.0, 0.02);
        assert_eq!(p.fill_rects(), vec![(100.0, 0.0, 50.0, 40.0)]);
    }
}
