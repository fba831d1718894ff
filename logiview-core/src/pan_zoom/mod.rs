//! Normalized pan/zoom window over a capture and the rules that move it.

mod history;
mod shared;

pub use history::NavHistory;
pub use shared::{SharedViewRange, Subscription};

use crate::config::ViewConfig;

/// Visible fraction `[start, end]` of the capture, `0 <= start < end <= 1`
/// once it has gone through [`ViewRange::clamped`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewRange {
    pub start: f64,
    pub end: f64,
}

impl Default for ViewRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl ViewRange {
    pub const FULL: ViewRange = ViewRange { start: 0.0, end: 1.0 };

    /// Narrowest span any update may produce.
    pub const MIN_SPAN: f64 = 1e-9;

    pub fn new(start: f64, end: f64) -> Self {
        Self::clamped(start, end)
    }

    /// Clamp both ends into `[0, 1]`. A range narrower than `MIN_SPAN`
    /// (including an inverted one) is widened around its centre.
    pub fn clamped(start: f64, end: f64) -> Self {
        let mut start = if start.is_finite() { start.clamp(0.0, 1.0) } else { 0.0 };
        let mut end = if end.is_finite() { end.clamp(0.0, 1.0) } else { 1.0 };
        if end - start < Self::MIN_SPAN {
            let centre = (start + end) / 2.0;
            start = (centre - Self::MIN_SPAN / 2.0).max(0.0);
            end = (start + Self::MIN_SPAN).min(1.0);
            start = end - Self::MIN_SPAN;
        }
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_full(&self) -> bool {
        self.start <= 0.0 && self.end >= 1.0
    }

    /// Sample index bounds `[first, last)` covered in a buffer of `len`,
    /// never past `len`.
    pub fn sample_bounds(&self, len: usize) -> (usize, usize) {
        let n = len as f64;
        let first = (self.start.max(0.0) * n).floor() as usize;
        let last = (self.end.max(0.0) * n).floor() as usize;
        (first.min(len), last.min(len))
    }

    /// Buffer fraction under screen fraction `x`.
    pub fn to_buffer(&self, x: f64) -> f64 {
        self.start + x * self.span()
    }

    /// Screen fraction of buffer fraction `pos`, unclamped.
    pub fn to_screen(&self, pos: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (pos - self.start) / span
    }

    /// Zoom around screen fraction `focal`. Negative `wheel_delta_y` zooms in.
    ///
    /// Unclamped, the buffer position under `focal` is unchanged. Zooming in
    /// stops at `MIN_SPAN`; zooming out clamps each end at the buffer bounds.
    pub fn zoomed(&self, focal: f64, wheel_delta_y: f64, config: &ViewConfig) -> Self {
        let x = focal.clamp(0.0, 1.0);
        let span = self.span();
        let delta_zoom = -wheel_delta_y * config.zoom_sensitivity;
        let max_shrink = if span > Self::MIN_SPAN { 1.0 - Self::MIN_SPAN / span } else { 0.0 };
        let shrink = (delta_zoom * config.zoom_rate).min(max_shrink);
        let start = (self.start + shrink * x * span).clamp(0.0, 1.0);
        let end = (self.end - shrink * (1.0 - x) * span).clamp(0.0, 1.0);
        Self::clamped(start, end)
    }

    /// Pan by a wheel delta, scaled to the current span.
    pub fn panned(&self, wheel_delta_x: f64, config: &ViewConfig) -> Self {
        self.translated(wheel_delta_x * config.pan_sensitivity * self.span())
    }

    /// Shift both ends by `delta`. Overshoot at either bound is pushed back
    /// onto the other end, so the span survives unless it exceeds `[0, 1]`.
    pub fn translated(&self, delta: f64) -> Self {
        let mut start = self.start + delta;
        let mut end = self.end + delta;
        if start < 0.0 {
            end -= start;
            start = 0.0;
        }
        if end > 1.0 {
            start -= end - 1.0;
            end = 1.0;
        }
        Self::clamped(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_valid(r: ViewRange) {
        assert!(r.start >= 0.0 && r.end <= 1.0 && r.start < r.end, "invalid range {r:?}");
    }

    fn ranges() -> Vec<ViewRange> {
        vec![
            ViewRange::FULL,
            ViewRange::new(0.2, 0.8),
            ViewRange::new(0.0, 0.1),
            ViewRange::new(0.9, 1.0),
            ViewRange::new(0.45, 0.4500001),
            ViewRange::new(0.999_999, 1.0),
        ]
    }

    #[test]
    fn test_clamped_repairs_bad_input() {
        assert_valid(ViewRange::clamped(0.7, 0.3));
        assert_valid(ViewRange::clamped(0.5, 0.5));
        assert_valid(ViewRange::clamped(1.0, 1.0));
        assert_valid(ViewRange::clamped(0.0, 0.0));
        assert_valid(ViewRange::clamped(f64::NAN, f64::INFINITY));
        assert_eq!(ViewRange::clamped(-3.0, 7.0), ViewRange::FULL);
    }

    #[test]
    fn test_every_rule_keeps_invariant() {
        let cfg = ViewConfig::default();
        for r in ranges() {
            for &dy in &[-10_000.0, -500.0, -3.0, 0.0, 3.0, 500.0, 10_000.0] {
                for &x in &[0.0, 0.25, 0.5, 1.0] {
                    assert_valid(r.zoomed(x, dy, &cfg));
                }
            }
            for &dx in &[-1e6, -400.0, -1.0, 0.0, 1.0, 400.0, 1e6] {
                assert_valid(r.panned(dx, &cfg));
            }
            for &d in &[-2.0, -0.5, 0.0, 0.5, 2.0] {
                assert_valid(r.translated(d));
            }
        }
    }

    #[test]
    fn test_pan_preserves_span_inside_bounds() {
        let cfg = ViewConfig::default();
        let r = ViewRange::new(0.3, 0.5);
        let p = r.panned(40.0, &cfg);
        assert!((p.span() - r.span()).abs() < EPS);
        assert!((p.start - (0.3 + 40.0 * 0.0025 * 0.2)).abs() < EPS);
    }

    #[test]
    fn test_pan_at_boundary_never_grows_span() {
        let cfg = ViewConfig::default();
        for r in ranges() {
            for &dx in &[-1e6, -4000.0, 4000.0, 1e6] {
                let p = r.panned(dx, &cfg);
                assert!(p.span() <= r.span() + EPS, "{r:?} -> {p:?}");
            }
        }
        let p = ViewRange::new(0.1, 0.3).panned(-1e6, &cfg);
        assert_eq!(p.start, 0.0);
        assert!((p.end - 0.2).abs() < EPS);
        let p = ViewRange::new(0.7, 0.9).panned(1e6, &cfg);
        assert_eq!(p.end, 1.0);
        assert!((p.start - 0.8).abs() < EPS);
    }

    #[test]
    fn test_zoom_keeps_focal_point() {
        let cfg = ViewConfig::default();
        let r = ViewRange::new(0.2, 0.6);
        for &x in &[0.1, 0.5, 0.9] {
            let before = r.to_buffer(x);
            let z = r.zoomed(x, -2.0, &cfg);
            assert!(z.span() < r.span());
            assert!((z.to_buffer(x) - before).abs() < 1e-9, "focal drifted at x={x}");
        }
    }

    #[test]
    fn test_zoom_in_scenario() {
        let cfg = ViewConfig::default();
        let r = ViewRange::new(0.2, 0.8);
        let z = r.zoomed(0.5, -10.0, &cfg);
        assert!(z.span() < 0.6);
        assert!(((z.start + z.end) / 2.0 - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_clamps_to_full() {
        let cfg = ViewConfig::default();
        let z = ViewRange::new(0.1, 0.2).zoomed(0.5, 10_000.0, &cfg);
        assert_eq!(z, ViewRange::FULL);
    }

    #[test]
    fn test_extreme_zoom_in_stops_at_min_span() {
        let cfg = ViewConfig::default();
        let z = ViewRange::new(0.2, 0.8).zoomed(0.25, -1e9, &cfg);
        assert_valid(z);
        assert!(z.span() >= ViewRange::MIN_SPAN * 0.999);
        assert!((z.start - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_translate_exact_shift() {
        let r = ViewRange::new(0.2, 0.5).translated(0.10);
        assert!((r.start - 0.3).abs() < EPS);
        assert!((r.end - 0.6).abs() < EPS);
    }

    #[test]
    fn test_sample_bounds_never_past_len() {
        assert_eq!(ViewRange::FULL.sample_bounds(4), (0, 4));
        assert_eq!(ViewRange::new(0.25, 0.75).sample_bounds(100), (25, 75));
        assert_eq!(ViewRange { start: 0.5, end: 2.0 }.sample_bounds(10), (5, 10));
        assert_eq!(ViewRange::FULL.sample_bounds(0), (0, 0));
    }

    #[test]
    fn test_screen_buffer_mapping() {
        let r = ViewRange::new(0.2, 0.6);
        assert!((r.to_buffer(0.5) - 0.4).abs() < EPS);
        assert!((r.to_screen(0.4) - 0.5).abs() < EPS);
    }
}
