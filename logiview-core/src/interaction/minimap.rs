use crate::pan_zoom::ViewRange;
use crate::render::window_rect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MinimapState {
    Idle,
    /// Pressed outside the window: the range grows from `origin` to the pointer.
    Seeking { origin: f64, before: ViewRange },
    /// Pressed on the window: it follows the pointer at constant width.
    MovingWindow { grab: f64, before: ViewRange },
}

/// Pointer handling for the overview strip. Positions are fractions of
/// the minimap width, which maps 1:1 onto the whole buffer.
#[derive(Clone, Debug)]
pub struct MinimapInteraction {
    state: MinimapState,
    pixel: f64,
    min_window: f64,
}

impl MinimapInteraction {
    pub fn new(min_window: f64) -> Self {
        Self { state: MinimapState::Idle, pixel: 0.0, min_window }
    }

    pub fn state(&self) -> MinimapState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != MinimapState::Idle
    }

    /// Width of one layout pixel as a fraction of the minimap.
    pub fn set_pixel_fraction(&mut self, pixel: f64) {
        self.pixel = pixel.max(0.0);
    }

    pub fn set_min_window(&mut self, min_window: f64) {
        self.min_window = min_window;
    }

    /// Whether `x` lands on the drawn window for `view`.
    pub fn hit_window(&self, x: f64, view: ViewRange) -> bool {
        let (wx, ww) = window_rect(view, 1.0, self.min_window);
        x >= wx && x <= wx + ww
    }

    fn seeded(&self, from: f64, to: f64) -> ViewRange {
        let a = from.clamp(0.0, 1.0);
        let b = to.clamp(0.0, 1.0);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if hi - lo < self.pixel {
            let start = a.min(1.0 - self.pixel).max(0.0);
            ViewRange::new(start, start + self.pixel)
        } else {
            ViewRange::new(lo, hi)
        }
    }

    /// Pointer pressed at `x` with the current range `view`. Returns the
    /// range to publish right away, if any.
    pub fn pointer_down(&mut self, x: f64, view: ViewRange) -> Option<ViewRange> {
        if self.hit_window(x, view) {
            self.state = MinimapState::MovingWindow { grab: x, before: view };
            return None;
        }
        let origin = x.clamp(0.0, 1.0);
        self.state = MinimapState::Seeking { origin, before: view };
        Some(self.seeded(origin, origin))
    }

    /// Pointer moved to `x` during a drag. Returns the range to publish.
    /// A moved window is clamped into `[0, 1]` on every move, not only at
    /// release, since each range is published to the shared view as it goes.
    pub fn pointer_move(&mut self, x: f64) -> Option<ViewRange> {
        match self.state {
            MinimapState::Idle => None,
            MinimapState::Seeking { origin, .. } => Some(self.seeded(origin, x)),
            MinimapState::MovingWindow { grab, before } => Some(before.translated(x - grab)),
        }
    }

    /// Pointer released: the last published range stands.
    pub fn pointer_up(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = MinimapState::Idle;
        was_active
    }

    /// Abandon the drag. Returns the range from before the press.
    pub fn cancel(&mut self) -> Option<ViewRange> {
        let before = match self.state {
            MinimapState::Idle => None,
            MinimapState::Seeking { before, .. } | MinimapState::MovingWindow { before, .. } => Some(before),
        };
        self.state = MinimapState::Idle;
        before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimap(width_px: f64) -> MinimapInteraction {
        let mut m = MinimapInteraction::new(0.02);
        m.set_pixel_fraction(1.0 / width_px);
        m
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_click_outside_seeds_one_pixel() {
        let mut m = minimap(500.0);
        let r = m.pointer_down(0.8, ViewRange::new(0.1, 0.3)).unwrap();
        assert!(close(r.start, 0.8));
        assert!(close(r.span(), 0.002));
        assert!(matches!(m.state(), MinimapState::Seeking { .. }));
    }

    #[test]
    fn test_seek_drag_grows_range() {
        let mut m = minimap(500.0);
        m.pointer_down(0.8, ViewRange::new(0.1, 0.3));
        let r = m.pointer_move(0.5).unwrap();
        assert!(close(r.start, 0.5) && close(r.end, 0.8));
        let r = m.pointer_move(0.9).unwrap();
        assert!(close(r.start, 0.8) && close(r.end, 0.9));
    }

    #[test]
    fn test_seed_at_right_edge_stays_inside() {
        let mut m = minimap(100.0);
        let r = m.pointer_down(1.0, ViewRange::new(0.1, 0.3)).unwrap();
        assert!(close(r.end, 1.0));
        assert!(close(r.span(), 0.01));
    }

    #[test]
    fn test_window_drag_keeps_width() {
        let mut m = minimap(500.0);
        let view = ViewRange::new(0.2, 0.4);
        assert_eq!(m.pointer_down(0.3, view), None);
        let r = m.pointer_move(0.4).unwrap();
        assert!(close(r.start, 0.3) && close(r.end, 0.5));
        assert!(close(r.span(), 0.2));
    }

    #[test]
    fn test_window_drag_stops_at_edges() {
        let mut m = minimap(500.0);
        m.pointer_down(0.3, ViewRange::new(0.2, 0.4));
        let r = m.pointer_move(1.5).unwrap();
        assert!(close(r.end, 1.0) && close(r.span(), 0.2));
        // Coming back, the window moves again from the grab point.
        let r = m.pointer_move(0.35).unwrap();
        assert!(close(r.start, 0.25));
    }

    #[test]
    fn test_narrow_window_grabbed_by_min_width() {
        let m = minimap(500.0);
        let view = ViewRange::new(0.5, 0.5001);
        assert!(m.hit_window(0.51, view));
        assert!(!m.hit_window(0.53, view));
    }

    #[test]
    fn test_cancel_restores_previous_range() {
        let mut m = minimap(500.0);
        let view = ViewRange::new(0.2, 0.4);
        m.pointer_down(0.9, view);
        m.pointer_move(0.95);
        assert_eq!(m.cancel(), Some(view));
        assert!(!m.is_active());
        assert_eq!(m.cancel(), None);
    }

    #[test]
    fn test_release_ends_drag() {
        let mut m = minimap(500.0);
        m.pointer_down(0.3, ViewRange::new(0.2, 0.4));
        assert!(m.pointer_up());
        assert_eq!(m.pointer_move(0.9), None);
        assert!(!m.pointer_up());
    }
}
