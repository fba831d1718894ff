use crate::config::ViewConfig;
use crate::pan_zoom::ViewRange;

/// Unit of a wheel event's deltas, as reported by the DOM `deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => DeltaMode::Line,
            2 => DeltaMode::Page,
            _ => DeltaMode::Pixel,
        }
    }
}

/// A wheel event over a view, with the pointer as a fraction of the view width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
    /// Ctrl or Meta held (pinch gestures arrive as Ctrl+wheel).
    pub zoom_modifier: bool,
    pub focal: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    Zoom { focal: f64, delta_y: f64 },
    Pan { delta_x: f64 },
    Ignore,
}

impl WheelInput {
    /// Classify the event, converting deltas to pixels. `page_px` is the
    /// size of one page for page-mode deltas.
    pub fn action(&self, page_px: f64, config: &ViewConfig) -> WheelAction {
        let scale = match self.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => config.line_height_px,
            DeltaMode::Page => page_px,
        };
        let dx = self.delta_x * scale;
        let dy = self.delta_y * scale;
        if self.zoom_modifier {
            if dy != 0.0 {
                return WheelAction::Zoom { focal: self.focal, delta_y: dy };
            }
            // A sideways scroll still pans with the modifier held.
            return if dx != 0.0 { WheelAction::Pan { delta_x: dx } } else { WheelAction::Ignore };
        }
        // Mice without a horizontal wheel pan with the vertical one.
        let delta_x = if dx != 0.0 { dx } else { dy };
        if delta_x == 0.0 {
            WheelAction::Ignore
        } else {
            WheelAction::Pan { delta_x }
        }
    }

    pub fn apply(&self, range: ViewRange, page_px: f64, config: &ViewConfig) -> ViewRange {
        match self.action(page_px, config) {
            WheelAction::Zoom { focal, delta_y } => range.zoomed(focal, delta_y, config),
            WheelAction::Pan { delta_x } => range.panned(delta_x, config),
            WheelAction::Ignore => range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(dx: f64, dy: f64, zoom: bool) -> WheelInput {
        WheelInput { delta_x: dx, delta_y: dy, mode: DeltaMode::Pixel, zoom_modifier: zoom, focal: 0.5 }
    }

    #[test]
    fn test_modifier_selects_zoom() {
        let cfg = ViewConfig::default();
        assert_eq!(input(0.0, -4.0, true).action(800.0, &cfg), WheelAction::Zoom { focal: 0.5, delta_y: -4.0 });
        assert_eq!(input(7.0, -4.0, false).action(800.0, &cfg), WheelAction::Pan { delta_x: 7.0 });
    }

    #[test]
    fn test_modifier_with_horizontal_only_pans() {
        let cfg = ViewConfig::default();
        let w = input(40.0, 0.0, true);
        assert_eq!(w.action(800.0, &cfg), WheelAction::Pan { delta_x: 40.0 });
        let r = w.apply(ViewRange::new(0.2, 0.4), 800.0, &cfg);
        assert!(r.start > 0.2);
        assert!((r.span() - 0.2).abs() < 1e-12);
        assert_eq!(input(0.0, 0.0, true).action(800.0, &cfg), WheelAction::Ignore);
    }

    #[test]
    fn test_vertical_only_wheel_pans() {
        let cfg = ViewConfig::default();
        assert_eq!(input(0.0, 12.0, false).action(800.0, &cfg), WheelAction::Pan { delta_x: 12.0 });
        assert_eq!(input(0.0, 0.0, false).action(800.0, &cfg), WheelAction::Ignore);
    }

    #[test]
    fn test_line_and_page_modes_scale() {
        let cfg = ViewConfig::default();
        let mut w = input(2.0, 0.0, false);
        w.mode = DeltaMode::Line;
        assert_eq!(w.action(800.0, &cfg), WheelAction::Pan { delta_x: 32.0 });
        w.mode = DeltaMode::from_dom(2);
        assert_eq!(w.action(800.0, &cfg), WheelAction::Pan { delta_x: 1600.0 });
    }

    #[test]
    fn test_apply_zoom_in_shrinks() {
        let cfg = ViewConfig::default();
        let r = input(0.0, -10.0, true).apply(ViewRange::new(0.2, 0.8), 800.0, &cfg);
        assert!(r.span() < 0.6);
    }

    #[test]
    fn test_apply_pan_keeps_span() {
        let cfg = ViewConfig::default();
        let r = input(20.0, 0.0, false).apply(ViewRange::new(0.2, 0.4), 800.0, &cfg);
        assert!((r.span() - 0.2).abs() < 1e-12);
        assert!(r.start > 0.2);
    }
}
