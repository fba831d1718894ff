use serde::{Deserialize, Serialize};

/// Tunable constants for rendering and input handling. The zoom and pan
/// rates are empirical values for a typical mouse wheel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Wheel `deltaY` to zoom fraction.
    pub zoom_sensitivity: f64,
    /// Amplification applied on top of `zoom_sensitivity`.
    pub zoom_rate: f64,
    /// Wheel `deltaX` to pan fraction of the current span.
    pub pan_sensitivity: f64,
    /// Horizontal pixels between drawn samples; 0.1 draws ~10 samples per pixel.
    pub point_spacing_px: f64,
    /// Narrowest minimap window as a fraction of the minimap width.
    pub minimap_min_window: f64,
    /// Vertical grid spacing in layout pixels, `None` to hide the grid.
    pub grid_spacing_px: Option<f64>,
    /// Pixels per line for wheel events reported in lines.
    pub line_height_px: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: 0.01,
            zoom_rate: 3.0,
            pan_sensitivity: 0.0025,
            point_spacing_px: 0.1,
            minimap_min_window: 0.02,
            grid_spacing_px: Some(100.0),
            line_height_px: 16.0,
        }
    }
}

fn positive_or(value: f64, fallback: f64, name: &str) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("config: {name} = {value} is not usable, using {fallback}");
        fallback
    }
}

impl ViewConfig {
    /// Replace unusable values (non-finite, zero, negative) with defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            zoom_sensitivity: positive_or(self.zoom_sensitivity, d.zoom_sensitivity, "zoom_sensitivity"),
            zoom_rate: positive_or(self.zoom_rate, d.zoom_rate, "zoom_rate"),
            pan_sensitivity: positive_or(self.pan_sensitivity, d.pan_sensitivity, "pan_sensitivity"),
            point_spacing_px: positive_or(self.point_spacing_px, d.point_spacing_px, "point_spacing_px"),
            minimap_min_window: positive_or(self.minimap_min_window, d.minimap_min_window, "minimap_min_window")
                .min(1.0),
            grid_spacing_px: self.grid_spacing_px.filter(|s| s.is_finite() && *s >= 2.0),
            line_height_px: positive_or(self.line_height_px, d.line_height_px, "line_height_px"),
        }
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_spacing_px.is_some()
    }

    /// Toggle the grid, restoring the default spacing when re-enabled.
    pub fn with_grid(mut self, enabled: bool) -> Self {
        self.grid_spacing_px = enabled.then(|| Self::default().grid_spacing_px.unwrap_or(100.0));
        self
    }
}
