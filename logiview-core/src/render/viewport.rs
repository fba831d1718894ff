/// Layout size of a surface plus the device pixel ratio it is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, device_pixel_ratio: 1.0 }
    }
}

impl Viewport {
    /// Negative or non-finite sizes become zero, a bad ratio becomes 1.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let size = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self { width: size(width), height: size(height), device_pixel_ratio: dpr }
    }

    pub fn is_empty(&self) -> bool {
        self.backing_width() == 0 || self.backing_height() == 0
    }

    /// Backing store width in device pixels.
    pub fn backing_width(&self) -> u32 {
        (self.width * self.device_pixel_ratio).round() as u32
    }

    pub fn backing_height(&self) -> u32 {
        (self.height * self.device_pixel_ratio).round() as u32
    }

    /// Fraction of the width covered by one layout pixel.
    pub fn pixel_fraction(&self) -> f64 {
        if self.width > 0.0 {
            1.0 / self.width
        } else {
            0.0
        }
    }
}
