use crate::types::CHANNEL_COUNT;

/// Alternating lane fills, even lanes first.
pub const LANE_FILLS: [&str; 2] = ["#111318", "#181b22"];
pub const GRID_LINE: &str = "rgba(255, 255, 0, 0.18)";
pub const LABEL: &str = "rgba(255, 255, 255, 0.55)";
pub const SELECTION_MASK: &str = "rgba(0, 0, 0, 0.6)";
pub const SELECTION_EDGE: &str = "rgba(80, 180, 255, 0.9)";
pub const WINDOW_FILL: &str = "rgba(80, 180, 130, 0.15)";
pub const WINDOW_EDGE: &str = "rgba(80, 180, 130, 0.8)";

/// Resistor colour band for a channel (D0 brown through D7 grey).
pub fn channel_rgb(channel: usize) -> [u8; 3] {
    match channel % CHANNEL_COUNT {
        0 => [139, 69, 19],   // brown
        1 => [255, 0, 0],     // red
        2 => [255, 165, 0],   // orange
        3 => [255, 255, 0],   // yellow
        4 => [0, 200, 0],     // green (lifted for the dark background)
        5 => [70, 110, 255],  // blue (lifted)
        6 => [170, 60, 230],  // violet
        _ => [160, 160, 160], // grey
    }
}

pub fn channel_color(channel: usize) -> String {
    let [r, g, b] = channel_rgb(channel);
    format!("rgb({r},{g},{b})")
}

pub fn channel_label(channel: usize) -> String {
    format!("D{channel}")
}
