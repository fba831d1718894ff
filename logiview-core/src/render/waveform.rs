use super::colors::{
    channel_color, channel_label, GRID_LINE, LABEL, LANE_FILLS, SELECTION_EDGE, SELECTION_MASK,
};
use super::decimate::decimate;
use super::painter::Painter;
use super::time_markers::draw_time_markers;
use super::viewport::Viewport;
use crate::config::ViewConfig;
use crate::pan_zoom::ViewRange;
use crate::types::{Capture, Level, SelectionRegion, CHANNEL_COUNT};

// ── Lanes ────────────────────────────────────────────────────────────────

/// y of the high and low rails of a channel lane.
pub fn lane_levels(channel: usize, height: f64) -> (f64, f64) {
    let lane_h = height / CHANNEL_COUNT as f64;
    let top = channel as f64 * lane_h;
    let pad = lane_h * 0.2;
    (top + pad, top + lane_h - pad)
}

/// Draw lane bands, one polyline per channel, then the vertical grid.
/// Zero-sized surfaces draw nothing; an empty buffer draws lanes and grid only.
pub fn draw_waveform<P: Painter + ?Sized>(
    p: &mut P,
    buffer: &[u8],
    range: ViewRange,
    width: f64,
    height: f64,
    config: &ViewConfig,
) {
    if !(width > 0.0 && height > 0.0) {
        return;
    }

    let lane_h = height / CHANNEL_COUNT as f64;
    for channel in 0..CHANNEL_COUNT {
        p.set_fill_style(LANE_FILLS[channel % 2]);
        p.fill_rect(0.0, channel as f64 * lane_h, width, lane_h);
    }

    let series = decimate(buffer, range, width, config.point_spacing_px);
    p.set_line_width(1.0);
    for (channel, points) in series.iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let (high, low) = lane_levels(channel, height);
        p.set_stroke_style(&channel_color(channel));
        p.begin_path();
        for (i, point) in points.iter().enumerate() {
            let y = match point.level {
                Level::High => high,
                Level::Low => low,
            };
            if i == 0 {
                p.move_to(point.x, y);
            } else {
                p.line_to(point.x, y);
            }
        }
        p.stroke();
    }

    if let Some(spacing) = config.grid_spacing_px.filter(|s| *s > 0.0) {
        p.set_stroke_style(GRID_LINE);
        p.set_line_width(1.0);
        p.begin_path();
        let mut x = spacing;
        while x < width {
            p.move_to(x, 0.0);
            p.line_to(x, height);
            x += spacing;
        }
        p.stroke();
    }
}

// ── Overlays ─────────────────────────────────────────────────────────────

pub fn draw_channel_labels<P: Painter + ?Sized>(p: &mut P, height: f64) {
    let lane_h = height / CHANNEL_COUNT as f64;
    if lane_h < 10.0 {
        return;
    }
    p.set_font("10px monospace");
    p.set_fill_style(LABEL);
    for channel in 0..CHANNEL_COUNT {
        let y = channel as f64 * lane_h + lane_h / 2.0 + 4.0;
        p.fill_text(&channel_label(channel), 4.0, y);
    }
}

/// Dim everything outside `selection`, leaving the selected span clear.
pub fn draw_selection_mask<P: Painter + ?Sized>(
    p: &mut P,
    selection: SelectionRegion,
    width: f64,
    height: f64,
) {
    let x0 = selection.start.clamp(0.0, 1.0) * width;
    let x1 = selection.end.clamp(0.0, 1.0) * width;
    p.set_fill_style(SELECTION_MASK);
    if x0 > 0.0 {
        p.fill_rect(0.0, 0.0, x0, height);
    }
    if x1 < width {
        p.fill_rect(x1, 0.0, width - x1, height);
    }
    p.set_stroke_style(SELECTION_EDGE);
    p.set_line_width(1.0);
    p.begin_path();
    p.move_to(x0, 0.0);
    p.line_to(x0, height);
    p.move_to(x1, 0.0);
    p.line_to(x1, height);
    p.stroke();
}

// ── Timeline frame ───────────────────────────────────────────────────────

/// Everything the main timeline shows for one redraw.
pub struct TimelineFrame<'a> {
    pub capture: Option<&'a Capture>,
    pub range: ViewRange,
    pub selection: Option<SelectionRegion>,
    pub config: &'a ViewConfig,
}

pub fn paint_timeline<P: Painter + ?Sized>(p: &mut P, viewport: &Viewport, frame: &TimelineFrame<'_>) {
    if viewport.is_empty() {
        return;
    }
    let (w, h) = (viewport.width, viewport.height);
    let bytes = frame.capture.map(|c| c.buffer.bytes()).unwrap_or(&[]);

    draw_waveform(p, bytes, frame.range, w, h, frame.config);
    draw_channel_labels(p, h);

    if let Some(capture) = frame.capture {
        let (start, visible) = capture.visible_time(frame.range);
        draw_time_markers(p, start, visible, w, h, capture.duration_secs());
    }
    if let Some(selection) = frame.selection {
        draw_selection_mask(p, selection, w, h);
    }
}
