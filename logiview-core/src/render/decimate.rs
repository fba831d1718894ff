use crate::pan_zoom::ViewRange;
use crate::types::{DecimatedSeries, Level, PlotPoint, CHANNEL_COUNT};

/// Reduce the visible part of `buffer` to at most about
/// `pixel_width / point_spacing_px` points per channel.
///
/// Samples `[first, last)` of the range are walked with a fixed stride;
/// each point's x is the sample's linear position across `[0, pixel_width]`.
/// Empty, inverted or zero-width ranges and non-positive widths give empty
/// series. Reads never go past the end of `buffer`.
pub fn decimate(
    buffer: &[u8],
    range: ViewRange,
    pixel_width: f64,
    point_spacing_px: f64,
) -> [DecimatedSeries; CHANNEL_COUNT] {
    let mut series: [DecimatedSeries; CHANNEL_COUNT] = std::array::from_fn(|_| Vec::new());

    let (first, last) = range.sample_bounds(buffer.len());
    if last <= first || !(pixel_width > 0.0) || !(point_spacing_px > 0.0) {
        return series;
    }

    let count = last - first;
    let budget = (pixel_width / point_spacing_px).max(1.0);
    let stride = ((count as f64 / budget).ceil() as usize).max(1);
    let scale = pixel_width / count as f64;

    for (channel, points) in series.iter_mut().enumerate() {
        points.reserve(count / stride + 1);
        for i in (first..last).step_by(stride) {
            points.push(PlotPoint {
                x: (i - first) as f64 * scale,
                level: Level::of(buffer[i], channel),
            });
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use Level::{High, Low};

    fn levels(points: &[PlotPoint]) -> Vec<Level> {
        points.iter().map(|p| p.level).collect()
    }

    #[test]
    fn test_scenario_four_bytes() {
        let buf = [0x00, 0xFF, 0x0F, 0xF0];
        let series = decimate(&buf, ViewRange::FULL, 4.0, 0.1);
        assert_eq!(levels(&series[0]), vec![Low, High, High, Low]);
        assert_eq!(levels(&series[7]), vec![Low, High, Low, High]);
        let xs: Vec<f64> = series[0].iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_zero_width_range_is_empty() {
        let buf = vec![0xAAu8; 1000];
        let series = decimate(&buf, ViewRange { start: 0.5, end: 0.5 }, 800.0, 0.1);
        assert!(series.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_inverted_range_and_bad_width_are_empty() {
        let buf = vec![0xFFu8; 100];
        let inverted = ViewRange { start: 0.8, end: 0.2 };
        assert!(decimate(&buf, inverted, 100.0, 0.1).iter().all(|s| s.is_empty()));
        assert!(decimate(&buf, ViewRange::FULL, 0.0, 0.1).iter().all(|s| s.is_empty()));
        assert!(decimate(&buf, ViewRange::FULL, f64::NAN, 0.1).iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_empty_buffer_is_empty() {
        assert!(decimate(&[], ViewRange::FULL, 640.0, 0.1).iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_deterministic() {
        let buf: Vec<u8> = (0..50_000u32).map(|i| (i * 7 % 256) as u8).collect();
        let range = ViewRange::new(0.13, 0.77);
        assert_eq!(decimate(&buf, range, 733.0, 0.1), decimate(&buf, range, 733.0, 0.1));
    }

    #[test]
    fn test_point_budget_bounded() {
        let buf = vec![0u8; 500_000];
        let series = decimate(&buf, ViewRange::FULL, 100.0, 0.1);
        // 100 px at 0.1 px spacing => about 1000 points.
        assert!(series[0].len() <= 1001);
        assert!(series[0].len() >= 900);
        assert!(series[0].iter().all(|p| p.x >= 0.0 && p.x <= 100.0));
    }

    #[test]
    fn test_range_past_buffer_end_is_clamped() {
        let buf = [0x01u8; 10];
        let series = decimate(&buf, ViewRange { start: 0.5, end: 3.0 }, 50.0, 0.1);
        assert_eq!(series[0].len(), 5);
    }

    #[test]
    fn test_zoomed_range_maps_to_full_width() {
        let buf: Vec<u8> = (0..100u8).collect();
        let series = decimate(&buf, ViewRange::new(0.5, 0.6), 10.0, 0.1);
        assert_eq!(series[0].len(), 10);
        assert_eq!(series[0][0].x, 0.0);
        assert!((series[0][9].x - 9.0).abs() < 1e-12);
        // Sample 50 is 0b0011_0010: channel 1 high, channel 0 low.
        assert_eq!(series[0][0].level, Low);
        assert_eq!(series[1][0].level, High);
    }
}
