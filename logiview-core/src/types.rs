use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::pan_zoom::ViewRange;

/// Number of logic channels packed into each sample byte.
pub const CHANNEL_COUNT: usize = 8;

static NEXT_BUFFER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a loaded buffer. Two buffers with equal bytes loaded twice
/// still get different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

/// Immutable capture data: one byte per sample, bit `j` is channel `j`.
#[derive(Clone, Debug)]
pub struct SampleBuffer {
    id: BufferId,
    bytes: Arc<[u8]>,
}

impl SampleBuffer {
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: BufferId(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed)),
            bytes: bytes.into(),
        }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A buffer plus the rate it was sampled at. The rate only feeds the time
/// axis and readouts.
#[derive(Clone, Debug)]
pub struct Capture {
    pub buffer: SampleBuffer,
    pub sample_rate: u64,
}

impl Capture {
    pub fn new(bytes: impl Into<Arc<[u8]>>, sample_rate: u64) -> Self {
        Self {
            buffer: SampleBuffer::new(bytes),
            sample_rate,
        }
    }

    /// Capture length in seconds, zero when the rate is unknown.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.buffer.len() as f64 / self.sample_rate as f64
    }

    /// Start time and length in seconds of the part of the capture `range` covers.
    pub fn visible_time(&self, range: ViewRange) -> (f64, f64) {
        let duration = self.duration_secs();
        (range.start * duration, range.span() * duration)
    }
}

/// Logic level of one channel at one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn of(byte: u8, channel: usize) -> Self {
        if byte >> channel & 1 == 1 {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// One decimated point: x in layout pixels and the channel level there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub level: Level,
}

pub type DecimatedSeries = Vec<PlotPoint>;

/// In-progress brush selection in screen fractions of the timeline width
/// (not buffer fractions).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRegion {
    pub start: f64,
    pub end: f64,
}

impl SelectionRegion {
    /// Region spanning `a` and `b` in either order, clamped to the screen.
    pub fn between(a: f64, b: f64) -> Self {
        let a = a.clamp(0.0, 1.0);
        let b = b.clamp(0.0, 1.0);
        Self { start: a.min(b), end: a.max(b) }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Map the screen-fraction region into buffer fractions of `view`.
    pub fn commit(&self, view: ViewRange) -> ViewRange {
        let span = view.span();
        ViewRange::clamped(view.start + self.start * span, view.start + self.end * span)
    }
}

/// Hex dump in the raw-data style: upper case, unpadded, space separated.
pub fn hex_preview(bytes: &[u8], max_bytes: usize) -> String {
    let mut out = bytes
        .iter()
        .take(max_bytes)
        .map(|b| format!("{b:X}"))
        .collect::<Vec<_>>()
        .join(" ");
    if bytes.len() > max_bytes {
        out.push_str(" …");
    }
    out
}

/// Deterministic stand-in capture: channel `j` toggles every `2^(j+2)`
/// samples, except channel 7 which carries a pseudo-random serial-like
/// pattern.
pub fn demo_signal(len: usize) -> Vec<u8> {
    let mut lfsr: u16 = 0xACE1;
    let mut serial_bit = 0u8;
    (0..len)
        .map(|i| {
            let counter = ((i >> 2) & 0x7F) as u8;
            if i % 48 == 0 {
                let bit = (lfsr ^ (lfsr >> 2) ^ (lfsr >> 3) ^ (lfsr >> 5)) & 1;
                lfsr = (lfsr >> 1) | (bit << 15);
                serial_bit = (lfsr & 1) as u8;
            }
            counter | serial_bit << 7
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bits() {
        assert_eq!(Level::of(0b0000_0001, 0), Level::High);
        assert_eq!(Level::of(0b0000_0001, 1), Level::Low);
        assert_eq!(Level::of(0x80, 7), Level::High);
    }

    #[test]
    fn test_buffer_identity_differs_for_equal_bytes() {
        let a = SampleBuffer::new(vec![1u8, 2, 3]);
        let b = SampleBuffer::new(vec![1u8, 2, 3]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn test_selection_commit_full_view() {
        let sel = SelectionRegion { start: 0.25, end: 0.75 };
        let r = sel.commit(ViewRange::FULL);
        assert!((r.start - 0.25).abs() < 1e-12);
        assert!((r.end - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_selection_commit_inside_zoomed_view() {
        let sel = SelectionRegion { start: 0.5, end: 1.0 };
        let r = sel.commit(ViewRange::new(0.2, 0.6));
        assert!((r.start - 0.4).abs() < 1e-12);
        assert!((r.end - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_selection_between_is_order_independent() {
        assert_eq!(SelectionRegion::between(0.8, 0.3), SelectionRegion::between(0.3, 0.8));
        assert_eq!(SelectionRegion::between(-0.5, 1.5), SelectionRegion { start: 0.0, end: 1.0 });
    }

    #[test]
    fn test_hex_preview_matches_raw_dump_style() {
        assert_eq!(hex_preview(&[0x00, 0xFF, 0x0F, 0xA0], 8), "0 FF F A0");
        assert_eq!(hex_preview(&[1, 2, 3], 2), "1 2 …");
        assert_eq!(hex_preview(&[], 4), "");
    }

    #[test]
    fn test_visible_time() {
        let cap = Capture::new(vec![0u8; 1000], 1000);
        let (start, len) = cap.visible_time(ViewRange::new(0.5, 0.75));
        assert!((start - 0.5).abs() < 1e-12);
        assert!((len - 0.25).abs() < 1e-12);
        assert_eq!(Capture::new(vec![0u8; 10], 0).duration_secs(), 0.0);
    }

    #[test]
    fn test_demo_signal_is_deterministic() {
        let a = demo_signal(4096);
        assert_eq!(a, demo_signal(4096));
        // Channel 0 toggles every 4 samples.
        assert_eq!(Level::of(a[0], 0), Level::Low);
        assert_eq!(Level::of(a[4], 0), Level::High);
        assert_eq!(Level::of(a[8], 0), Level::Low);
    }
}
