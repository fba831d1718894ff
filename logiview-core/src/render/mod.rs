mod cache;
pub mod colors;
mod decimate;
mod frame;
mod minimap;
mod painter;
pub mod time_markers;
mod viewport;
mod waveform;

pub use cache::{BitmapCache, MinimapKey};
pub use decimate::decimate;
pub use frame::FrameGate;
pub use minimap::{draw_minimap_window, window_rect};
pub use painter::{PaintOp, Painter, RecordingPainter};
pub use viewport::Viewport;
pub use waveform::{draw_channel_labels, draw_selection_mask, draw_waveform, lane_levels, paint_timeline, TimelineFrame};
