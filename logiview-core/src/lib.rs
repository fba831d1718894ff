//! Platform-free core of the logic capture viewer: sample decimation,
//! pan/zoom state shared between views, interaction state machines and
//! waveform painting against an abstract [`render::Painter`].

pub mod config;
pub mod interaction;
pub mod pan_zoom;
pub mod render;
pub mod types;

pub use config::ViewConfig;
pub use pan_zoom::{NavHistory, SharedViewRange, Subscription, ViewRange};
pub use types::{BufferId, Capture, Level, PlotPoint, SampleBuffer, SelectionRegion, CHANNEL_COUNT};
