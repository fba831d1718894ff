pub mod app;
pub mod minimap;
pub mod readout;
pub mod timeline;
pub mod toolbar;
