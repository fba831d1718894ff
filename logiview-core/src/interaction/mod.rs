//! Pointer, key and wheel state machines for the timeline and minimap.
//! They take positions as view fractions and hand back ranges to publish;
//! the host wires them to DOM events.

mod brush;
mod minimap;
mod wheel;

pub use brush::{BrushInteraction, BrushState};
pub use minimap::{MinimapInteraction, MinimapState};
pub use wheel::{DeltaMode, WheelAction, WheelInput};
