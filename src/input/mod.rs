pub mod session;

pub use session::{pointer_fraction, WindowListeners};
