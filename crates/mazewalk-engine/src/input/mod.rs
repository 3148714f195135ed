//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Platform glue in [`platform`] translates native events into `InputEvent`s;
//! orientation samples come from whatever sensor bridge the host provides.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{DeviceOrientation, InputEvent, Key, KeyState};
