use std::collections::HashSet;

use super::types::{DeviceOrientation, InputEvent, Key};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down. `InputFrame` holds what changed
/// since the last `clear`.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys that went down this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Most recent orientation sample this frame.
    pub orientation: Option<DeviceOrientation>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.orientation = None;
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
