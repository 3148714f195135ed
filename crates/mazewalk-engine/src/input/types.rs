use std::fmt;

/// Keyboard key identifier.
///
/// Only the keys that steer the walker are named; everything else arrives as
/// `Key::Unknown` carrying a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// One device-orientation sensor reading, in degrees.
///
/// Follows the W3C DeviceOrientation frame: `alpha` about Z, `beta` about X,
/// `gamma` about Y.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DeviceOrientation {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

impl DeviceOrientation {
    #[inline]
    pub const fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self { alpha, beta, gamma }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite() && self.gamma.is_finite()
    }
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True for auto-repeat presses while the key is held.
        repeat: bool,
    },

    /// Device-orientation sensor sample.
    Orientation(DeviceOrientation),

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    #[inline]
    pub fn key_pressed(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    #[inline]
    pub fn key_released(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
