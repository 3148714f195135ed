use ::winit::event::{ElementState, WindowEvent};
use ::winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events the walkthrough does not consume.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: map_state(event.state),
            repeat: event.repeat,
        }),

        _ => None,
    }
}

fn map_state(state: ElementState) -> KeyState {
    match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    }
}

/// Maps a physical key; unnamed keys keep their winit code.
pub fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(KeyCode::ArrowUp) => Key::ArrowUp,
        PhysicalKey::Code(KeyCode::ArrowDown) => Key::ArrowDown,
        PhysicalKey::Code(KeyCode::ArrowLeft) => Key::ArrowLeft,
        PhysicalKey::Code(KeyCode::ArrowRight) => Key::ArrowRight,
        PhysicalKey::Code(other) => Key::Unknown(other as u32),

        // winit 0.30 uses NativeKeyCode; no stable numeric is guaranteed here.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
