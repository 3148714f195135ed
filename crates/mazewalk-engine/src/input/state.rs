use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{DeviceOrientation, InputEvent, Key, KeyState};

/// Current input state for the walkthrough.
///
/// Holds held keys, focus and the last orientation sample.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Last orientation sample received, if any.
    pub orientation: Option<DeviceOrientation>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Keys released while unfocused never reach us.
                    for key in self.keys_down.drain() {
                        frame.keys_released.insert(key);
                    }
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::Orientation(o) => {
                self.orientation = Some(*o);
                frame.orientation = Some(*o);
            }
        }

        frame.push_event(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut InputState, frame: &mut InputFrame, ev: InputEvent) {
        state.apply_event(frame, ev);
    }

    #[test]
    fn press_and_release_tracked() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        apply(&mut s, &mut f, InputEvent::key_pressed(Key::ArrowUp));
        assert!(s.key_down(Key::ArrowUp));
        assert!(f.keys_pressed.contains(&Key::ArrowUp));

        f.clear();
        apply(&mut s, &mut f, InputEvent::key_released(Key::ArrowUp));
        assert!(!s.key_down(Key::ArrowUp));
        assert!(f.keys_released.contains(&Key::ArrowUp));
        assert!(f.keys_pressed.is_empty());
    }

    #[test]
    fn auto_repeat_is_not_a_new_transition() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        apply(&mut s, &mut f, InputEvent::key_pressed(Key::ArrowLeft));
        f.clear();
        apply(
            &mut s,
            &mut f,
            InputEvent::Key { key: Key::ArrowLeft, state: KeyState::Pressed, repeat: true },
        );
        assert!(f.keys_pressed.is_empty());
        assert_eq!(f.events.len(), 1);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        apply(&mut s, &mut f, InputEvent::Focused(true));
        apply(&mut s, &mut f, InputEvent::key_pressed(Key::ArrowDown));
        f.clear();
        apply(&mut s, &mut f, InputEvent::Focused(false));
        assert!(s.keys_down.is_empty());
        assert!(f.keys_released.contains(&Key::ArrowDown));
        assert!(!s.focused);
    }

    #[test]
    fn orientation_sample_recorded() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        let o = DeviceOrientation::new(10.0, 20.0, 30.0);
        apply(&mut s, &mut f, InputEvent::Orientation(o));
        assert_eq!(s.orientation, Some(o));
        assert_eq!(f.orientation, Some(o));
        f.clear();
        assert_eq!(f.orientation, None);
        assert_eq!(s.orientation, Some(o));
    }
}
