use crate::config::TiltConfig;
use crate::input::{InputEvent, InputState, Key, KeyState};

/// Current steering tilt, in degrees.
///
/// `front` drives forward speed (negative leans forward); `side` is the
/// accumulated heading.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Tilt {
    pub front: f32,
    pub side: f32,
}

/// Signed forward speed factor for a tilt.
///
/// Zero inside the deadzone, then linear so that `max_speed_angle` maps to 1.
/// The result is not clamped: tilting past `max_speed_angle` goes faster.
pub fn forward_speed(tilt: Tilt, cfg: &TiltConfig) -> f32 {
    if tilt.front.abs() <= cfg.deadzone {
        return 0.0;
    }
    -(tilt.front - tilt.front.signum() * cfg.deadzone) / (cfg.max_speed_angle - cfg.deadzone)
}

/// Folds keyboard and orientation events into a [`Tilt`].
///
/// Arrow keys emulate the sensor: up/down set a fixed forward tilt while
/// held, left/right nudge the heading on every press including auto-repeat.
/// A sensor reading overwrites both axes. Any key event recomputes `front`
/// from the held arrows, so keyboard and sensor last-writer-wins.
#[derive(Debug, Clone)]
pub struct TiltController {
    config: TiltConfig,
    tilt: Tilt,
}

impl TiltController {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            tilt: Tilt::default(),
        }
    }

    #[inline]
    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    #[inline]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Current forward speed factor.
    #[inline]
    pub fn speed(&self) -> f32 {
        forward_speed(self.tilt, &self.config)
    }

    /// Applies `event`. `input` must already reflect it.
    pub fn handle_event(&mut self, event: &InputEvent, input: &InputState) {
        match event {
            InputEvent::Key { key, state, .. } => {
                if *state == KeyState::Pressed {
                    match key {
                        Key::ArrowLeft => self.tilt.side += self.config.turn_step,
                        Key::ArrowRight => self.tilt.side -= self.config.turn_step,
                        _ => {}
                    }
                }
                self.update_keyboard_front(input);
            }

            InputEvent::Orientation(reading) => {
                if !reading.is_finite() {
                    log::trace!("dropping non-finite orientation reading {reading:?}");
                    return;
                }
                let euler = reading.euler();
                self.tilt.front = euler.right;
                self.tilt.side = euler.up;
            }

            // Focus loss releases every held key.
            InputEvent::Focused(false) => self.update_keyboard_front(input),
            InputEvent::Focused(true) => {}
        }
    }

    fn update_keyboard_front(&mut self, input: &InputState) {
        let up = input.key_down(Key::ArrowUp);
        let down = input.key_down(Key::ArrowDown);

        self.tilt.front = match (up, down) {
            (true, false) => -self.config.keyboard_tilt,
            (false, true) => self.config.keyboard_tilt,
            _ => 0.0,
        };
    }
}
