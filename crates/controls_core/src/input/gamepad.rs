// crates/controls_core/src/input/gamepad.rs

use controls_shared::{GamepadAxis, GamepadButton, GamepadState};
use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};

/// Reads the first connected gamepad once per frame.
pub struct GamepadPoller {
    /// None if the backend failed to initialise; pads are then unavailable.
    gilrs: Option<Gilrs>,
    active: Option<GamepadId>,
}

impl GamepadPoller {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                tracing::warn!("Failed to initialize gamepad support: {e}. Gamepads will not be available.");
                None
            }
        };

        let active = gilrs
            .as_ref()
            .and_then(|g| g.gamepads().map(|(id, _)| id).next());
        if let (Some(g), Some(id)) = (&gilrs, active) {
            tracing::info!("Using gamepad {}", g.gamepad(id).name());
        }

        Self { gilrs, active }
    }

    /// Drains backend events and returns the current pad state, or None when
    /// no pad is connected.
    pub fn poll(&mut self) -> Option<GamepadState> {
        let gilrs = self.gilrs.as_mut()?;

        while let Some(event) = gilrs.next_event() {
            match event.event {
                EventType::Connected if self.active.is_none() => {
                    tracing::info!("Gamepad {} connected", gilrs.gamepad(event.id).name());
                    self.active = Some(event.id);
                }
                EventType::Disconnected if self.active == Some(event.id) => {
                    tracing::info!("Gamepad {} disconnected", event.id);
                    self.active = gilrs
                        .gamepads()
                        .map(|(id, _)| id)
                        .find(|&id| id != event.id);
                }
                _ => {}
            }
        }

        let pad = gilrs.gamepad(self.active?);
        if !pad.is_connected() {
            return None;
        }

        let mut state = GamepadState::default();
        let axes = [
            (GamepadAxis::LeftStickX, Axis::LeftStickX, 1.0),
            // gilrs reports stick Y upwards; screens grow downwards.
            (GamepadAxis::LeftStickY, Axis::LeftStickY, -1.0),
            (GamepadAxis::RightStickX, Axis::RightStickX, 1.0),
            (GamepadAxis::RightStickY, Axis::RightStickY, -1.0),
            (GamepadAxis::LeftTrigger, Axis::LeftZ, 1.0),
            (GamepadAxis::RightTrigger, Axis::RightZ, 1.0),
        ];
        for (slot, axis, sign) in axes {
            state.axes[slot as usize] = (pad.value(axis) * sign).clamp(-1.0, 1.0);
        }

        let buttons = [
            (GamepadButton::A, Button::South),
            (GamepadButton::B, Button::East),
            (GamepadButton::X, Button::West),
            (GamepadButton::Y, Button::North),
            (GamepadButton::LeftBumper, Button::LeftTrigger),
            (GamepadButton::RightBumper, Button::RightTrigger),
            (GamepadButton::Start, Button::Start),
            (GamepadButton::LeftStick, Button::LeftThumb),
            (GamepadButton::RightStick, Button::RightThumb),
        ];
        for (slot, button) in buttons {
            state.buttons[slot as usize] = pad.is_pressed(button);
        }

        Some(state)
    }
}

impl Default for GamepadPoller {
    fn default() -> Self {
        Self::new()
    }
}
