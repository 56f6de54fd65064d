// crates/controls_core/src/input/config.rs

use controls_shared::{GamepadAxis, GamepadButton, KeyCode};

use crate::input::{GamepadLayout, KeyBindings};
use crate::settings::SettingsDocument;

/// Centralized defaults for input configuration.
/// Keeps App::new small and makes it easy to tweak the fixed keys.
pub struct InputDefaults;

impl InputDefaults {
    pub const ACCEPT_KEY: KeyCode = KeyCode::RETURN;
    pub const QUIT_KEY: KeyCode = KeyCode::ESCAPE;
    /// Aborts a pending rebind.
    pub const CANCEL_KEY: KeyCode = KeyCode::ESCAPE;
    pub const DEAD_ZONE: f32 = 0.05;
    pub const INSPECTOR_KEY: KeyCode = KeyCode::F1;
    pub const SWITCH_CONTROLLER_KEY: KeyCode = KeyCode::F2;

    /// Movement keys come from the settings document; accept/quit are fixed.
    pub fn keyboard_bindings(settings: &SettingsDocument) -> KeyBindings {
        KeyBindings::new(
            settings.up.value,
            settings.right.value,
            settings.down.value,
            settings.left.value,
            Self::ACCEPT_KEY,
            Self::QUIT_KEY,
        )
    }

    /// Left stick moves, A accepts, B quits.
    pub fn gamepad_layout() -> GamepadLayout {
        GamepadLayout {
            horizontal: GamepadAxis::LeftStickX,
            vertical: GamepadAxis::LeftStickY,
            accept: GamepadButton::A,
            quit: GamepadButton::B,
            dead_zone: Self::DEAD_ZONE,
        }
    }
}
