// crates/controls_core/src/input/bindings.rs
use controls_shared::{ControlId, GamepadAxis, GamepadButton, KeyCode};

/// Raw key bound to each logical control of a keyboard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: [KeyCode; 6],
}

impl KeyBindings {
    pub fn new(
        up: KeyCode,
        right: KeyCode,
        down: KeyCode,
        left: KeyCode,
        accept: KeyCode,
        quit: KeyCode,
    ) -> Self {
        let mut keys = [KeyCode::new(0); 6];
        keys[ControlId::MoveUp.index()] = up;
        keys[ControlId::MoveRight.index()] = right;
        keys[ControlId::MoveDown.index()] = down;
        keys[ControlId::MoveLeft.index()] = left;
        keys[ControlId::Accept.index()] = accept;
        keys[ControlId::Quit.index()] = quit;
        Self { keys }
    }

    pub fn key(&self, id: ControlId) -> KeyCode {
        self.keys[id.index()]
    }

    pub fn bind(&mut self, id: ControlId, key: KeyCode) {
        self.keys[id.index()] = key;
    }

    /// First control in `order` whose key is `key`.
    pub fn first_match(&self, key: KeyCode, order: &[ControlId]) -> Option<ControlId> {
        order.iter().copied().find(|&id| self.key(id) == key)
    }
}

/// Which axes and buttons feed the six controls of a gamepad controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadLayout {
    /// Positive = right, negative = left.
    pub horizontal: GamepadAxis,
    /// Positive = down, negative = up.
    pub vertical: GamepadAxis,
    pub accept: GamepadButton,
    pub quit: GamepadButton,
    /// Readings with `|value| <= dead_zone` are ignored.
    pub dead_zone: f32,
}
