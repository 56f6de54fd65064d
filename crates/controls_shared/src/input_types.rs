// crates/controls_shared/src/input_types.rs
//! Device-agnostic input types: logical controls and the raw per-frame input
//! the platform hands to controllers.

use crate::keys::KeyCode;

/// The six logical controls every controller exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    MoveUp,
    MoveRight,
    MoveDown,
    MoveLeft,
    Accept,
    Quit,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::MoveUp,
        ControlId::MoveRight,
        ControlId::MoveDown,
        ControlId::MoveLeft,
        ControlId::Accept,
        ControlId::Quit,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            ControlId::MoveUp => "up",
            ControlId::MoveRight => "right",
            ControlId::MoveDown => "down",
            ControlId::MoveLeft => "left",
            ControlId::Accept => "accept",
            ControlId::Quit => "quit",
        }
    }
}

/// One logical input line. `value` is always 0 while the control is inactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    id: ControlId,
    activated: bool,
    value: f32,
}

impl Control {
    pub const fn new(id: ControlId) -> Self {
        Self {
            id,
            activated: false,
            value: 0.0,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Digital press; analog sources use `activate_with`.
    pub fn activate(&mut self) {
        self.activate_with(1.0);
    }

    pub fn activate_with(&mut self, value: f32) {
        self.activated = true;
        self.value = value;
    }

    pub fn deactivate(&mut self) {
        self.activated = false;
        self.value = 0.0;
    }
}

/// Discrete events queued by the platform during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    /// Window close request.
    Quit,
}

/// Every key held at the moment the frame was collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    held: Vec<KeyCode>,
}

impl KeySnapshot {
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    pub fn press(&mut self, key: KeyCode) -> bool {
        if self.held.contains(&key) {
            return false;
        }
        self.held.push(key);
        true
    }

    pub fn release(&mut self, key: KeyCode) -> bool {
        let before = self.held.len();
        self.held.retain(|&k| k != key);
        before != self.held.len()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().copied()
    }
}

impl FromIterator<KeyCode> for KeySnapshot {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        let mut snapshot = KeySnapshot::default();
        for key in iter {
            snapshot.press(key);
        }
        snapshot
    }
}

/// Analog axes in the order gamepads report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadAxis {
    LeftStickX = 0,
    LeftStickY = 1,
    RightStickX = 2,
    RightStickY = 3,
    LeftTrigger = 4,
    RightTrigger = 5,
}

/// Buttons by fixed index. Index 6 is not wired on common pads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadButton {
    A = 0,
    B = 1,
    X = 2,
    Y = 3,
    LeftBumper = 4,
    RightBumper = 5,
    Start = 7,
    LeftStick = 8,
    RightStick = 9,
}

pub const MAX_AXES: usize = 6;
pub const MAX_BUTTONS: usize = 10;

/// Raw gamepad readout for one frame. Stick Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadState {
    pub axes: [f32; MAX_AXES],
    pub buttons: [bool; MAX_BUTTONS],
}

impl Default for GamepadState {
    fn default() -> Self {
        Self {
            axes: [0.0; MAX_AXES],
            buttons: [false; MAX_BUTTONS],
        }
    }
}

impl GamepadState {
    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        self.axes.get(axis as usize).copied().unwrap_or(0.0)
    }

    pub fn button(&self, index: usize) -> bool {
        self.buttons.get(index).copied().unwrap_or(false)
    }
}

/// Everything a controller may look at during one frame.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub held: KeySnapshot,
    pub events: Vec<RawEvent>,
    pub gamepad: Option<GamepadState>,
}

impl RawInput {
    /// Axis value, or 0 when no pad is connected.
    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        self.gamepad.as_ref().map_or(0.0, |pad| pad.axis(axis))
    }

    pub fn button(&self, index: usize) -> bool {
        self.gamepad.as_ref().is_some_and(|pad| pad.button(index))
    }

    pub fn key_downs(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.events.iter().filter_map(|event| match event {
            RawEvent::KeyDown(key) => Some(*key),
            _ => None,
        })
    }

    pub fn quit_requested(&self) -> bool {
        self.events.contains(&RawEvent::Quit)
    }
}
