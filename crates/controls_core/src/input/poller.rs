// crates/controls_core/src/input/poller.rs

use controls_shared::{GamepadState, KeyCode, KeySnapshot, RawEvent, RawInput};
use winit::event::{ElementState, KeyEvent, WindowEvent};

use super::keymap;

/// Low-level input collector that tracks held keys and queues discrete events
/// between frames. This keeps raw device state out of App / PlatformRunner.
#[derive(Default)]
pub struct InputPoller {
    held: KeySnapshot,
    events: Vec<RawEvent>,
    gamepad: Option<GamepadState>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single winit WindowEvent and update internal key state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event);
            }
            WindowEvent::CloseRequested => self.events.push(RawEvent::Quit),
            // Keys released while unfocused never report a release.
            WindowEvent::Focused(false) => self.held.clear(),
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let Some(key) = keymap::from_physical(key_event.physical_key) {
            self.key_input(key, key_event.state, key_event.repeat);
        }
    }

    /// OS auto-repeat presses are dropped; they are not new edges.
    fn key_input(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed if !repeat => self.press(key),
            ElementState::Pressed => {}
            ElementState::Released => self.release(key),
        }
    }

    /// Records a key-down unless the key is already held, so one physical
    /// press yields exactly one `KeyDown`.
    pub fn press(&mut self, key: KeyCode) {
        if self.held.press(key) {
            self.events.push(RawEvent::KeyDown(key));
        }
    }

    pub fn release(&mut self, key: KeyCode) {
        if self.held.release(key) {
            self.events.push(RawEvent::KeyUp(key));
        }
    }

    pub fn set_gamepad(&mut self, gamepad: Option<GamepadState>) {
        self.gamepad = gamepad;
    }

    /// Hands out this frame's input and starts a fresh event queue.
    pub fn take_frame(&mut self) -> RawInput {
        RawInput {
            held: self.held.clone(),
            events: std::mem::take(&mut self.events),
            gamepad: self.gamepad,
        }
    }
}
