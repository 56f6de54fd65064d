// crates/controls_shared/src/lib.rs
//! Plain data shared between the input layer, the screens and the platform.

pub mod components;
pub mod input_types;
pub mod keys;

pub use components::{Character, Color, Rect};
pub use input_types::{
    Control, ControlId, GamepadAxis, GamepadButton, GamepadState, KeySnapshot, RawEvent,
    RawInput, MAX_AXES, MAX_BUTTONS,
};
pub use keys::KeyCode;
