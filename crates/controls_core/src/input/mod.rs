// crates/controls_core/src/input/mod.rs
pub mod bindings;
pub mod config;
pub mod controller;
pub mod gamepad;
pub mod keymap;
pub mod poller;

pub use bindings::{GamepadLayout, KeyBindings};
pub use config::InputDefaults;
pub use controller::{Controller, ControllerKind};
pub use gamepad::GamepadPoller;
pub use poller::InputPoller;
