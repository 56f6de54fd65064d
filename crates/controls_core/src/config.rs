// crates/controls_core/src/config.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use glam::{UVec2, Vec2};

use crate::error::ConfigError;

/// Which controller drives the character on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerChoice {
    #[default]
    Keyboard,
    Intermittent,
    Gamepad,
}

impl ControllerChoice {
    pub const ALL: [ControllerChoice; 3] = [
        ControllerChoice::Keyboard,
        ControllerChoice::Intermittent,
        ControllerChoice::Gamepad,
    ];

    /// Next choice in F2 order, wrapping.
    pub fn next(self) -> Self {
        match self {
            ControllerChoice::Keyboard => ControllerChoice::Intermittent,
            ControllerChoice::Intermittent => ControllerChoice::Gamepad,
            ControllerChoice::Gamepad => ControllerChoice::Keyboard,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for ControllerChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyboard" => Ok(ControllerChoice::Keyboard),
            "intermittent" => Ok(ControllerChoice::Intermittent),
            "gamepad" => Ok(ControllerChoice::Gamepad),
            _ => Err(ConfigError::UnknownController(s.to_string())),
        }
    }
}

impl fmt::Display for ControllerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControllerChoice::Keyboard => "keyboard",
            ControllerChoice::Intermittent => "intermittent",
            ControllerChoice::Gamepad => "gamepad",
        };
        f.write_str(name)
    }
}

/// Startup parameters. Everything has a default; the demo binary overrides
/// the settings path and controller from its arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logical window size in pixels.
    pub window_size: UVec2,
    pub fps: u32,
    pub character_start: Vec2,
    pub move_speed: f32,
    pub settings_path: PathBuf,
    pub controller: ControllerChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: UVec2::new(1000, 500),
            fps: 60,
            character_start: Vec2::new(300.0, 300.0),
            move_speed: 1.0,
            settings_path: PathBuf::from("settings.json"),
            controller: ControllerChoice::default(),
        }
    }
}
