// crates/controls_core/src/lib.rs

// Logic Modules
pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod mover;
pub mod screens;
pub mod settings;
pub mod ui;

// Platform Modules
pub mod frame_loop;
pub mod gui;
pub mod inspector;
pub mod platform_runner;
mod renderer;

// Re-export the entry points so the demo binary can find them easily
pub use app::App;
pub use config::{AppConfig, ControllerChoice};
pub use error::{ConfigError, PlatformError, SettingsError};
pub use platform_runner::PlatformRunner;
pub use settings::{JsonFileStore, MemoryStore, SettingsDocument, SettingsStore};
