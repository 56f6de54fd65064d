// crates/controls_core/src/screens/mod.rs
//! The three screens and the stack transitions between them.

pub mod game;
pub mod menu;
pub mod settings;

pub use game::{GameScreen, Sprite};
pub use menu::{MenuAction, MenuScreen};
pub use settings::SettingsScreen;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Menu,
    Settings,
    Game,
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::Menu => "menu",
            ScreenId::Settings => "settings",
            ScreenId::Game => "game",
        };
        f.write_str(name)
    }
}

/// What a screen asks the stack to do after its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(ScreenId),
    Pop,
    Exit,
}

pub enum Screen {
    Menu(MenuScreen),
    Settings(SettingsScreen),
    Game(GameScreen),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Menu(_) => ScreenId::Menu,
            Screen::Settings(_) => ScreenId::Settings,
            Screen::Game(_) => ScreenId::Game,
        }
    }

    pub fn caption(&self) -> &'static str {
        match self {
            Screen::Menu(_) => MenuScreen::CAPTION,
            Screen::Settings(_) => SettingsScreen::CAPTION,
            Screen::Game(_) => GameScreen::CAPTION,
        }
    }
}
