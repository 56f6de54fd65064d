// crates/controls_core/src/screens/menu.rs

use controls_shared::Color;
use glam::Vec2;

use crate::input::Controller;
use crate::ui::{Button, SelectionList, Surface};

use super::{ScreenId, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Settings,
    Quit,
}

impl MenuAction {
    fn transition(self) -> Transition {
        match self {
            MenuAction::Play => Transition::Push(ScreenId::Game),
            MenuAction::Settings => Transition::Push(ScreenId::Settings),
            MenuAction::Quit => Transition::Pop,
        }
    }
}

pub struct MenuScreen {
    buttons: SelectionList<Button<MenuAction>>,
}

impl MenuScreen {
    pub const CAPTION: &'static str = "Controls tests | Menu";
    pub const BACKGROUND: Color = Color::rgb(156, 156, 156);

    pub fn new() -> Self {
        let entries = [
            ("play", 100.0, MenuAction::Play),
            ("settings", 200.0, MenuAction::Settings),
            ("quit", 300.0, MenuAction::Quit),
        ];
        let buttons = entries
            .into_iter()
            .map(|(text, y, action)| {
                let mut button = Button::new(text, Vec2::new(100.0, y));
                button.on_click(action);
                button
            })
            .collect();

        Self {
            buttons: SelectionList::new(buttons),
        }
    }

    pub fn buttons(&self) -> &SelectionList<Button<MenuAction>> {
        &self.buttons
    }

    /// Quit first, then one cursor step, then accept. The first click action
    /// that leaves the menu wins.
    pub fn update(&mut self, controller: &Controller) -> Transition {
        if controller.quit().is_activated() {
            return Transition::Pop;
        }

        if controller.move_up().is_activated() {
            self.buttons.move_up();
        } else if controller.move_down().is_activated() {
            self.buttons.move_down();
        }

        if !controller.accept().is_activated() {
            return Transition::Stay;
        }
        let Some(button) = self.buttons.accept() else {
            return Transition::Stay;
        };
        button
            .click()
            .iter()
            .map(|action| action.transition())
            .find(|t| *t != Transition::Stay)
            .unwrap_or(Transition::Stay)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(Self::BACKGROUND);
        for button in self.buttons.rows() {
            button.draw(surface);
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
