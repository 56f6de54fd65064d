// crates/controls_core/src/app.rs
//! Application state: the screen stack, the controllers and the settings
//! document, advanced one frame at a time.
//!
//! Each frame runs survey -> screen logic -> draw -> deactivate. The platform
//! runner feeds `frame` with collected input and a surface; nothing here
//! touches winit or wgpu, so whole sessions can be scripted in tests.

use controls_shared::{Character, Control, ControlId, RawInput};

use crate::config::{AppConfig, ControllerChoice};
use crate::error::SettingsError;
use crate::input::{Controller, InputDefaults};
use crate::mover::Mover;
use crate::screens::{GameScreen, MenuScreen, Screen, ScreenId, SettingsScreen, Transition};
use crate::settings::{SettingsDocument, SettingsStore};
use crate::ui::{BindingTargets, RebindOutcome, Surface};

pub struct App {
    config: AppConfig,
    document: SettingsDocument,
    store: Box<dyn SettingsStore>,
    /// Drives menu and settings; edge-triggered so a held key moves the
    /// cursor once.
    navigation: Controller,
    /// Indexed by `ControllerChoice`.
    gameplay: [Controller; 3],
    choice: ControllerChoice,
    character: Character,
    stack: Vec<Screen>,
    last_survey: [Control; 6],
}

impl App {
    /// Loads the settings document; a missing or malformed document is an
    /// error, there are no fallback bindings.
    pub fn new(config: AppConfig, store: Box<dyn SettingsStore>) -> Result<Self, SettingsError> {
        let document = store.load()?;
        Ok(Self::with_document(config, document, store))
    }

    pub fn with_document(config: AppConfig, document: SettingsDocument, store: Box<dyn SettingsStore>) -> Self {
        let bindings = InputDefaults::keyboard_bindings(&document);
        let navigation = Controller::edge_triggered_keyboard(bindings.clone());
        let gameplay = [
            Controller::polling_keyboard(bindings.clone()),
            Controller::edge_triggered_keyboard(bindings),
            Controller::analog_gamepad(InputDefaults::gamepad_layout()),
        ];

        tracing::info!(
            "Controls demo ready: {} drives the character",
            gameplay[config.controller.index()]
        );

        Self {
            choice: config.controller,
            character: Character::new(config.character_start),
            last_survey: ControlId::ALL.map(Control::new),
            stack: vec![Screen::Menu(MenuScreen::new())],
            config,
            document,
            store,
            navigation,
            gameplay,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn document(&self) -> &SettingsDocument {
        &self.document
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn current_screen(&self) -> Option<ScreenId> {
        self.stack.last().map(Screen::id)
    }

    /// Window caption for the visible screen.
    pub fn caption(&self) -> &'static str {
        self.stack.last().map_or(GameScreen::CAPTION, Screen::caption)
    }

    pub fn is_running(&self) -> bool {
        !self.stack.is_empty()
    }

    /// True while the settings screen waits for a new key. Platform hotkeys
    /// must stay out of the way then, since any key is a valid binding.
    pub fn is_capturing(&self) -> bool {
        matches!(self.stack.last(), Some(Screen::Settings(s)) if s.is_capturing())
    }

    pub fn gameplay_controller(&self) -> &Controller {
        &self.gameplay[self.choice.index()]
    }

    pub fn controller_choice(&self) -> ControllerChoice {
        self.choice
    }

    /// Gameplay control states from the most recent game frame.
    pub fn last_survey(&self) -> &[Control; 6] {
        &self.last_survey
    }

    pub fn cycle_controller(&mut self) {
        self.choice = self.choice.next();
        self.last_survey = ControlId::ALL.map(Control::new);
        tracing::info!("Gameplay controller switched to {}", self.gameplay_controller());
    }

    /// Runs one frame. Returns false once the program should end.
    pub fn frame(&mut self, input: &RawInput, surface: &mut dyn Surface) -> bool {
        // A pending rebind holds on to every event until a key resolves it.
        if input.quit_requested() && !self.is_capturing() {
            tracing::info!("Window closed");
            self.stack.clear();
            return false;
        }

        if !self.is_capturing()
            && input
                .key_downs()
                .any(|key| key == InputDefaults::SWITCH_CONTROLLER_KEY)
        {
            self.cycle_controller();
        }

        let transition = self.update_top(input);
        self.apply(transition);
        self.draw(surface);

        self.navigation.deactivate_all_controls();
        self.gameplay[self.choice.index()].deactivate_all_controls();

        self.is_running()
    }

    fn update_top(&mut self, input: &RawInput) -> Transition {
        let Some(screen) = self.stack.last_mut() else {
            return Transition::Exit;
        };

        match screen {
            Screen::Menu(menu) => {
                self.navigation.survey_controls(input);
                menu.update(&self.navigation)
            }
            Screen::Settings(settings) if settings.is_capturing() => {
                let mut controllers = vec![&mut self.navigation];
                controllers.extend(self.gameplay.iter_mut());
                let mut targets = BindingTargets {
                    document: &mut self.document,
                    store: self.store.as_mut(),
                    controllers,
                };
                if let RebindOutcome::Committed { .. } = settings.capture(input, &mut targets) {
                    tracing::debug!("Bindings now {:?}", self.document);
                }
                Transition::Stay
            }
            Screen::Settings(settings) => {
                self.navigation.survey_controls(input);
                settings.update(&self.navigation)
            }
            Screen::Game(game) => {
                let controller = &mut self.gameplay[self.choice.index()];
                controller.survey_controls(input);
                self.last_survey = controller.snapshot();
                if game.update(input, controller, &mut self.character) {
                    Transition::Stay
                } else {
                    Transition::Pop
                }
            }
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(id) => {
                let screen = match id {
                    ScreenId::Menu => Screen::Menu(MenuScreen::new()),
                    ScreenId::Settings => Screen::Settings(SettingsScreen::new(&self.document)),
                    ScreenId::Game => Screen::Game(GameScreen::new(Mover::new(self.config.move_speed))),
                };
                tracing::info!("Entering {id} screen");
                self.stack.push(screen);
            }
            Transition::Pop => {
                if let Some(screen) = self.stack.pop() {
                    tracing::info!("Leaving {} screen", screen.id());
                }
            }
            Transition::Exit => self.stack.clear(),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        match self.stack.last() {
            Some(Screen::Menu(menu)) => menu.draw(surface),
            Some(Screen::Settings(settings)) => settings.draw(surface),
            Some(Screen::Game(game)) => game.draw(&self.character, surface),
            None => {}
        }
    }
}
