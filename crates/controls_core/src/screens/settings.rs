// crates/controls_core/src/screens/settings.rs

use controls_shared::{Color, ControlId, RawInput};
use glam::Vec2;

use crate::input::{Controller, InputDefaults};
use crate::settings::SettingsDocument;
use crate::ui::{BindingTargets, RebindOutcome, Rebinder, SelectionList, SettingRow, Surface};

use super::Transition;

/// Row order on screen.
const ROWS: [(ControlId, f32); 4] = [
    (ControlId::MoveRight, 50.0),
    (ControlId::MoveLeft, 80.0),
    (ControlId::MoveUp, 110.0),
    (ControlId::MoveDown, 140.0),
];

pub struct SettingsScreen {
    rows: SelectionList<SettingRow>,
    rebinder: Rebinder,
}

impl SettingsScreen {
    pub const CAPTION: &'static str = "settings";
    pub const BACKGROUND: Color = Color::rgb(0, 49, 83);

    pub fn new(document: &SettingsDocument) -> Self {
        let rows = ROWS
            .into_iter()
            .filter_map(|(id, y)| {
                let setting = document.get(id)?;
                Some(SettingRow::new(id, setting.value, Vec2::new(50.0, y)))
            })
            .collect();

        Self {
            rows: SelectionList::new(rows),
            rebinder: Rebinder::new(InputDefaults::CANCEL_KEY),
        }
    }

    pub fn rows(&self) -> &SelectionList<SettingRow> {
        &self.rows
    }

    /// True while a rebind waits for its key; the caller must then route raw
    /// input to `capture` and leave the controller alone.
    pub fn is_capturing(&self) -> bool {
        self.rebinder.is_awaiting()
    }

    pub fn update(&mut self, controller: &Controller) -> Transition {
        if controller.quit().is_activated() {
            return Transition::Pop;
        }

        if controller.move_up().is_activated() {
            self.rows.move_up();
        } else if controller.move_down().is_activated() {
            self.rows.move_down();
        }

        if controller.accept().is_activated() {
            if let Some(row) = self.rows.accept() {
                self.rebinder.begin(&mut row.key);
            }
        }
        Transition::Stay
    }

    pub fn capture(&mut self, input: &RawInput, targets: &mut BindingTargets<'_>) -> RebindOutcome {
        let Some(row) = self.rows.selected_mut() else {
            return RebindOutcome::Pending;
        };
        self.rebinder.capture(&input.events, &mut row.key, targets)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(Self::BACKGROUND);
        for row in self.rows.rows() {
            row.draw(surface);
        }
    }
}
