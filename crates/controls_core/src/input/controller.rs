// crates/controls_core/src/input/controller.rs
//! Controllers turn raw device input into the six logical controls.
//!
//! Every frame follows the same contract: `survey_controls` produces the
//! control states once, consumers read them, and `deactivate_all_controls`
//! clears them before the next frame. Held-versus-edge behavior is a property
//! of the variant; consumers never re-derive it.

use std::fmt;

use controls_shared::{Control, ControlId, GamepadAxis, KeyCode, RawInput};

use super::bindings::{GamepadLayout, KeyBindings};

/// Controls checked for a single key-down on an edge-triggered keyboard.
/// At most one control per group activates.
const MOVEMENT_ORDER: [ControlId; 4] = [
    ControlId::MoveRight,
    ControlId::MoveLeft,
    ControlId::MoveUp,
    ControlId::MoveDown,
];
const ACTION_ORDER: [ControlId; 2] = [ControlId::Accept, ControlId::Quit];

#[derive(Debug, Clone)]
pub enum ControllerKind {
    /// Level-triggered: a control is active on every frame its key is held.
    PollingKeyboard(KeyBindings),
    /// Activates once per physical key-down.
    EdgeTriggeredKeyboard(KeyBindings),
    AnalogGamepad(GamepadLayout),
}

#[derive(Debug, Clone)]
pub struct Controller {
    kind: ControllerKind,
    controls: [Control; 6],
}

impl Controller {
    pub fn new(kind: ControllerKind) -> Self {
        Self {
            kind,
            controls: ControlId::ALL.map(Control::new),
        }
    }

    pub fn polling_keyboard(bindings: KeyBindings) -> Self {
        Self::new(ControllerKind::PollingKeyboard(bindings))
    }

    pub fn edge_triggered_keyboard(bindings: KeyBindings) -> Self {
        Self::new(ControllerKind::EdgeTriggeredKeyboard(bindings))
    }

    pub fn analog_gamepad(layout: GamepadLayout) -> Self {
        Self::new(ControllerKind::AnalogGamepad(layout))
    }

    pub fn control(&self, id: ControlId) -> &Control {
        &self.controls[id.index()]
    }

    pub fn move_up(&self) -> &Control {
        self.control(ControlId::MoveUp)
    }

    pub fn move_right(&self) -> &Control {
        self.control(ControlId::MoveRight)
    }

    pub fn move_down(&self) -> &Control {
        self.control(ControlId::MoveDown)
    }

    pub fn move_left(&self) -> &Control {
        self.control(ControlId::MoveLeft)
    }

    pub fn accept(&self) -> &Control {
        self.control(ControlId::Accept)
    }

    pub fn quit(&self) -> &Control {
        self.control(ControlId::Quit)
    }

    /// Copy of the six control states, for diagnostics.
    pub fn snapshot(&self) -> [Control; 6] {
        self.controls
    }

    /// Key bound to `id`, if this is a keyboard controller.
    pub fn binding(&self, id: ControlId) -> Option<KeyCode> {
        match &self.kind {
            ControllerKind::PollingKeyboard(bindings)
            | ControllerKind::EdgeTriggeredKeyboard(bindings) => Some(bindings.key(id)),
            ControllerKind::AnalogGamepad(_) => None,
        }
    }

    /// Points `id` at a new raw key. Returns false for controllers without
    /// key bindings.
    pub fn rebind(&mut self, id: ControlId, key: KeyCode) -> bool {
        match &mut self.kind {
            ControllerKind::PollingKeyboard(bindings)
            | ControllerKind::EdgeTriggeredKeyboard(bindings) => {
                bindings.bind(id, key);
                true
            }
            ControllerKind::AnalogGamepad(_) => false,
        }
    }

    /// Reads this frame's raw input into the controls. Must run once per
    /// frame, after the previous frame's `deactivate_all_controls`.
    pub fn survey_controls(&mut self, input: &RawInput) {
        debug_assert!(
            self.controls.iter().all(|c| !c.is_activated()),
            "survey_controls called before deactivate_all_controls"
        );

        match &self.kind {
            ControllerKind::PollingKeyboard(bindings) => {
                for control in &mut self.controls {
                    if input.held.is_held(bindings.key(control.id())) {
                        control.activate();
                    }
                }
            }
            ControllerKind::EdgeTriggeredKeyboard(bindings) => {
                for key in input.key_downs() {
                    for group in [&MOVEMENT_ORDER[..], &ACTION_ORDER[..]] {
                        if let Some(id) = bindings.first_match(key, group) {
                            self.controls[id.index()].activate();
                        }
                    }
                }
            }
            ControllerKind::AnalogGamepad(layout) => {
                let layout = *layout;
                self.survey_axis(
                    input,
                    layout.horizontal,
                    layout.dead_zone,
                    ControlId::MoveRight,
                    ControlId::MoveLeft,
                );
                self.survey_axis(
                    input,
                    layout.vertical,
                    layout.dead_zone,
                    ControlId::MoveDown,
                    ControlId::MoveUp,
                );
                if input.button(layout.accept as usize) {
                    self.controls[ControlId::Accept.index()].activate();
                }
                if input.button(layout.quit as usize) {
                    self.controls[ControlId::Quit.index()].activate();
                }
            }
        }
    }

    fn survey_axis(
        &mut self,
        input: &RawInput,
        axis: GamepadAxis,
        dead_zone: f32,
        positive: ControlId,
        negative: ControlId,
    ) {
        let value = input.axis(axis);
        if value.abs() <= dead_zone {
            return;
        }
        let id = if value > 0.0 { positive } else { negative };
        self.controls[id.index()].activate_with(value);
    }

    pub fn deactivate_all_controls(&mut self) {
        for control in &mut self.controls {
            control.deactivate();
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            ControllerKind::PollingKeyboard(_) => "Keyboard",
            ControllerKind::EdgeTriggeredKeyboard(_) => "Intermittent Keyboard",
            ControllerKind::AnalogGamepad(_) => "Gamepad",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputDefaults;
    use controls_shared::{GamepadButton, GamepadState, KeySnapshot, RawEvent};
    use proptest::prelude::*;

    fn arrows() -> KeyBindings {
        KeyBindings::new(
            KeyCode::UP,
            KeyCode::RIGHT,
            KeyCode::DOWN,
            KeyCode::LEFT,
            KeyCode::RETURN,
            KeyCode::ESCAPE,
        )
    }

    fn held(keys: &[KeyCode]) -> RawInput {
        RawInput {
            held: keys.iter().copied().collect::<KeySnapshot>(),
            ..Default::default()
        }
    }

    fn pressed(keys: &[KeyCode]) -> RawInput {
        RawInput {
            held: keys.iter().copied().collect::<KeySnapshot>(),
            events: keys.iter().map(|&k| RawEvent::KeyDown(k)).collect(),
            gamepad: None,
        }
    }

    fn stick(x: f32, y: f32) -> RawInput {
        let mut pad = GamepadState::default();
        pad.axes[GamepadAxis::LeftStickX as usize] = x;
        pad.axes[GamepadAxis::LeftStickY as usize] = y;
        RawInput {
            gamepad: Some(pad),
            ..Default::default()
        }
    }

    fn active(controller: &Controller) -> Vec<ControlId> {
        ControlId::ALL
            .into_iter()
            .filter(|&id| controller.control(id).is_activated())
            .collect()
    }

    #[test]
    fn polling_keyboard_is_level_triggered() {
        let mut controller = Controller::polling_keyboard(arrows());
        let input = held(&[KeyCode::RIGHT, KeyCode::RETURN]);

        for _ in 0..3 {
            controller.survey_controls(&input);
            assert_eq!(active(&controller), vec![ControlId::MoveRight, ControlId::Accept]);
            assert_eq!(controller.move_right().value(), 1.0);
            controller.deactivate_all_controls();
        }
    }

    #[test]
    fn edge_keyboard_fires_once_per_key_down() {
        let mut controller = Controller::edge_triggered_keyboard(arrows());

        // Frame 1: the press arrives.
        controller.survey_controls(&pressed(&[KeyCode::UP]));
        assert_eq!(active(&controller), vec![ControlId::MoveUp]);
        controller.deactivate_all_controls();

        // Frames 2..5: key still held, no new key-down.
        for _ in 0..4 {
            controller.survey_controls(&held(&[KeyCode::UP]));
            assert!(active(&controller).is_empty());
            controller.deactivate_all_controls();
        }
    }

    #[test]
    fn edge_keyboard_activates_one_movement_and_one_action_per_key() {
        let mut bindings = arrows();
        bindings.bind(ControlId::MoveLeft, KeyCode::RIGHT);
        bindings.bind(ControlId::Accept, KeyCode::RIGHT);
        let mut controller = Controller::edge_triggered_keyboard(bindings);

        controller.survey_controls(&pressed(&[KeyCode::RIGHT]));
        assert_eq!(active(&controller), vec![ControlId::MoveRight, ControlId::Accept]);
    }

    #[test]
    fn edge_keyboard_ignores_key_up() {
        let mut controller = Controller::edge_triggered_keyboard(arrows());
        let input = RawInput {
            events: vec![RawEvent::KeyUp(KeyCode::DOWN)],
            ..Default::default()
        };
        controller.survey_controls(&input);
        assert!(active(&controller).is_empty());
    }

    #[test]
    fn gamepad_axes_pass_raw_magnitude() {
        let mut controller = Controller::analog_gamepad(InputDefaults::gamepad_layout());
        controller.survey_controls(&stick(-0.5, 0.75));

        assert_eq!(active(&controller), vec![ControlId::MoveDown, ControlId::MoveLeft]);
        assert_eq!(controller.move_left().value(), -0.5);
        assert_eq!(controller.move_down().value(), 0.75);
    }

    #[test]
    fn gamepad_dead_zone_boundary_is_exclusive() {
        let mut controller = Controller::analog_gamepad(InputDefaults::gamepad_layout());
        controller.survey_controls(&stick(0.05, -0.05));
        assert!(active(&controller).is_empty());
    }

    #[test]
    fn gamepad_buttons_are_digital() {
        let mut controller = Controller::analog_gamepad(InputDefaults::gamepad_layout());
        let mut pad = GamepadState::default();
        pad.buttons[GamepadButton::A as usize] = true;
        pad.buttons[GamepadButton::B as usize] = true;
        let input = RawInput {
            gamepad: Some(pad),
            ..Default::default()
        };
        controller.survey_controls(&input);
        assert_eq!(controller.accept().value(), 1.0);
        assert!(controller.quit().is_activated());
    }

    #[test]
    fn missing_gamepad_produces_nothing() {
        let mut controller = Controller::analog_gamepad(InputDefaults::gamepad_layout());
        controller.survey_controls(&RawInput::default());
        assert!(active(&controller).is_empty());
    }

    #[test]
    fn deactivate_all_resets_every_control() {
        let mut controller = Controller::polling_keyboard(arrows());
        controller.survey_controls(&held(&[
            KeyCode::UP,
            KeyCode::RIGHT,
            KeyCode::DOWN,
            KeyCode::LEFT,
            KeyCode::RETURN,
            KeyCode::ESCAPE,
        ]));
        assert_eq!(active(&controller).len(), 6);

        controller.deactivate_all_controls();
        for control in controller.snapshot() {
            assert!(!control.is_activated());
            assert_eq!(control.value(), 0.0);
        }
    }

    #[test]
    fn rebind_only_applies_to_keyboards() {
        let mut keyboard = Controller::polling_keyboard(arrows());
        assert!(keyboard.rebind(ControlId::MoveUp, KeyCode::from_char('w')));
        assert_eq!(keyboard.binding(ControlId::MoveUp), Some(KeyCode::from_char('w')));

        keyboard.survey_controls(&held(&[KeyCode::from_char('w')]));
        assert!(keyboard.move_up().is_activated());

        let mut pad = Controller::analog_gamepad(InputDefaults::gamepad_layout());
        assert!(!pad.rebind(ControlId::MoveUp, KeyCode::from_char('w')));
        assert_eq!(pad.binding(ControlId::MoveUp), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Controller::polling_keyboard(arrows()).to_string(), "Keyboard");
        assert_eq!(
            Controller::edge_triggered_keyboard(arrows()).to_string(),
            "Intermittent Keyboard"
        );
        assert_eq!(
            Controller::analog_gamepad(InputDefaults::gamepad_layout()).to_string(),
            "Gamepad"
        );
    }

    proptest! {
        #[test]
        fn axis_activation_matches_dead_zone(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
            let mut controller = Controller::analog_gamepad(InputDefaults::gamepad_layout());
            controller.survey_controls(&stick(x, y));

            let horizontal = [controller.move_right(), controller.move_left()];
            let vertical = [controller.move_down(), controller.move_up()];
            for (axis_value, pair) in [(x, horizontal), (y, vertical)] {
                let count = pair.iter().filter(|c| c.is_activated()).count();
                prop_assert!(count <= 1);
                prop_assert_eq!(count == 1, axis_value.abs() > InputDefaults::DEAD_ZONE);
                if count == 1 {
                    let control = if axis_value > 0.0 { pair[0] } else { pair[1] };
                    prop_assert!(control.is_activated());
                    prop_assert_eq!(control.value(), axis_value);
                }
            }
        }
    }
}
