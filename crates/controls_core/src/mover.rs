// crates/controls_core/src/mover.rs

use controls_shared::Character;
use glam::Vec2;

use crate::input::Controller;

/// Turns the controller's current control states into a new position.
///
/// Opposite directions are not summed: right beats left and down beats up
/// when both are active in the same frame.
pub struct Mover {
    speed: f32,
}

impl Mover {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn move_character(&self, controller: &Controller, character: &mut Character) {
        let old = character.position;
        character.move_to(Vec2::new(
            old.x + self.delta_x(controller),
            old.y + self.delta_y(controller),
        ));
    }

    fn delta_x(&self, controller: &Controller) -> f32 {
        if controller.move_right().is_activated() {
            controller.move_right().value() * self.speed
        } else if controller.move_left().is_activated() {
            -controller.move_left().value().abs() * self.speed
        } else {
            0.0
        }
    }

    // Screen y grows downwards.
    fn delta_y(&self, controller: &Controller) -> f32 {
        if controller.move_down().is_activated() {
            controller.move_down().value() * self.speed
        } else if controller.move_up().is_activated() {
            -controller.move_up().value().abs() * self.speed
        } else {
            0.0
        }
    }
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputDefaults, KeyBindings};
    use controls_shared::{GamepadAxis, GamepadState, KeyCode, KeySnapshot, RawInput};

    fn keyboard() -> Controller {
        Controller::polling_keyboard(KeyBindings::new(
            KeyCode::UP,
            KeyCode::RIGHT,
            KeyCode::DOWN,
            KeyCode::LEFT,
            KeyCode::RETURN,
            KeyCode::ESCAPE,
        ))
    }

    fn step(controller: &mut Controller, input: &RawInput, character: &mut Character) {
        controller.survey_controls(input);
        Mover::default().move_character(controller, character);
        controller.deactivate_all_controls();
    }

    fn holding(keys: &[KeyCode]) -> RawInput {
        RawInput {
            held: keys.iter().copied().collect::<KeySnapshot>(),
            ..Default::default()
        }
    }

    #[test]
    fn keyboard_moves_one_unit_per_frame() {
        let mut controller = keyboard();
        let mut character = Character::new(Vec2::new(300.0, 300.0));

        step(&mut controller, &holding(&[KeyCode::RIGHT, KeyCode::UP]), &mut character);
        assert_eq!(character.position, Vec2::new(301.0, 299.0));

        step(&mut controller, &holding(&[KeyCode::LEFT, KeyCode::DOWN]), &mut character);
        assert_eq!(character.position, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn idle_controller_leaves_position_unchanged() {
        let mut controller = keyboard();
        let mut character = Character::new(Vec2::new(12.0, 34.0));
        step(&mut controller, &RawInput::default(), &mut character);
        assert_eq!(character.position, Vec2::new(12.0, 34.0));
    }

    #[test]
    fn right_and_down_win_conflicts() {
        let mut controller = keyboard();
        let mut character = Character::default();
        let all = [KeyCode::LEFT, KeyCode::RIGHT, KeyCode::UP, KeyCode::DOWN];
        step(&mut controller, &holding(&all), &mut character);
        assert_eq!(character.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn analog_magnitude_scales_movement() {
        let mut controller = Controller::analog_gamepad(InputDefaults::gamepad_layout());
        let mut pad = GamepadState::default();
        pad.axes[GamepadAxis::LeftStickX as usize] = -0.5;
        pad.axes[GamepadAxis::LeftStickY as usize] = -0.25;
        let input = RawInput {
            gamepad: Some(pad),
            ..Default::default()
        };

        let mut character = Character::new(Vec2::new(10.0, 10.0));
        step(&mut controller, &input, &mut character);
        assert_eq!(character.position, Vec2::new(9.5, 9.75));
    }

    #[test]
    fn speed_multiplies_delta() {
        let mut controller = keyboard();
        controller.survey_controls(&holding(&[KeyCode::RIGHT]));
        let mut character = Character::default();
        Mover::new(4.0).move_character(&controller, &mut character);
        assert_eq!(character.position, Vec2::new(4.0, 0.0));
    }
}
