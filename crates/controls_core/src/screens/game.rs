// crates/controls_core/src/screens/game.rs

use controls_shared::{Character, Color, RawInput};
use glam::Vec2;

use crate::input::{Controller, InputDefaults};
use crate::mover::Mover;
use crate::ui::{Image, Surface};

/// Solid square drawn at the character's position (top-left corner).
#[derive(Debug, Clone)]
pub struct Sprite {
    image: Image,
}

impl Sprite {
    pub const SIZE: f32 = 100.0;
    pub const COLOR: Color = Color::rgb(250, 50, 50);

    pub fn new() -> Self {
        Self {
            image: Image::solid(Vec2::splat(Self::SIZE), Self::COLOR),
        }
    }

    pub fn draw(&self, character: &Character, surface: &mut dyn Surface) {
        surface.blit(&self.image, character.position);
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GameScreen {
    sprite: Sprite,
    mover: Mover,
}

impl GameScreen {
    pub const CAPTION: &'static str = "Controls tests";
    pub const BACKGROUND: Color = Color::rgb(30, 89, 89);

    pub fn new(mover: Mover) -> Self {
        Self {
            sprite: Sprite::new(),
            mover,
        }
    }

    /// Returns false once the player asked to leave, either through the
    /// controller's quit or a raw Escape press (gamepads have no Escape).
    pub fn update(&mut self, input: &RawInput, controller: &Controller, character: &mut Character) -> bool {
        let escape = input.key_downs().any(|key| key == InputDefaults::QUIT_KEY);
        if escape || controller.quit().is_activated() {
            return false;
        }
        self.mover.move_character(controller, character);
        true
    }

    pub fn draw(&self, character: &Character, surface: &mut dyn Surface) {
        surface.fill(Self::BACKGROUND);
        self.sprite.draw(character, surface);
    }
}
