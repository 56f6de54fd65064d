// crates/controls_shared/src/components.rs
use glam::Vec2;

/// The single on-screen character. Only the mover changes its position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Character {
    pub position: Vec2,
}

impl Character {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self { position: Vec2::ZERO }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in window coordinates (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }
}
