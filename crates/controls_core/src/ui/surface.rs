// crates/controls_core/src/ui/surface.rs
//! The drawable surface the screens paint on.
//!
//! Screens only ever call `fill`, `blit` and `outline`; what the platform does
//! with the result is its own business. `DrawList` records the calls so the
//! renderer can paint them after the frame's logic has run.

use controls_shared::{Color, Rect};
use glam::Vec2;

/// Monospace glyph advance relative to the font size.
const GLYPH_ASPECT: f32 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    Solid { size: Vec2, color: Color },
    Text { text: String, color: Color, font_size: f32 },
}

impl Image {
    pub fn solid(size: Vec2, color: Color) -> Self {
        Image::Solid { size, color }
    }

    pub fn text(text: impl Into<String>, color: Color, font_size: f32) -> Self {
        Image::Text {
            text: text.into(),
            color,
            font_size,
        }
    }

    /// Bounding size; text is estimated from glyph count.
    pub fn size(&self) -> Vec2 {
        match self {
            Image::Solid { size, .. } => *size,
            Image::Text { text, font_size, .. } => Vec2::new(
                text.chars().count() as f32 * font_size * GLYPH_ASPECT,
                *font_size,
            ),
        }
    }
}

pub trait Surface {
    fn fill(&mut self, color: Color);
    fn blit(&mut self, image: &Image, position: Vec2);
    fn outline(&mut self, rect: Rect, color: Color, width: f32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Blit { image: Image, position: Vec2 },
    Outline { rect: Rect, color: Color, width: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    background: Color,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            background: Color::BLACK,
            commands: Vec::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text runs in draw order; handy for assertions.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Blit {
                image: Image::Text { text, .. },
                ..
            } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn outlines(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Outline { rect, .. } => Some(*rect),
            _ => None,
        })
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DrawList {
    /// Covers the whole surface, so anything recorded earlier is dropped.
    fn fill(&mut self, color: Color) {
        self.background = color;
        self.commands.clear();
    }

    fn blit(&mut self, image: &Image, position: Vec2) {
        self.commands.push(DrawCommand::Blit {
            image: image.clone(),
            position,
        });
    }

    fn outline(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Outline { rect, color, width });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_discards_previous_commands() {
        let mut list = DrawList::new();
        list.blit(&Image::text("play", Color::BLACK, 25.0), Vec2::ZERO);
        list.fill(Color::rgb(1, 2, 3));
        assert!(list.commands().is_empty());
        assert_eq!(list.background(), Color::rgb(1, 2, 3));
    }

    #[test]
    fn text_size_scales_with_glyphs() {
        let image = Image::text("abcd", Color::BLACK, 10.0);
        assert!(image.size().abs_diff_eq(Vec2::new(24.0, 10.0), 1e-4));
        let solid = Image::solid(Vec2::splat(100.0), Color::BLACK);
        assert_eq!(solid.size(), Vec2::splat(100.0));
    }
}
