// crates/controls_core/src/ui/widgets.rs

use controls_shared::{Color, ControlId, KeyCode, Rect};
use glam::Vec2;

use super::selection::Row;
use super::surface::{Image, Surface};

pub const FONT_SIZE: f32 = 25.0;
pub const TEXT_COLOR: Color = Color::BLACK;
const FRAME_WIDTH: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Label {
    image: Image,
    pub position: Vec2,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Vec2) -> Self {
        Self {
            image: Image::text(text, TEXT_COLOR, FONT_SIZE),
            position,
        }
    }

    pub fn text(&self) -> &str {
        match &self.image {
            Image::Text { text, .. } => text,
            Image::Solid { .. } => "",
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.image = Image::text(text, TEXT_COLOR, FONT_SIZE);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.image.size())
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.blit(&self.image, self.position);
    }

    pub fn draw_frame(&self, surface: &mut dyn Surface) {
        surface.outline(self.rect(), TEXT_COLOR, FRAME_WIDTH);
    }
}

/// A menu entry. Clicking yields the actions registered on it, in order.
#[derive(Debug, Clone)]
pub struct Button<A> {
    label: Label,
    actions: Vec<A>,
    active: bool,
}

impl<A> Button<A> {
    pub fn new(text: impl Into<String>, position: Vec2) -> Self {
        Self {
            label: Label::new(text, position),
            actions: Vec::new(),
            active: false,
        }
    }

    pub fn on_click(&mut self, action: A) {
        self.actions.push(action);
    }

    pub fn click(&self) -> &[A] {
        &self.actions
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.label.draw(surface);
        if self.active {
            self.label.draw_frame(surface);
        }
    }
}

impl<A> Row for Button<A> {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Shows the name of the key bound to one control.
#[derive(Debug, Clone)]
pub struct KeyField {
    label: Label,
    target: ControlId,
    capturing: bool,
}

impl KeyField {
    pub fn new(key: KeyCode, target: ControlId, position: Vec2) -> Self {
        Self {
            label: Label::new(key.name(), position),
            target,
            capturing: false,
        }
    }

    pub fn target(&self) -> ControlId {
        self.target
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    pub fn rect(&self) -> Rect {
        self.label.rect()
    }

    pub fn set_key(&mut self, key: KeyCode) {
        self.label.set_text(key.name());
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn set_capturing(&mut self, capturing: bool) {
        self.capturing = capturing;
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.label.draw(surface);
        if self.capturing {
            self.label.draw_frame(surface);
        }
    }
}

/// Small square marking the selected settings row.
#[derive(Debug, Clone)]
pub struct ActiveFlag {
    rect: Rect,
    color: Color,
    pub active: bool,
}

impl ActiveFlag {
    pub fn new(center: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            rect: Rect::from_center(center, size),
            color,
            active: false,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.active {
            surface.blit(&Image::solid(self.rect.size, self.color), self.rect.min);
        }
    }
}

/// One settings line: marker, control name, bound key.
#[derive(Debug, Clone)]
pub struct SettingRow {
    name: Label,
    pub key: KeyField,
    flag: ActiveFlag,
}

impl SettingRow {
    pub fn new(target: ControlId, key: KeyCode, location: Vec2) -> Self {
        Self {
            name: Label::new(target.label(), location + Vec2::new(10.0, 0.0)),
            key: KeyField::new(key, target, location + Vec2::new(150.0, 0.0)),
            flag: ActiveFlag::new(location + Vec2::new(0.0, 10.0), Vec2::splat(10.0), TEXT_COLOR),
        }
    }

    pub fn name(&self) -> &str {
        self.name.text()
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.name.draw(surface);
        self.key.draw(surface);
        self.flag.draw(surface);
    }
}

impl Row for SettingRow {
    fn set_active(&mut self, active: bool) {
        self.flag.active = active;
    }

    fn is_active(&self) -> bool {
        self.flag.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::DrawList;

    #[test]
    fn active_button_draws_a_frame() {
        let mut button: Button<u8> = Button::new("play", Vec2::new(100.0, 100.0));
        let mut list = DrawList::new();
        button.draw(&mut list);
        assert_eq!(list.outlines().count(), 0);

        button.set_active(true);
        button.draw(&mut list);
        assert_eq!(list.outlines().count(), 1);
    }

    #[test]
    fn click_returns_registered_actions_in_order() {
        let mut button = Button::new("play", Vec2::ZERO);
        button.on_click(1);
        button.on_click(2);
        assert_eq!(button.click(), &[1, 2]);
    }

    #[test]
    fn key_field_shows_key_name() {
        let mut field = KeyField::new(KeyCode::UP, ControlId::MoveUp, Vec2::ZERO);
        assert_eq!(field.text(), "up");
        field.set_key(KeyCode::from_char('w'));
        assert_eq!(field.text(), "w");
    }

    #[test]
    fn setting_row_flag_follows_activation() {
        let mut row = SettingRow::new(ControlId::MoveLeft, KeyCode::LEFT, Vec2::new(50.0, 80.0));
        assert_eq!(row.name(), "left");

        let mut list = DrawList::new();
        row.draw(&mut list);
        assert_eq!(list.commands().len(), 2);

        row.set_active(true);
        let mut list = DrawList::new();
        row.draw(&mut list);
        assert_eq!(list.commands().len(), 3);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["left", "left"]);
    }
}
