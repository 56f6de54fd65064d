// crates/controls_shared/src/keys.rs
//! Integer key codes as they are persisted in the settings document.
//!
//! The numbering follows SDL keycodes: printable keys use their ASCII code,
//! everything else lives above `SCANCODE_MASK`. Settings files written by
//! SDL-based tools therefore load unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

const SCANCODE_MASK: u32 = 1 << 30;

const fn scancode(sc: u32) -> u32 {
    sc | SCANCODE_MASK
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const RETURN: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const DELETE: KeyCode = KeyCode(127);

    pub const CAPS_LOCK: KeyCode = KeyCode(scancode(57));
    pub const F1: KeyCode = KeyCode(scancode(58));
    pub const F2: KeyCode = KeyCode(scancode(59));
    pub const F12: KeyCode = KeyCode(scancode(69));
    pub const INSERT: KeyCode = KeyCode(scancode(73));
    pub const HOME: KeyCode = KeyCode(scancode(74));
    pub const PAGE_UP: KeyCode = KeyCode(scancode(75));
    pub const END: KeyCode = KeyCode(scancode(77));
    pub const PAGE_DOWN: KeyCode = KeyCode(scancode(78));
    pub const RIGHT: KeyCode = KeyCode(scancode(79));
    pub const LEFT: KeyCode = KeyCode(scancode(80));
    pub const DOWN: KeyCode = KeyCode(scancode(81));
    pub const UP: KeyCode = KeyCode(scancode(82));
    pub const KP_ENTER: KeyCode = KeyCode(scancode(88));
    pub const KP_1: KeyCode = KeyCode(scancode(89));
    pub const KP_0: KeyCode = KeyCode(scancode(98));
    pub const LEFT_CTRL: KeyCode = KeyCode(scancode(224));
    pub const LEFT_SHIFT: KeyCode = KeyCode(scancode(225));
    pub const LEFT_ALT: KeyCode = KeyCode(scancode(226));
    pub const RIGHT_CTRL: KeyCode = KeyCode(scancode(228));
    pub const RIGHT_SHIFT: KeyCode = KeyCode(scancode(229));
    pub const RIGHT_ALT: KeyCode = KeyCode(scancode(230));

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Key code of a printable ASCII character (letters are stored lower-case).
    pub const fn from_char(c: char) -> Self {
        Self(c.to_ascii_lowercase() as u32)
    }

    /// `F1..=F12`; anything else yields `None`.
    pub const fn function(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 {
            Some(Self(Self::F1.0 + (n as u32 - 1)))
        } else {
            None
        }
    }

    /// Keypad digits `0..=9`.
    pub const fn keypad(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::KP_0),
            1..=9 => Some(Self(Self::KP_1.0 + (n as u32 - 1))),
            _ => None,
        }
    }

    /// Human readable label, e.g. `"a"`, `"right"`, `"left shift"`.
    pub fn name(self) -> String {
        if let Some(name) = self.named() {
            return name.to_string();
        }
        if (33..=126).contains(&self.0) {
            if let Some(c) = char::from_u32(self.0) {
                return c.to_string();
            }
        }
        if (Self::F1.0..=Self::F12.0).contains(&self.0) {
            return format!("f{}", self.0 - Self::F1.0 + 1);
        }
        if (Self::KP_1.0..=Self::KP_0.0).contains(&self.0) {
            let digit = (self.0 - Self::KP_1.0 + 1) % 10;
            return format!("[{digit}]");
        }
        "unknown".to_string()
    }

    fn named(self) -> Option<&'static str> {
        let name = match self {
            Self::BACKSPACE => "backspace",
            Self::TAB => "tab",
            Self::RETURN => "return",
            Self::ESCAPE => "escape",
            Self::SPACE => "space",
            Self::DELETE => "delete",
            Self::CAPS_LOCK => "caps lock",
            Self::INSERT => "insert",
            Self::HOME => "home",
            Self::PAGE_UP => "page up",
            Self::END => "end",
            Self::PAGE_DOWN => "page down",
            Self::RIGHT => "right",
            Self::LEFT => "left",
            Self::DOWN => "down",
            Self::UP => "up",
            Self::KP_ENTER => "enter",
            Self::LEFT_CTRL => "left ctrl",
            Self::LEFT_SHIFT => "left shift",
            Self::LEFT_ALT => "left alt",
            Self::RIGHT_CTRL => "right ctrl",
            Self::RIGHT_SHIFT => "right shift",
            Self::RIGHT_ALT => "right alt",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
