// crates/controls_core/src/input/keymap.rs
//! winit physical keys -> persisted key codes.

use controls_shared::KeyCode;
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};

pub fn from_physical(key: PhysicalKey) -> Option<KeyCode> {
    match key {
        PhysicalKey::Code(code) => from_winit(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

pub fn from_winit(key: WinitKey) -> Option<KeyCode> {
    let code = match key {
        WinitKey::KeyA => KeyCode::from_char('a'),
        WinitKey::KeyB => KeyCode::from_char('b'),
        WinitKey::KeyC => KeyCode::from_char('c'),
        WinitKey::KeyD => KeyCode::from_char('d'),
        WinitKey::KeyE => KeyCode::from_char('e'),
        WinitKey::KeyF => KeyCode::from_char('f'),
        WinitKey::KeyG => KeyCode::from_char('g'),
        WinitKey::KeyH => KeyCode::from_char('h'),
        WinitKey::KeyI => KeyCode::from_char('i'),
        WinitKey::KeyJ => KeyCode::from_char('j'),
        WinitKey::KeyK => KeyCode::from_char('k'),
        WinitKey::KeyL => KeyCode::from_char('l'),
        WinitKey::KeyM => KeyCode::from_char('m'),
        WinitKey::KeyN => KeyCode::from_char('n'),
        WinitKey::KeyO => KeyCode::from_char('o'),
        WinitKey::KeyP => KeyCode::from_char('p'),
        WinitKey::KeyQ => KeyCode::from_char('q'),
        WinitKey::KeyR => KeyCode::from_char('r'),
        WinitKey::KeyS => KeyCode::from_char('s'),
        WinitKey::KeyT => KeyCode::from_char('t'),
        WinitKey::KeyU => KeyCode::from_char('u'),
        WinitKey::KeyV => KeyCode::from_char('v'),
        WinitKey::KeyW => KeyCode::from_char('w'),
        WinitKey::KeyX => KeyCode::from_char('x'),
        WinitKey::KeyY => KeyCode::from_char('y'),
        WinitKey::KeyZ => KeyCode::from_char('z'),

        WinitKey::Digit0 => KeyCode::from_char('0'),
        WinitKey::Digit1 => KeyCode::from_char('1'),
        WinitKey::Digit2 => KeyCode::from_char('2'),
        WinitKey::Digit3 => KeyCode::from_char('3'),
        WinitKey::Digit4 => KeyCode::from_char('4'),
        WinitKey::Digit5 => KeyCode::from_char('5'),
        WinitKey::Digit6 => KeyCode::from_char('6'),
        WinitKey::Digit7 => KeyCode::from_char('7'),
        WinitKey::Digit8 => KeyCode::from_char('8'),
        WinitKey::Digit9 => KeyCode::from_char('9'),

        WinitKey::Minus => KeyCode::from_char('-'),
        WinitKey::Equal => KeyCode::from_char('='),
        WinitKey::Comma => KeyCode::from_char(','),
        WinitKey::Period => KeyCode::from_char('.'),
        WinitKey::Slash => KeyCode::from_char('/'),
        WinitKey::Semicolon => KeyCode::from_char(';'),
        WinitKey::Quote => KeyCode::from_char('\''),
        WinitKey::BracketLeft => KeyCode::from_char('['),
        WinitKey::BracketRight => KeyCode::from_char(']'),
        WinitKey::Backslash => KeyCode::from_char('\\'),
        WinitKey::Backquote => KeyCode::from_char('`'),

        WinitKey::ArrowUp => KeyCode::UP,
        WinitKey::ArrowDown => KeyCode::DOWN,
        WinitKey::ArrowLeft => KeyCode::LEFT,
        WinitKey::ArrowRight => KeyCode::RIGHT,
        WinitKey::Enter => KeyCode::RETURN,
        WinitKey::Escape => KeyCode::ESCAPE,
        WinitKey::Space => KeyCode::SPACE,
        WinitKey::Tab => KeyCode::TAB,
        WinitKey::Backspace => KeyCode::BACKSPACE,
        WinitKey::Delete => KeyCode::DELETE,
        WinitKey::Insert => KeyCode::INSERT,
        WinitKey::Home => KeyCode::HOME,
        WinitKey::End => KeyCode::END,
        WinitKey::PageUp => KeyCode::PAGE_UP,
        WinitKey::PageDown => KeyCode::PAGE_DOWN,
        WinitKey::CapsLock => KeyCode::CAPS_LOCK,

        WinitKey::ShiftLeft => KeyCode::LEFT_SHIFT,
        WinitKey::ShiftRight => KeyCode::RIGHT_SHIFT,
        WinitKey::ControlLeft => KeyCode::LEFT_CTRL,
        WinitKey::ControlRight => KeyCode::RIGHT_CTRL,
        WinitKey::AltLeft => KeyCode::LEFT_ALT,
        WinitKey::AltRight => KeyCode::RIGHT_ALT,

        WinitKey::F1 => return KeyCode::function(1),
        WinitKey::F2 => return KeyCode::function(2),
        WinitKey::F3 => return KeyCode::function(3),
        WinitKey::F4 => return KeyCode::function(4),
        WinitKey::F5 => return KeyCode::function(5),
        WinitKey::F6 => return KeyCode::function(6),
        WinitKey::F7 => return KeyCode::function(7),
        WinitKey::F8 => return KeyCode::function(8),
        WinitKey::F9 => return KeyCode::function(9),
        WinitKey::F10 => return KeyCode::function(10),
        WinitKey::F11 => return KeyCode::function(11),
        WinitKey::F12 => return KeyCode::function(12),

        WinitKey::Numpad0 => return KeyCode::keypad(0),
        WinitKey::Numpad1 => return KeyCode::keypad(1),
        WinitKey::Numpad2 => return KeyCode::keypad(2),
        WinitKey::Numpad3 => return KeyCode::keypad(3),
        WinitKey::Numpad4 => return KeyCode::keypad(4),
        WinitKey::Numpad5 => return KeyCode::keypad(5),
        WinitKey::Numpad6 => return KeyCode::keypad(6),
        WinitKey::Numpad7 => return KeyCode::keypad(7),
        WinitKey::Numpad8 => return KeyCode::keypad(8),
        WinitKey::Numpad9 => return KeyCode::keypad(9),
        WinitKey::NumpadEnter => KeyCode::KP_ENTER,

        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_letters() {
        assert_eq!(from_winit(WinitKey::ArrowRight), Some(KeyCode::RIGHT));
        assert_eq!(from_winit(WinitKey::KeyW), Some(KeyCode::from_char('w')));
        assert_eq!(from_winit(WinitKey::Enter), Some(KeyCode::RETURN));
        assert_eq!(from_winit(WinitKey::F1), Some(KeyCode::F1));
        assert_eq!(from_winit(WinitKey::Numpad0), KeyCode::keypad(0));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(from_winit(WinitKey::MediaPlayPause), None);
    }
}
