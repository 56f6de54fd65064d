// crates/controls_core/tests/rebind_flow.rs
//! Drives a whole session through `App::frame` with scripted input and a
//! recording surface, backed by a real settings file.

use std::fs;
use std::path::{Path, PathBuf};

use controls_core::screens::ScreenId;
use controls_core::ui::DrawList;
use controls_core::{App, AppConfig, JsonFileStore, SettingsDocument};
use controls_shared::{KeyCode, KeySnapshot, RawEvent, RawInput};
use glam::Vec2;
use pretty_assertions::assert_eq;

const ARROWS: &str = r#"{"right": {"value": 1073741903}, "left": {"value": 1073741904}, "up": {"value": 1073741906}, "down": {"value": 1073741905}}"#;

struct Session {
    app: App,
    path: PathBuf,
    last_frame: DrawList,
    _dir: tempfile::TempDir,
}

impl Session {
    fn start() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        fs::write(&path, ARROWS).expect("write settings");

        let config = AppConfig {
            settings_path: path.clone(),
            ..AppConfig::default()
        };
        let app = App::new(config, Box::new(JsonFileStore::new(&path))).expect("settings load");
        Self {
            app,
            path,
            last_frame: DrawList::new(),
            _dir: dir,
        }
    }

    fn run(&mut self, input: RawInput) -> bool {
        let mut surface = DrawList::new();
        let running = self.app.frame(&input, &mut surface);
        self.last_frame = surface;
        running
    }

    fn tap(&mut self, key: KeyCode) -> bool {
        self.run(RawInput {
            held: [key].into_iter().collect::<KeySnapshot>(),
            events: vec![RawEvent::KeyDown(key)],
            gamepad: None,
        })
    }

    fn hold(&mut self, key: KeyCode) -> bool {
        self.run(RawInput {
            held: [key].into_iter().collect::<KeySnapshot>(),
            ..Default::default()
        })
    }

    fn saved(&self) -> SettingsDocument {
        read(&self.path)
    }
}

fn read(path: &Path) -> SettingsDocument {
    let text = fs::read_to_string(path).expect("read settings");
    SettingsDocument::from_json(&text).expect("well-formed settings")
}

#[test]
fn rebinding_up_persists_and_drives_the_game() {
    let mut s = Session::start();
    let w = KeyCode::from_char('w');

    // Menu: play -> settings, accept.
    s.tap(KeyCode::DOWN);
    s.tap(KeyCode::RETURN);
    assert_eq!(s.app.current_screen(), Some(ScreenId::Settings));
    assert_eq!(s.app.caption(), "settings");

    // Settings: right -> left -> up, accept starts the capture.
    s.tap(KeyCode::DOWN);
    s.tap(KeyCode::DOWN);
    s.tap(KeyCode::RETURN);
    assert!(s.app.is_capturing());
    assert_eq!(s.last_frame.outlines().count(), 1);

    // Frames without a key-down keep waiting.
    for _ in 0..3 {
        s.run(RawInput::default());
    }
    assert!(s.app.is_capturing());

    s.tap(w);
    assert!(!s.app.is_capturing());
    assert_eq!(s.app.document().up.value, w);
    assert_eq!(s.saved().up.value, w);
    assert_eq!(s.saved().right.value, KeyCode::RIGHT);
    assert!(s.last_frame.texts().any(|text| text == "w"));

    // Back to the menu, cursor still on settings; up to play, then play.
    s.tap(KeyCode::ESCAPE);
    assert_eq!(s.app.current_screen(), Some(ScreenId::Menu));
    s.tap(KeyCode::UP);
    s.tap(KeyCode::RETURN);
    assert_eq!(s.app.current_screen(), Some(ScreenId::Game));

    s.hold(w);
    s.hold(w);
    assert_eq!(s.app.character().position, Vec2::new(300.0, 298.0));

    // The old key no longer moves the character.
    s.hold(KeyCode::UP);
    assert_eq!(s.app.character().position, Vec2::new(300.0, 298.0));
}

#[test]
fn cancel_key_keeps_the_file_untouched() {
    let mut s = Session::start();
    s.tap(KeyCode::DOWN);
    s.tap(KeyCode::RETURN);
    s.tap(KeyCode::RETURN);
    assert!(s.app.is_capturing());

    // Escape while capturing only cancels; the screen stays.
    s.tap(KeyCode::ESCAPE);
    assert!(!s.app.is_capturing());
    assert_eq!(s.app.current_screen(), Some(ScreenId::Settings));
    assert_eq!(fs::read_to_string(&s.path).expect("read settings"), ARROWS);
    assert_eq!(s.app.document(), &SettingsDocument::arrows());

    s.tap(KeyCode::ESCAPE);
    assert_eq!(s.app.current_screen(), Some(ScreenId::Menu));
}

#[test]
fn window_close_during_capture_is_ignored() {
    let mut s = Session::start();
    s.tap(KeyCode::DOWN);
    s.tap(KeyCode::RETURN);
    s.tap(KeyCode::RETURN);
    assert!(s.app.is_capturing());

    let close = || RawInput {
        events: vec![RawEvent::Quit],
        ..Default::default()
    };
    assert!(s.run(close()));
    assert!(s.app.is_capturing());
    assert_eq!(s.last_frame.outlines().count(), 1);
    assert_eq!(fs::read_to_string(&s.path).expect("read settings"), ARROWS);

    // Cancel resolves the capture; the next close is honored.
    assert!(s.tap(KeyCode::ESCAPE));
    assert!(!s.app.is_capturing());
    assert!(!s.run(close()));
    assert!(!s.app.is_running());
}

#[test]
fn quit_button_ends_the_session() {
    let mut s = Session::start();
    assert!(s.tap(KeyCode::UP));
    assert!(!s.tap(KeyCode::RETURN));
    assert!(!s.app.is_running());
}

#[test]
fn game_screen_draws_the_character() {
    let mut s = Session::start();
    s.tap(KeyCode::RETURN);
    assert_eq!(s.app.caption(), "Controls tests");
    assert_eq!(s.last_frame.commands().len(), 1);

    s.hold(KeyCode::LEFT);
    assert_eq!(s.app.character().position, Vec2::new(299.0, 300.0));
}
