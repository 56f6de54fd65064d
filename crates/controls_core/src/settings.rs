// crates/controls_core/src/settings.rs
//! The persisted key-binding document.
//!
//! On disk it is a flat object with exactly four keys, each wrapping one
//! integer key code: `{"right":{"value":1073741903}, ...}`. Any missing key,
//! unknown key or non-integer value is a load error; there are no defaults.

use std::fs;
use std::path::{Path, PathBuf};

use controls_shared::{ControlId, KeyCode};
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Setting {
    pub value: KeyCode,
}

impl Setting {
    pub fn new(value: KeyCode) -> Self {
        Self { value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    pub right: Setting,
    pub left: Setting,
    pub up: Setting,
    pub down: Setting,
}

impl SettingsDocument {
    pub fn new(right: KeyCode, left: KeyCode, up: KeyCode, down: KeyCode) -> Self {
        Self {
            right: Setting::new(right),
            left: Setting::new(left),
            up: Setting::new(up),
            down: Setting::new(down),
        }
    }

    /// Arrow keys, as shipped in the default `settings.json`.
    pub fn arrows() -> Self {
        Self::new(KeyCode::RIGHT, KeyCode::LEFT, KeyCode::UP, KeyCode::DOWN)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(SettingsError::Encode)
    }

    /// The setting backing a movement control; accept and quit are not persisted.
    pub fn get(&self, id: ControlId) -> Option<&Setting> {
        match id {
            ControlId::MoveRight => Some(&self.right),
            ControlId::MoveLeft => Some(&self.left),
            ControlId::MoveUp => Some(&self.up),
            ControlId::MoveDown => Some(&self.down),
            ControlId::Accept | ControlId::Quit => None,
        }
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Setting> {
        match id {
            ControlId::MoveRight => Some(&mut self.right),
            ControlId::MoveLeft => Some(&mut self.left),
            ControlId::MoveUp => Some(&mut self.up),
            ControlId::MoveDown => Some(&mut self.down),
            ControlId::Accept | ControlId::Quit => None,
        }
    }
}

/// Load/save contract for the settings document.
pub trait SettingsStore {
    fn load(&self) -> Result<SettingsDocument, SettingsError>;
    fn save(&mut self, document: &SettingsDocument) -> Result<(), SettingsError>;
}

/// JSON file next to the executable (or wherever the launcher points).
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<SettingsDocument, SettingsError> {
        let text = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        SettingsDocument::from_json(&text).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, document: &SettingsDocument) -> Result<(), SettingsError> {
        let text = document.to_json()?;
        fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }
}

/// Keeps the document in memory and counts saves. Used by tests and by
/// headless runs that should not touch the disk.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    pub document: SettingsDocument,
    pub saves: usize,
}

impl MemoryStore {
    pub fn new(document: SettingsDocument) -> Self {
        Self { document, saves: 0 }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<SettingsDocument, SettingsError> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &SettingsDocument) -> Result<(), SettingsError> {
        self.document = document.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const ORIGINAL: &str = r#"{"right": {"value": 1073741903}, "left": {"value": 1073741904}, "up": {"value": 1073741906}, "down": {"value": 1073741905}}"#;

    #[test]
    fn loads_the_four_key_document() {
        let doc = SettingsDocument::from_json(ORIGINAL).unwrap();
        assert_eq!(doc, SettingsDocument::arrows());
    }

    #[test]
    fn save_keeps_shape_and_key_order() {
        let json = SettingsDocument::arrows().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"right":{"value":1073741903},"left":{"value":1073741904},"up":{"value":1073741906},"down":{"value":1073741905}}"#
        );
    }

    proptest! {
        #[test]
        fn save_of_load_is_identity(right: u32, left: u32, up: u32, down: u32) {
            let doc = SettingsDocument::new(
                KeyCode::new(right),
                KeyCode::new(left),
                KeyCode::new(up),
                KeyCode::new(down),
            );
            let saved = doc.to_json().unwrap();
            let reloaded = SettingsDocument::from_json(&saved).unwrap();
            prop_assert_eq!(&reloaded, &doc);
            prop_assert_eq!(reloaded.to_json().unwrap(), saved);
        }
    }

    #[test]
    fn saving_the_shipped_file_keeps_its_content() {
        let saved = SettingsDocument::from_json(ORIGINAL).unwrap().to_json().unwrap();
        let before: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
        let after: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(after, before);
    }

    #[test]
    fn missing_key_is_an_error() {
        let text = r#"{"right": {"value": 1}, "left": {"value": 2}, "up": {"value": 3}}"#;
        assert!(SettingsDocument::from_json(text).is_err());
    }

    #[test]
    fn non_integer_value_is_an_error() {
        let text = r#"{"right": {"value": "d"}, "left": {"value": 2}, "up": {"value": 3}, "down": {"value": 4}}"#;
        assert!(SettingsDocument::from_json(text).is_err());
        let text = r#"{"right": {"value": 1.5}, "left": {"value": 2}, "up": {"value": 3}, "down": {"value": 4}}"#;
        assert!(SettingsDocument::from_json(text).is_err());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let text = r#"{"right": {"value": 1}, "left": {"value": 2}, "up": {"value": 3}, "down": {"value": 4}, "jump": {"value": 5}}"#;
        assert!(SettingsDocument::from_json(text).is_err());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, ORIGINAL).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        let mut doc = store.load().unwrap();
        doc.up.value = KeyCode::from_char('w');
        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = JsonFileStore::new(&path).load().unwrap_err();
        match err {
            SettingsError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accept_and_quit_are_not_persisted() {
        let doc = SettingsDocument::arrows();
        assert!(doc.get(ControlId::Accept).is_none());
        assert!(doc.get(ControlId::Quit).is_none());
        assert_eq!(doc.get(ControlId::MoveUp).map(|s| s.value), Some(KeyCode::UP));
    }
}
