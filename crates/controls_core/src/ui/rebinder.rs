// crates/controls_core/src/ui/rebinder.rs
//! Modal capture of a new raw key for one settings row.
//!
//! `Idle --begin--> AwaitingKey --cancel key--> Idle`
//! `AwaitingKey --any other key-down--> commit --> Idle`
//!
//! While awaiting, the owning screen feeds every raw event of each frame to
//! `capture` instead of surveying its controller, because any key may become
//! the new binding, not only the six mapped ones. There is no timeout.

use controls_shared::{ControlId, KeyCode, RawEvent};

use crate::input::Controller;
use crate::settings::{SettingsDocument, SettingsStore};

use super::widgets::KeyField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindState {
    Idle,
    AwaitingKey { target: ControlId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebindOutcome {
    /// No key-down yet (or nothing was being captured).
    Pending,
    Cancelled,
    Committed { target: ControlId, key: KeyCode },
}

/// Everything a committed binding has to reach.
pub struct BindingTargets<'a> {
    pub document: &'a mut SettingsDocument,
    pub store: &'a mut dyn SettingsStore,
    /// Every controller whose live control follows the binding.
    pub controllers: Vec<&'a mut Controller>,
}

pub struct Rebinder {
    state: RebindState,
    cancel_key: KeyCode,
}

impl Rebinder {
    pub fn new(cancel_key: KeyCode) -> Self {
        Self {
            state: RebindState::Idle,
            cancel_key,
        }
    }

    pub fn state(&self) -> RebindState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, RebindState::AwaitingKey { .. })
    }

    /// Idle -> AwaitingKey for the field's control. No-op while already
    /// awaiting.
    pub fn begin(&mut self, field: &mut KeyField) {
        if self.is_awaiting() {
            return;
        }
        tracing::debug!("Waiting for a new key for '{}'", field.target().label());
        field.set_capturing(true);
        self.state = RebindState::AwaitingKey {
            target: field.target(),
        };
    }

    /// Resolves on the first key-down in `events`; later events of the same
    /// frame are left alone.
    pub fn capture(
        &mut self,
        events: &[RawEvent],
        field: &mut KeyField,
        targets: &mut BindingTargets<'_>,
    ) -> RebindOutcome {
        let RebindState::AwaitingKey { target } = self.state else {
            return RebindOutcome::Pending;
        };

        let Some(key) = events.iter().find_map(|event| match event {
            RawEvent::KeyDown(key) => Some(*key),
            _ => None,
        }) else {
            return RebindOutcome::Pending;
        };

        field.set_capturing(false);
        self.state = RebindState::Idle;

        if key == self.cancel_key {
            tracing::debug!("Rebinding of '{}' cancelled", target.label());
            return RebindOutcome::Cancelled;
        }

        Self::commit(target, key, field, targets);
        RebindOutcome::Committed { target, key }
    }

    fn commit(target: ControlId, key: KeyCode, field: &mut KeyField, targets: &mut BindingTargets<'_>) {
        for controller in targets.controllers.iter_mut() {
            controller.rebind(target, key);
        }
        field.set_key(key);
        if let Some(setting) = targets.document.get_mut(target) {
            setting.value = key;
        }

        tracing::info!("'{}' bound to {} ({})", target.label(), key, key.raw());
        if let Err(e) = targets.store.save(targets.document) {
            tracing::error!("Failed to save settings: {e}");
        }
    }
}
