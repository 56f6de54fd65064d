// crates/controls_core/src/ui/mod.rs
pub mod rebinder;
pub mod selection;
pub mod surface;
pub mod widgets;

pub use rebinder::{BindingTargets, RebindOutcome, RebindState, Rebinder};
pub use selection::{Row, SelectionList};
pub use surface::{DrawCommand, DrawList, Image, Surface};
pub use widgets::{ActiveFlag, Button, KeyField, Label, SettingRow};
