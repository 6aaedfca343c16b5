pub mod break_item;
pub mod settings;
pub mod shift;

pub use break_item::{apply_effects, BreakDraft, BreakEntry, BreakItem, Transition};
pub use settings::SettingsSection;
pub use shift::{shift_minutes, Shift, ShiftDraft};
