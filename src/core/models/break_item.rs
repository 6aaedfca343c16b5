use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_BREAK_START: &str = "12:00";
pub const DEFAULT_BREAK_END: &str = "13:00";

/// A completed break handed to whoever owns the break list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BreakItem {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

/// A break as stored by the owning list, keyed for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakEntry {
    pub id: String,
    pub item: BreakItem,
}

impl BreakEntry {
    pub fn new(item: BreakItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakEffect {
    Emit(BreakItem),
    Close,
}

/// Result of a draft transition: the draft to keep and the effects the host must run, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub draft: BreakDraft,
    pub effects: Vec<BreakEffect>,
}

impl Transition {
    fn quiet(draft: BreakDraft) -> Self {
        Self { draft, effects: Vec::new() }
    }
}

/// In-progress form state of the break modal.
///
/// Times are kept as the `HH:MM` text the time input hands us. Nothing checks
/// that the start comes before the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakDraft {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

impl Default for BreakDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            start_time: DEFAULT_BREAK_START.to_string(),
            end_time: DEFAULT_BREAK_END.to_string(),
        }
    }
}

impl BreakDraft {
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn edit_name(&self, name: impl Into<String>) -> Transition {
        Transition::quiet(Self { name: name.into(), ..self.clone() })
    }

    pub fn edit_start(&self, start_time: impl Into<String>) -> Transition {
        Transition::quiet(Self { start_time: start_time.into(), ..self.clone() })
    }

    pub fn edit_end(&self, end_time: impl Into<String>) -> Transition {
        Transition::quiet(Self { end_time: end_time.into(), ..self.clone() })
    }

    /// Emits the draft as-is (name untrimmed) and closes. A blank name leaves everything untouched.
    pub fn submit(&self) -> Transition {
        if !self.can_submit() {
            return Transition::quiet(self.clone());
        }
        let item = BreakItem {
            name: self.name.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        };
        Transition {
            draft: Self::default(),
            effects: vec![BreakEffect::Emit(item), BreakEffect::Close],
        }
    }

    pub fn cancel(&self) -> Transition {
        Transition {
            draft: Self::default(),
            effects: vec![BreakEffect::Close],
        }
    }
}

/// Runs effects in order against the host's callbacks.
pub fn apply_effects(
    effects: Vec<BreakEffect>,
    on_emit: impl Fn(BreakItem),
    on_close: impl Fn(),
) {
    for effect in effects {
        match effect {
            BreakEffect::Emit(item) => on_emit(item),
            BreakEffect::Close => on_close(),
        }
    }
}
