pub mod use_break_draft;
pub mod use_shifts;

pub use use_break_draft::*;
pub use use_shifts::*;
