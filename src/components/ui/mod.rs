pub mod button;
pub mod checkbox;
pub mod dialog;
pub mod labeled_input;

pub use button::{Button, ButtonKind};
pub use checkbox::Checkbox;
pub use dialog::Dialog;
pub use labeled_input::LabeledInput;
