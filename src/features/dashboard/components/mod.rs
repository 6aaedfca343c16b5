pub mod overview_panel;
pub mod summary_card;

pub use overview_panel::*;
pub use summary_card::*;
