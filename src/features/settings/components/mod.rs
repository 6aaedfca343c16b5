pub mod settings_panel;
pub mod settings_sidebar;

pub use settings_panel::*;
pub use settings_sidebar::*;
