pub mod break_entry_modal;
pub mod breaks_section;
pub mod shift_form;
pub mod shift_list;

pub use break_entry_modal::*;
pub use breaks_section::*;
pub use shift_form::*;
pub use shift_list::*;
