use leptos::prelude::*;
use crate::core::models::Shift;

#[derive(Clone, Copy)]
pub struct ShiftsHook {
    pub shifts: ReadSignal<Vec<Shift>>,
    pub add_shift: Callback<Shift>,
    pub remove_shift: Callback<String>,
}

// In-memory shift list shared by the dashboard and the schedule page.
pub fn use_shifts() -> ShiftsHook {
    let shifts = RwSignal::new(Vec::<Shift>::new());

    let add_shift = Callback::new(move |shift: Shift| {
        web_sys::console::log_1(&format!("Scheduling shift {} on {}", shift.title, shift.date).into());
        shifts.update(|list| list.push(shift));
    });

    let remove_shift = Callback::new(move |shift_id: String| {
        shifts.update(|list| {
            if let Some(index) = list.iter().position(|s| s.id == shift_id) {
                list.remove(index);
            } else {
                web_sys::console::error_1(&format!("Shift {} not found", shift_id).into());
            }
        });
    });

    ShiftsHook {
        shifts: shifts.read_only(),
        add_shift,
        remove_shift,
    }
}
