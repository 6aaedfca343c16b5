use leptos::prelude::*;
use crate::features::schedule::{ShiftForm, ShiftList, ShiftsHook};

#[component]
pub fn Schedule() -> impl IntoView {
    let ShiftsHook { shifts, add_shift, remove_shift } =
        use_context::<ShiftsHook>().expect("ShiftsHook context");

    view! {
        <div class="schedule-page">
            <header class="page-header">
                <h1>"Schedule"</h1>
            </header>
            <div class="schedule-layout">
                <ShiftForm on_save=add_shift />
                <ShiftList shifts=shifts on_remove=remove_shift />
            </div>
        </div>
    }
}
