use leptos::prelude::*;
use leptos::ev;
use crate::components::ui::{Button, Checkbox, LabeledInput};
use crate::core::models::{BreakItem, Shift, ShiftDraft};
use super::BreaksSection;

const SHIFT_FORM_ID: &str = "shift-form";

#[component]
pub fn ShiftForm(on_save: Callback<Shift>) -> impl IntoView {
    let draft = RwSignal::new(ShiftDraft::default());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get_untracked();
        if !current.can_save() {
            return;
        }
        match current.into_shift() {
            Ok(shift) => {
                on_save.run(shift);
                draft.set(ShiftDraft::default());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to save shift: {}", e).into());
            }
        }
    };

    // BreakEntryModal renders its own <form>; BreaksSection must stay outside this one.
    view! {
        <div class="shift-form">
            <form id=SHIFT_FORM_ID on:submit=handle_submit>
                <section class="form-section">
                    <h3>"NEW SHIFT"</h3>
                    <LabeledInput
                        id="shift-title"
                        label="TITLE"
                        placeholder="Front desk, closing..."
                        value=Signal::derive(move || draft.with(|d| d.title.clone()))
                        on_input=Callback::new(move |v: String| draft.update(|d| d.title = v))
                    />
                    <LabeledInput
                        id="shift-date"
                        label="DATE"
                        input_type="date"
                        value=Signal::derive(move || draft.with(|d| d.date.clone()))
                        on_input=Callback::new(move |v: String| draft.update(|d| d.date = v))
                    />
                    <div class="form-row">
                        <LabeledInput
                            id="shift-start"
                            label="START"
                            input_type="time"
                            value=Signal::derive(move || draft.with(|d| d.start_time.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.start_time = v))
                        />
                        <LabeledInput
                            id="shift-end"
                            label="END"
                            input_type="time"
                            value=Signal::derive(move || draft.with(|d| d.end_time.clone()))
                            on_input=Callback::new(move |v: String| draft.update(|d| d.end_time = v))
                        />
                    </div>
                    <Checkbox
                        id="shift-recurring"
                        label="Repeats weekly"
                        checked=Signal::derive(move || draft.with(|d| d.recurring))
                        on_toggle=Callback::new(move |checked: bool| draft.update(|d| d.recurring = checked))
                    />
                </section>
            </form>
            <BreaksSection
                breaks=Signal::derive(move || draft.with(|d| d.breaks.clone()))
                on_add=Callback::new(move |item: BreakItem| {
                    web_sys::console::log_1(&format!("Break added: {} ({} - {})", item.name, item.start_time, item.end_time).into());
                    draft.update(|d| d.add_break(item));
                })
                on_remove=Callback::new(move |break_id: String| draft.update(|d| d.remove_break(&break_id)))
            />
            <div class="form-actions">
                <Button
                    submit=true
                    form=SHIFT_FORM_ID
                    disabled=Signal::derive(move || !draft.with(|d| d.can_save()))
                >"SAVE SHIFT"</Button>
            </div>
        </div>
    }
}
