use leptos::prelude::*;
use leptos::ev;
use crate::components::ui::{Button, ButtonKind, Dialog, LabeledInput};
use crate::core::models::BreakItem;
use crate::features::schedule::hooks::{use_break_draft, BreakDraftHook};

/// Collects one named break and hands it to `on_add_break`.
///
/// Visibility is owned by the caller through `is_open`. Cancelling, dismissing
/// the backdrop and submitting all reset the draft to its defaults before
/// `on_close` runs, so reopening never shows a previous entry. Submitting with a
/// blank name does nothing; the submit button stays disabled in that case.
#[component]
pub fn BreakEntryModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    on_add_break: Callback<BreakItem>,
) -> impl IntoView {
    let BreakDraftHook {
        draft,
        can_submit,
        edit_name,
        edit_start,
        edit_end,
        submit,
        cancel,
    } = use_break_draft(on_add_break, on_close);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        submit.run(());
    };

    view! {
        <Dialog open=is_open title="ADD BREAK" on_dismiss=cancel>
            <form class="break-form" on:submit=handle_submit>
                <LabeledInput
                    id="break-name"
                    label="NAME"
                    placeholder="Lunch, coffee..."
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=edit_name
                />
                <div class="form-row">
                    <LabeledInput
                        id="break-start"
                        label="START"
                        input_type="time"
                        value=Signal::derive(move || draft.with(|d| d.start_time.clone()))
                        on_input=edit_start
                    />
                    <LabeledInput
                        id="break-end"
                        label="END"
                        input_type="time"
                        value=Signal::derive(move || draft.with(|d| d.end_time.clone()))
                        on_input=edit_end
                    />
                </div>
                <div class="modal-actions">
                    <Button kind=ButtonKind::Secondary on_click=cancel>"CANCEL"</Button>
                    <Button submit=true disabled=Signal::derive(move || !can_submit.get())>"ADD BREAK"</Button>
                </div>
            </form>
        </Dialog>
    }
}
