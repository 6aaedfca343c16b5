use leptos::prelude::*;
use crate::components::ui::{Button, ButtonKind};
use crate::core::models::{BreakEntry, BreakItem};
use super::BreakEntryModal;

#[component]
pub fn BreaksSection(
    #[prop(into)] breaks: Signal<Vec<BreakEntry>>,
    on_add: Callback<BreakItem>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let (modal_open, set_modal_open) = signal(false);

    view! {
        <section class="form-section breaks-section">
            <div class="section-header">
                <h4>"BREAKS"</h4>
                <Button
                    kind=ButtonKind::Secondary
                    on_click=Callback::new(move |_| set_modal_open.set(true))
                >"+ ADD BREAK"</Button>
            </div>
            <Show
                when=move || breaks.with(|b| !b.is_empty())
                fallback=|| view! { <p class="empty-state">"No breaks scheduled"</p> }
            >
                <ul class="break-list">
                    <For
                        each=move || breaks.get()
                        key=|entry| entry.id.clone()
                        let:entry
                    >
                        <li class="break-row">
                            <span class="break-name">{entry.item.name.clone()}</span>
                            <span class="break-time">
                                {format!("{} – {}", entry.item.start_time, entry.item.end_time)}
                            </span>
                            <button
                                type="button"
                                class="action-btn delete-btn"
                                title="Remove break"
                                on:click={
                                    let break_id = entry.id.clone();
                                    move |_| on_remove.run(break_id.clone())
                                }
                            >"×"</button>
                        </li>
                    </For>
                </ul>
            </Show>
            <BreakEntryModal
                is_open=modal_open
                on_close=Callback::new(move |_| set_modal_open.set(false))
                on_add_break=on_add
            />
        </section>
    }
}
