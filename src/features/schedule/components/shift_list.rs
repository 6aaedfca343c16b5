use leptos::prelude::*;
use crate::core::models::Shift;

#[component]
pub fn ShiftList(
    #[prop(into)] shifts: Signal<Vec<Shift>>,
    on_remove: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="shift-list">
            <h3>"SCHEDULED"</h3>
            <Show
                when=move || shifts.with(|s| !s.is_empty())
                fallback=|| view! { <p class="empty-state">"Nothing scheduled yet"</p> }
            >
                <For
                    each=move || shifts.get()
                    key=|shift| shift.id.clone()
                    let:shift
                >
                    <div class="shift-card">
                        <div class="shift-card-header">
                            <h4>{shift.title.clone()}</h4>
                            <button
                                type="button"
                                class="action-btn delete-btn"
                                title="Remove shift"
                                on:click={
                                    let shift_id = shift.id.clone();
                                    move |_| on_remove.run(shift_id.clone())
                                }
                            >"🗑"</button>
                        </div>
                        <p class="shift-when">
                            {format!("{} · {} – {}", shift.date.format("%a %d %b"), shift.start_time, shift.end_time)}
                            {shift.recurring.then(|| view! { <span class="badge">"weekly"</span> })}
                        </p>
                        <ul class="break-list">
                            {shift.breaks.iter().map(|b| view! {
                                <li class="break-row">
                                    <span class="break-name">{b.name.clone()}</span>
                                    <span class="break-time">{format!("{} – {}", b.start_time, b.end_time)}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </For>
            </Show>
        </section>
    }
}
