use chrono::Local;
use leptos::prelude::*;
use crate::core::models::Shift;
use crate::features::dashboard::services::{format_hours, summarize, upcoming};
use super::SummaryCard;

#[component]
pub fn OverviewPanel(#[prop(into)] shifts: Signal<Vec<Shift>>) -> impl IntoView {
    let summary = Memo::new(move |_| shifts.with(|s| summarize(s)));

    Effect::new(move |_| {
        summary.with(|s| {
            for problem in &s.unreadable {
                web_sys::console::error_1(&format!("Skipping shift in hour total: {}", problem).into());
            }
        });
    });

    let next_shifts = move || shifts.with(|s| upcoming(s, Local::now().date_naive()));

    view! {
        <section class="overview-panel">
            <div class="summary-grid">
                <SummaryCard
                    label="SHIFTS"
                    value=Signal::derive(move || summary.with(|s| s.shift_count.to_string()))
                />
                <SummaryCard
                    label="RECURRING"
                    value=Signal::derive(move || summary.with(|s| s.recurring_count.to_string()))
                    hint="repeat weekly"
                />
                <SummaryCard
                    label="BREAKS"
                    value=Signal::derive(move || summary.with(|s| s.break_count.to_string()))
                />
                <SummaryCard
                    label="SCHEDULED"
                    value=Signal::derive(move || summary.with(|s| format_hours(s.scheduled_minutes)))
                    hint="breaks included"
                />
            </div>
            <div class="upcoming">
                <h3>"UPCOMING"</h3>
                {move || {
                    let list = next_shifts();
                    if list.is_empty() {
                        view! { <p class="empty-state">"No upcoming shifts"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="upcoming-list">
                                {list.into_iter().map(|shift| view! {
                                    <li class="upcoming-row">
                                        <span class="upcoming-date">{shift.date.format("%a %d %b").to_string()}</span>
                                        <span class="upcoming-title">{shift.title}</span>
                                        <span class="upcoming-time">{format!("{} – {}", shift.start_time, shift.end_time)}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
