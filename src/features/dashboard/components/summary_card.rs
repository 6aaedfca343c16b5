use leptos::prelude::*;

#[component]
pub fn SummaryCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] hint: String,
) -> impl IntoView {
    view! {
        <div class="summary-card">
            <span class="summary-label">{label}</span>
            <span class="summary-value">{move || value.get()}</span>
            <span class="summary-hint">{hint}</span>
        </div>
    }
}
