use leptos::prelude::*;
use crate::features::schedule::use_shifts;
use crate::pages::{Dashboard, Schedule, Settings};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppView {
    Dashboard,
    Schedule,
    Settings,
}

impl AppView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::Schedule => "Schedule",
            AppView::Settings => "Settings",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (current_view, set_current_view) = signal(AppView::Dashboard);

    provide_context(set_current_view);
    provide_context(use_shifts());

    view! {
        <main class="app">
            <nav class="app-nav">
                {[AppView::Dashboard, AppView::Schedule, AppView::Settings].into_iter().map(|target| view! {
                    <button
                        type="button"
                        class="nav-link"
                        class:active=move || current_view.get() == target
                        on:click=move |_| set_current_view.set(target)
                    >{target.as_str()}</button>
                }).collect_view()}
            </nav>
            {move || match current_view.get() {
                AppView::Dashboard => view! { <Dashboard /> }.into_any(),
                AppView::Schedule => view! { <Schedule /> }.into_any(),
                AppView::Settings => view! { <Settings /> }.into_any(),
            }}
        </main>
    }
}
