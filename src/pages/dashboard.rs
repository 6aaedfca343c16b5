use leptos::prelude::*;
use crate::app::AppView;
use crate::components::ui::Button;
use crate::features::dashboard::OverviewPanel;
use crate::features::schedule::ShiftsHook;

#[component]
pub fn Dashboard() -> impl IntoView {
    let shifts_hook = use_context::<ShiftsHook>().expect("ShiftsHook context");
    let navigate = use_context::<WriteSignal<AppView>>().expect("AppView context");

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Overview"</h1>
                <Button on_click=Callback::new(move |_| navigate.set(AppView::Schedule))>"+ NEW SHIFT"</Button>
            </header>
            <OverviewPanel shifts=shifts_hook.shifts />
        </div>
    }
}
