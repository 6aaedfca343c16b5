use leptos::prelude::*;
use crate::core::models::SettingsSection;

#[component]
pub fn SettingsSidebar(
    #[prop(into)] active: Signal<SettingsSection>,
    on_select: Callback<SettingsSection>,
) -> impl IntoView {
    view! {
        <nav class="settings-sidebar">
            <h2>"Settings"</h2>
            <ul class="settings-nav">
                {SettingsSection::all().into_iter().map(|section| view! {
                    <li>
                        <button
                            type="button"
                            class="settings-nav-item"
                            class:active=move || active.get() == section
                            on:click=move |_| on_select.run(section)
                        >{section.as_str()}</button>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}
