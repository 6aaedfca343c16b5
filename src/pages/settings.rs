use std::collections::HashSet;
use leptos::prelude::*;
use crate::core::models::SettingsSection;
use crate::features::settings::{SettingsPanel, SettingsSidebar};

#[component]
pub fn Settings() -> impl IntoView {
    let (active, set_active) = signal(SettingsSection::default());
    let enabled = RwSignal::new(HashSet::<&'static str>::new());

    view! {
        <div class="settings-page">
            <SettingsSidebar active=active on_select=Callback::new(move |section| set_active.set(section)) />
            <SettingsPanel section=active enabled=enabled />
        </div>
    }
}
