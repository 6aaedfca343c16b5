use std::collections::HashSet;
use leptos::prelude::*;
use crate::components::ui::Checkbox;
use crate::core::models::SettingsSection;

// Toggles live only in `enabled`; nothing is saved anywhere.
#[component]
pub fn SettingsPanel(
    #[prop(into)] section: Signal<SettingsSection>,
    enabled: RwSignal<HashSet<&'static str>>,
) -> impl IntoView {
    view! {
        <section class="settings-panel">
            {move || {
                let current = section.get();
                view! {
                    <h3>{current.as_str()}</h3>
                    {current.options().iter().map(|&(key, label)| view! {
                        <Checkbox
                            id=format!("setting-{}", key)
                            label=label
                            checked=Signal::derive(move || enabled.with(|set| set.contains(key)))
                            on_toggle=Callback::new(move |checked: bool| enabled.update(|set| {
                                if checked {
                                    set.insert(key);
                                } else {
                                    set.remove(key);
                                }
                            }))
                        />
                    }).collect_view()}
                }
            }}
        </section>
    }
}
