use leptos::prelude::*;

#[component]
pub fn LabeledInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, optional)] input_type: Option<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
