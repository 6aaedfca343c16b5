use leptos::prelude::*;

// Modal shell: backdrop plus panel, rendered only while `open` is true.
// Backdrop clicks and the close button both go through `on_dismiss`.
#[component]
pub fn Dialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    on_dismiss: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_dismiss.run(())>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h3>{title.clone()}</h3>
                        <button type="button" class="modal-close" on:click=move |_| on_dismiss.run(())>"×"</button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
