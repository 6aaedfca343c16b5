use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonKind {
    #[default]
    Primary,
    Secondary,
}

impl ButtonKind {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonKind::Primary => "btn-primary",
            ButtonKind::Secondary => "btn-secondary",
        }
    }
}

/// Action control. A disabled button swallows clicks instead of forwarding them.
///
/// `form` ties a submit button to a form it is not nested in.
#[component]
pub fn Button(
    #[prop(optional)] kind: ButtonKind,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] submit: bool,
    #[prop(into, optional)] form: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let button_type = if submit { "submit" } else { "button" };

    let handle_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(cb) = on_click {
            cb.run(());
        }
    };

    view! {
        <button
            type=button_type
            form=form
            class=kind.class()
            disabled=move || disabled.get()
            on:click=handle_click
        >
            {children()}
        </button>
    }
}
