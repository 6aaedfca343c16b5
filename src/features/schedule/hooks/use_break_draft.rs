use leptos::prelude::*;
use crate::core::models::{apply_effects, BreakDraft, BreakItem, Transition};

pub struct BreakDraftHook {
    pub draft: ReadSignal<BreakDraft>,
    pub can_submit: Signal<bool>,
    pub edit_name: Callback<String>,
    pub edit_start: Callback<String>,
    pub edit_end: Callback<String>,
    pub submit: Callback<()>,
    pub cancel: Callback<()>,
}

// Hook owning the break modal's draft. Every handler runs a pure transition,
// stores the resulting draft and then performs its effects against the owner's callbacks.
pub fn use_break_draft(on_add_break: Callback<BreakItem>, on_close: Callback<()>) -> BreakDraftHook {
    let draft = RwSignal::new(BreakDraft::default());

    let commit = move |transition: Transition| {
        draft.set(transition.draft);
        apply_effects(
            transition.effects,
            |item| on_add_break.run(item),
            || on_close.run(()),
        );
    };

    let edit_name = Callback::new(move |value: String| {
        commit(draft.with_untracked(|d| d.edit_name(value)));
    });

    let edit_start = Callback::new(move |value: String| {
        commit(draft.with_untracked(|d| d.edit_start(value)));
    });

    let edit_end = Callback::new(move |value: String| {
        commit(draft.with_untracked(|d| d.edit_end(value)));
    });

    let submit = Callback::new(move |_: ()| {
        commit(draft.with_untracked(|d| d.submit()));
    });

    let cancel = Callback::new(move |_: ()| {
        commit(draft.with_untracked(|d| d.cancel()));
    });

    BreakDraftHook {
        draft: draft.read_only(),
        can_submit: Signal::derive(move || draft.with(|d| d.can_submit())),
        edit_name,
        edit_start,
        edit_end,
        submit,
        cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use leptos::reactive::owner::Owner;

    #[derive(Debug, PartialEq)]
    enum Seen {
        Add(BreakItem, BreakDraft),
        Close(BreakDraft),
    }

    // Each callback records the draft as it stands when the callback fires.
    fn with_hook(run: impl FnOnce(&BreakDraftHook)) -> Vec<Seen> {
        let owner = Owner::new();
        owner.with(|| {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let hook_draft = RwSignal::new(None::<ReadSignal<BreakDraft>>);
            let current = move || {
                hook_draft
                    .get_untracked()
                    .map(|d| d.get_untracked())
                    .unwrap_or_default()
            };

            let on_add = {
                let seen = seen.clone();
                Callback::new(move |item: BreakItem| {
                    seen.lock().unwrap().push(Seen::Add(item, current()));
                })
            };
            let on_close = {
                let seen = seen.clone();
                Callback::new(move |_: ()| {
                    seen.lock().unwrap().push(Seen::Close(current()));
                })
            };

            let hook = use_break_draft(on_add, on_close);
            hook_draft.set(Some(hook.draft));
            run(&hook);

            let recorded = std::mem::take(&mut *seen.lock().unwrap());
            recorded
        })
    }

    fn lunch() -> BreakItem {
        BreakItem {
            name: "Lunch".to_string(),
            start_time: "12:00".to_string(),
            end_time: "13:00".to_string(),
        }
    }

    #[test]
    fn submit_resets_draft_before_emitting_and_closing() {
        let seen = with_hook(|hook| {
            hook.edit_name.run("Lunch".to_string());
            assert!(hook.can_submit.get_untracked());
            hook.submit.run(());
            assert_eq!(hook.draft.get_untracked(), BreakDraft::default());
        });
        assert_eq!(seen, vec![
            Seen::Add(lunch(), BreakDraft::default()),
            Seen::Close(BreakDraft::default()),
        ]);
    }

    #[test]
    fn blank_submit_keeps_edits_and_stays_silent() {
        let seen = with_hook(|hook| {
            hook.edit_name.run("   ".to_string());
            hook.edit_start.run("10:30".to_string());
            assert!(!hook.can_submit.get_untracked());
            hook.submit.run(());
            let draft = hook.draft.get_untracked();
            assert_eq!(draft.name, "   ");
            assert_eq!(draft.start_time, "10:30");
        });
        assert!(seen.is_empty());
    }

    #[test]
    fn cancel_closes_with_defaults_already_restored() {
        let seen = with_hook(|hook| {
            hook.edit_name.run("Walk".to_string());
            hook.edit_end.run("16:20".to_string());
            hook.cancel.run(());
        });
        assert_eq!(seen, vec![Seen::Close(BreakDraft::default())]);
    }
}
