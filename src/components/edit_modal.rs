//! Modal form over the current edit session.

use leptos::prelude::*;

use crate::state::students::{EditSession, StudentsState};

/// Edit dialog bound to the session's draft buffer. The caller mounts it
/// only while a session is open; submit and cancel are delegated so the
/// modal itself never talks to the network.
#[component]
pub fn EditModal(on_submit: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<StudentsState>>();

    let draft_name = move || match state.get().edit {
        EditSession::Editing { buffer, .. } => buffer.name,
        EditSession::Closed => String::new(),
    };
    let draft_lateral = move || match state.get().edit {
        EditSession::Editing { buffer, .. } => buffer.lateral_entry,
        EditSession::Closed => false,
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Update Student"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=draft_name
                        on:input=move |ev| {
                            state.update(|s| s.set_draft_name(event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="dialog__label dialog__label--checkbox">
                    "Lateral Entry"
                    <input
                        type="checkbox"
                        prop:checked=draft_lateral
                        on:change=move |ev| {
                            state.update(|s| s.set_draft_lateral(event_target_checked(&ev)));
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_submit.run(())>
                        "Update"
                    </button>
                </div>
            </div>
        </div>
    }
}
