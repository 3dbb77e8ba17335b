//! Student record manager: criteria form, fetch, search, table, edit
//! modal, and delete with confirmation.
//!
//! The component is glue only. Every state transition lives in
//! [`StudentsState`]; every network call goes through `net::api` with the
//! injected token accessor; outcomes are fed back through the `apply_*`
//! methods. A successful update or delete triggers exactly one re-fetch
//! with the last-used criteria.

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::edit_modal::EditModal;
use crate::components::student_table::StudentTable;
use crate::net::types::FilterCriteria;
use crate::state::auth::TokenAccessor;
use crate::state::students::StudentsState;

/// The record manager screen hosted on the dashboard.
#[component]
pub fn ManageStudents() -> impl IntoView {
    let state = expect_context::<RwSignal<StudentsState>>();
    let tokens = expect_context::<TokenAccessor>();

    let branch = RwSignal::new(String::new());
    let class_name = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());

    let on_fetch = {
        let tokens = tokens.clone();
        move |_| {
            let criteria = FilterCriteria {
                branch: branch.get(),
                class_name: class_name.get(),
                subject: subject.get(),
            };
            spawn_fetch(state, &tokens, criteria);
        }
    };

    let on_edit = Callback::new(move |usn: String| state.update(|s| s.open_edit(&usn)));
    let on_delete = {
        let tokens = tokens.clone();
        Callback::new(move |usn: String| spawn_delete(state, &tokens, &usn))
    };
    let on_submit = {
        let tokens = tokens.clone();
        Callback::new(move |()| spawn_update(state, &tokens))
    };
    let on_cancel = Callback::new(move |()| state.update(StudentsState::close_edit));

    let loading = move || state.get().loading;
    let success = Signal::derive(move || state.get().message);
    let error = Signal::derive(move || state.get().error);

    view! {
        <div class="manage-students">
            <h3>"Manage Students"</h3>
            <AlertBanner message=success/>
            <AlertBanner message=error error=true/>

            <div class="manage-students__criteria">
                <label class="field">
                    "Branch"
                    <input
                        type="text"
                        placeholder="Enter Branch"
                        prop:value=move || branch.get()
                        on:input=move |ev| branch.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Class"
                    <input
                        type="text"
                        placeholder="Enter Class"
                        prop:value=move || class_name.get()
                        on:input=move |ev| class_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Subject"
                    <input
                        type="text"
                        placeholder="Enter Subject"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" disabled=loading on:click=on_fetch>
                    {move || if loading() { "Fetching..." } else { "Fetch Students" }}
                </button>
            </div>

            <label class="field manage-students__search">
                "Search Students"
                <input
                    type="text"
                    placeholder="Search by USN or Name"
                    prop:value=move || state.get().search_term
                    on:input=move |ev| {
                        state.update(|s| s.search_term = event_target_value(&ev));
                    }
                />
            </label>

            <StudentTable on_edit=on_edit on_delete=on_delete/>

            <Show when=move || state.get().edit.is_editing()>
                <EditModal on_submit=on_submit on_cancel=on_cancel/>
            </Show>
        </div>
    }
}

/// Start a fetch for `criteria` and apply its outcome when it lands.
/// Local validation failures stop here; no request is issued.
fn spawn_fetch(state: RwSignal<StudentsState>, tokens: &TokenAccessor, criteria: FilterCriteria) {
    let mut started = None;
    state.update(|s| started = s.begin_fetch(&criteria).ok());
    let Some(generation) = started else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let tokens = tokens.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_students(&tokens, &criteria).await;
            if let Err(e) = &result {
                leptos::logging::warn!("student fetch failed: {e}");
            }
            state.update(|s| s.apply_fetch(generation, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tokens, criteria, generation);
    }
}

/// Re-fetch with the most recently used criteria, if a fetch happened.
#[cfg(feature = "hydrate")]
fn spawn_refetch(state: RwSignal<StudentsState>, tokens: &TokenAccessor) {
    let criteria = state.with_untracked(|s| s.last_criteria().cloned());
    if let Some(criteria) = criteria {
        spawn_fetch(state, tokens, criteria);
    }
}

/// Submit the open edit session. Missing selection or key fails locally
/// with the session left as-is.
fn spawn_update(state: RwSignal<StudentsState>, tokens: &TokenAccessor) {
    let mut request = None;
    state.update(|s| request = s.update_request().ok());
    let Some(request) = request else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let tokens = tokens.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_student(&tokens, &request).await;
            if let Err(e) = &result {
                leptos::logging::warn!("student update failed: {e}");
            }
            let mut refetch = false;
            state.update(|s| refetch = s.apply_update(result));
            if refetch {
                spawn_refetch(state, &tokens);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tokens, request);
    }
}

/// Delete after interactive confirmation. Declining issues nothing.
fn spawn_delete(state: RwSignal<StudentsState>, tokens: &TokenAccessor, student_usn: &str) {
    if !confirm_delete() {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        let tokens = tokens.clone();
        let student_usn = student_usn.to_owned();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_student(&tokens, &student_usn).await;
            if let Err(e) = &result {
                leptos::logging::warn!("student delete failed: {e}");
            }
            let mut refetch = false;
            state.update(|s| refetch = s.apply_delete(result));
            if refetch {
                spawn_refetch(state, &tokens);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, tokens, student_usn);
    }
}

/// Browser confirm dialog; `false` outside a browser.
fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this student?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
