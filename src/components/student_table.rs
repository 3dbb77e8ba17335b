//! Student table with per-row update and delete actions.

use leptos::prelude::*;

use crate::state::students::StudentsState;

/// Table over the search-filtered collection. Row identity is the USN;
/// the action callbacks receive it.
#[component]
pub fn StudentTable(on_edit: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let state = expect_context::<RwSignal<StudentsState>>();

    view! {
        <div class="student-table">
            <table>
                <thead>
                    <tr>
                        <th>"USN"</th>
                        <th>"Name"</th>
                        <th>"Lateral Entry"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .get()
                            .filtered()
                            .into_iter()
                            .map(|s| {
                                let edit_usn = s.student_usn.clone();
                                let delete_usn = s.student_usn.clone();
                                view! {
                                    <tr>
                                        <td>{s.student_usn.clone()}</td>
                                        <td>{s.student_name.clone()}</td>
                                        <td>{if s.is_lateral_entry { "Yes" } else { "No" }}</td>
                                        <td>
                                            <button
                                                class="btn btn--warn"
                                                on:click=move |_| on_edit.run(edit_usn.clone())
                                            >
                                                "Update"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete.run(delete_usn.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
