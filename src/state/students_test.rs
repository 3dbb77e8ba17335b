use super::*;

fn student(usn: &str, name: &str) -> Student {
    Student {
        student_usn: usn.to_owned(),
        student_name: name.to_owned(),
        is_lateral_entry: false,
        branch: "CS".to_owned(),
        class_name: "3A".to_owned(),
        subject: "OS".to_owned(),
    }
}

fn criteria() -> FilterCriteria {
    FilterCriteria {
        branch: "CS".to_owned(),
        class_name: "3A".to_owned(),
        subject: "OS".to_owned(),
    }
}

fn transport_err() -> ApiError {
    ApiError::Transport("connection refused".to_owned())
}

/// State with a completed fetch of the given students.
fn loaded(students: Vec<Student>) -> StudentsState {
    let mut state = StudentsState::default();
    let generation = state.begin_fetch(&criteria()).expect("valid criteria");
    state.apply_fetch(generation, Ok(students));
    state
}

// =============================================================
// Fetch validation
// =============================================================

#[test]
fn begin_fetch_rejects_any_empty_criteria_field() {
    let full = criteria();
    let incomplete = [
        FilterCriteria { branch: String::new(), ..full.clone() },
        FilterCriteria { class_name: String::new(), ..full.clone() },
        FilterCriteria { subject: String::new(), ..full.clone() },
        FilterCriteria::default(),
    ];

    for c in incomplete {
        let mut state = StudentsState::default();
        assert_eq!(state.begin_fetch(&c), Err(FormError::MissingCriteria));
        assert!(!state.loading, "no request may be in flight");
        assert_eq!(state.error.as_deref(), Some("Please enter branch, class, and subject."));
        assert!(state.last_criteria().is_none());
    }
}

#[test]
fn begin_fetch_sets_loading_and_remembers_criteria() {
    let mut state = StudentsState::default();
    let generation = state.begin_fetch(&criteria()).expect("valid criteria");
    assert!(state.loading);
    assert_eq!(state.last_criteria(), Some(&criteria()));
    assert_eq!(generation, 1);
}

// =============================================================
// Fetch outcomes
// =============================================================

#[test]
fn successful_fetch_replaces_collection_wholesale() {
    let mut state = loaded(vec![student("9Z", "Old")]);
    let generation = state.begin_fetch(&criteria()).expect("valid criteria");
    state.apply_fetch(generation, Ok(vec![student("1A", "Asha"), student("1B", "Ben")]));

    let usns: Vec<&str> = state.students.iter().map(|s| s.student_usn.as_str()).collect();
    assert_eq!(usns, ["1A", "1B"], "no merge with prior state");
    assert_eq!(state.message.as_deref(), Some("Students fetched successfully."));
    assert!(state.error.is_none());
    assert!(!state.loading);
}

#[test]
fn failed_fetch_sets_generic_error_and_keeps_collection() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.error = None;
    let generation = state.begin_fetch(&criteria()).expect("valid criteria");
    state.apply_fetch(generation, Err(transport_err()));

    assert_eq!(state.error.as_deref(), Some("Error fetching students."));
    assert!(state.message.is_none());
    assert_eq!(state.students.len(), 1, "collection untouched on failure");
    assert!(!state.loading, "loading resets on the failure path too");
}

#[test]
fn stale_fetch_response_is_discarded() {
    let mut state = StudentsState::default();
    let first = state.begin_fetch(&criteria()).expect("valid criteria");
    let second = state.begin_fetch(&criteria()).expect("valid criteria");

    // The slow first response arrives after the second request started.
    state.apply_fetch(first, Ok(vec![student("9Z", "Stale")]));
    assert!(state.students.is_empty(), "stale response must not land");
    assert!(state.loading, "second request still owns the flag");

    state.apply_fetch(second, Ok(vec![student("1A", "Fresh")]));
    assert_eq!(state.students[0].student_usn, "1A");
    assert!(!state.loading);
}

#[test]
fn refresh_drops_open_edit_session() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.open_edit("1A");
    assert!(state.edit.is_editing());

    let generation = state.begin_fetch(&criteria()).expect("valid criteria");
    state.apply_fetch(generation, Ok(vec![student("1A", "Asha")]));
    assert_eq!(state.edit, EditSession::Closed);
}

#[test]
fn fetch_scenario_cs_3a_os() {
    let mut state = StudentsState::default();
    state.error = Some("stale error".to_owned());

    let generation = state.begin_fetch(&criteria()).expect("valid criteria");
    state.apply_fetch(generation, Ok(vec![student("1A", "Asha"), student("1B", "Ben")]));

    assert_eq!(state.students.len(), 2);
    assert_eq!(state.students[0].student_usn, "1A");
    assert_eq!(state.students[1].student_usn, "1B");
    assert!(state.message.is_some());
    assert!(state.error.is_none());
}

// =============================================================
// Search filtering
// =============================================================

#[test]
fn filter_matches_usn_or_name_case_insensitively() {
    let mut state = loaded(vec![
        student("1CS20CS001", "Asha Rao"),
        student("1CS20CS002", "Ben Kuriakose"),
        student("1EC20EC001", "Chitra"),
    ]);

    state.search_term = "ben".to_owned();
    assert_eq!(state.filtered().len(), 1);
    assert_eq!(state.filtered()[0].student_name, "Ben Kuriakose");

    state.search_term = "1cs20".to_owned();
    assert_eq!(state.filtered().len(), 2);

    state.search_term = "RAO".to_owned();
    assert_eq!(state.filtered().len(), 1);
}

#[test]
fn filter_with_empty_term_returns_everything() {
    let state = loaded(vec![student("1A", "Asha"), student("1B", "Ben")]);
    assert_eq!(state.filtered().len(), 2);
}

#[test]
fn filter_never_mutates_the_collection() {
    let mut state = loaded(vec![student("1A", "Asha"), student("1B", "Ben")]);
    state.search_term = "asha".to_owned();
    let _ = state.filtered();
    let _ = state.filtered();
    assert_eq!(state.students.len(), 2, "underlying collection intact");
}

// =============================================================
// Edit session
// =============================================================

#[test]
fn open_edit_initializes_buffer_from_clicked_record() {
    let mut a = student("1A", "Asha");
    a.is_lateral_entry = true;
    let mut state = loaded(vec![a, student("1B", "Ben")]);

    state.open_edit("1A");
    let EditSession::Editing { record, buffer } = &state.edit else {
        panic!("expected an open session");
    };
    assert_eq!(record.student_usn, "1A");
    assert_eq!(buffer.name, "Asha");
    assert!(buffer.lateral_entry);
}

#[test]
fn open_edit_replaces_stale_drafts_without_confirmation() {
    let mut state = loaded(vec![student("1A", "Asha"), student("1B", "Ben")]);

    state.open_edit("1A");
    state.set_draft_name("half-typed change".to_owned());
    state.set_draft_lateral(true);

    // Clicking another row silently resets the drafts from that record.
    state.open_edit("1B");
    let EditSession::Editing { buffer, .. } = &state.edit else {
        panic!("expected an open session");
    };
    assert_eq!(buffer.name, "Ben");
    assert!(!buffer.lateral_entry);
}

#[test]
fn open_edit_ignores_unknown_usn() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.open_edit("nope");
    assert_eq!(state.edit, EditSession::Closed);
}

#[test]
fn close_edit_discards_buffer() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.open_edit("1A");
    state.set_draft_name("Changed".to_owned());
    state.close_edit();

    assert_eq!(state.edit, EditSession::Closed);
    assert_eq!(state.students[0].student_name, "Asha", "drafts never persisted");
}

#[test]
fn draft_setters_are_noops_when_closed() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.set_draft_name("ghost".to_owned());
    state.set_draft_lateral(true);
    assert_eq!(state.edit, EditSession::Closed);
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_request_carries_key_and_drafts() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.open_edit("1A");
    state.set_draft_name("Asha R".to_owned());
    state.set_draft_lateral(true);

    let req = state.update_request().expect("valid session");
    assert_eq!(req.student_usn, "1A");
    assert_eq!(req.student_name, "Asha R");
    assert!(req.is_lateral_entry);
}

#[test]
fn update_request_without_session_fails_locally() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    assert_eq!(state.update_request(), Err(FormError::NoSelection));
    assert_eq!(state.error.as_deref(), Some("No student selected to update"));
}

#[test]
fn update_request_with_missing_key_fails_locally_and_stays_editing() {
    let mut state = loaded(vec![student("", "Keyless")]);
    state.open_edit("");

    assert_eq!(state.update_request(), Err(FormError::MissingKey));
    assert_eq!(state.error.as_deref(), Some("Student USN is missing"));
    assert!(state.edit.is_editing(), "session unchanged on local failure");
}

#[test]
fn successful_update_closes_session_and_requests_refetch() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.open_edit("1A");

    assert!(state.apply_update(Ok(())));
    assert_eq!(state.edit, EditSession::Closed);
    assert_eq!(state.message.as_deref(), Some("Student updated successfully."));
    assert_eq!(state.last_criteria(), Some(&criteria()), "refetch reuses last criteria");
}

#[test]
fn failed_update_keeps_buffer_for_retry() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    state.open_edit("1A");
    state.set_draft_name("Asha R".to_owned());

    assert!(!state.apply_update(Err(transport_err())));
    assert_eq!(state.error.as_deref(), Some("Error updating student."));
    let EditSession::Editing { buffer, .. } = &state.edit else {
        panic!("session must survive a failed update");
    };
    assert_eq!(buffer.name, "Asha R");
}

// =============================================================
// Delete
// =============================================================

#[test]
fn successful_delete_requests_refetch_without_optimistic_removal() {
    let mut state = loaded(vec![student("1A", "Asha"), student("1B", "Ben")]);

    assert!(state.apply_delete(Ok(())));
    assert_eq!(state.students.len(), 2, "row stays until the re-fetch lands");
    assert_eq!(state.message.as_deref(), Some("Student deleted successfully."));
}

#[test]
fn failed_delete_sets_error_and_requests_no_refetch() {
    let mut state = loaded(vec![student("1A", "Asha")]);

    assert!(!state.apply_delete(Err(transport_err())));
    assert_eq!(state.error.as_deref(), Some("Error deleting student."));
    assert_eq!(state.students.len(), 1, "collection unchanged");
}

// =============================================================
// Refetch plumbing
// =============================================================

#[test]
fn begin_refetch_reuses_last_criteria() {
    let mut state = loaded(vec![student("1A", "Asha")]);
    let generation = state.begin_refetch().expect("criteria remembered");
    assert!(state.loading);
    assert_eq!(generation, 2);
}

#[test]
fn begin_refetch_without_prior_fetch_is_a_noop() {
    let mut state = StudentsState::default();
    assert!(state.begin_refetch().is_none());
    assert!(!state.loading);
}
