//! State machine for the student record manager screen.
//!
//! DESIGN
//! ======
//! Everything here is plain host-testable data; the Leptos layer wraps
//! [`StudentsState`] in an `RwSignal` and the async glue in
//! `components::manage_students` calls the transition methods around each
//! network round trip. Local validation failures never reach the network.
//!
//! Each fetch carries a generation number. A response is applied only if
//! its generation is still current, so a slow response can never clobber
//! the state of a later request.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use crate::net::api::ApiError;
use crate::net::types::{FilterCriteria, Student, UpdateStudentRequest};

/// Local form failure; handled entirely client-side.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter branch, class, and subject.")]
    MissingCriteria,
    #[error("No student selected to update")]
    NoSelection,
    #[error("Student USN is missing")]
    MissingKey,
}

/// Draft fields of an in-progress edit, decoupled from the record until
/// submit succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditBuffer {
    pub name: String,
    pub lateral_entry: bool,
}

/// Edit-session state. The buffer only exists while a record is selected,
/// so "buffer without selection" cannot be represented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Editing { record: Student, buffer: EditBuffer },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

/// Full view state of the record manager.
///
/// The collection is replaced wholesale on every successful fetch; there is
/// no incremental merge. An open edit session is dropped on refresh since
/// its record reference may no longer be in the collection.
#[derive(Clone, Debug, Default)]
pub struct StudentsState {
    pub students: Vec<Student>,
    pub loading: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub search_term: String,
    pub edit: EditSession,
    last_criteria: Option<FilterCriteria>,
    generation: u64,
}

impl StudentsState {
    /// Start a fetch for `criteria`.
    ///
    /// Validates locally first: any empty field sets the validation error
    /// and nothing else happens. On success the criteria are remembered for
    /// later re-fetches, `loading` is set, and the new request generation is
    /// returned for [`apply_fetch`](Self::apply_fetch).
    ///
    /// # Errors
    ///
    /// [`FormError::MissingCriteria`] when any of branch, class, or subject
    /// is empty. No network call may be issued in that case.
    pub fn begin_fetch(&mut self, criteria: &FilterCriteria) -> Result<u64, FormError> {
        if !criteria.is_complete() {
            self.error = Some(FormError::MissingCriteria.to_string());
            return Err(FormError::MissingCriteria);
        }

        self.loading = true;
        self.last_criteria = Some(criteria.clone());
        self.generation += 1;
        Ok(self.generation)
    }

    /// Start a re-fetch with the most recently used criteria, if any.
    /// Used after a successful update or delete.
    pub fn begin_refetch(&mut self) -> Option<u64> {
        let criteria = self.last_criteria.clone()?;
        self.begin_fetch(&criteria).ok()
    }

    /// The criteria of the last started fetch.
    pub fn last_criteria(&self) -> Option<&FilterCriteria> {
        self.last_criteria.as_ref()
    }

    /// Apply the outcome of the fetch started with `generation`.
    ///
    /// A stale generation (a newer fetch has started since) is discarded
    /// entirely, including its loading reset: the newer request is still in
    /// flight and owns the flag. On success the collection is replaced and
    /// any open edit session is dropped.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<Student>, ApiError>) {
        if generation != self.generation {
            return;
        }

        self.loading = false;
        match result {
            Ok(students) => {
                self.students = students;
                self.message = Some("Students fetched successfully.".to_owned());
                self.error = None;
                self.edit = EditSession::Closed;
            }
            Err(_) => {
                self.error = Some("Error fetching students.".to_owned());
                self.message = None;
            }
        }
    }

    /// The collection filtered by the current search term: case-insensitive
    /// substring match on USN or name. Does not mutate the collection.
    pub fn filtered(&self) -> Vec<Student> {
        let term = self.search_term.to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                s.student_usn.to_lowercase().contains(&term)
                    || s.student_name.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    /// Open an edit session for the record with the given USN.
    ///
    /// The draft buffer is always reinitialized from the clicked record,
    /// replacing any previous drafts without confirmation. Unknown USNs are
    /// ignored (the row the click came from must be in the collection).
    pub fn open_edit(&mut self, student_usn: &str) {
        if let Some(record) = self.students.iter().find(|s| s.student_usn == student_usn) {
            let buffer = EditBuffer {
                name: record.student_name.clone(),
                lateral_entry: record.is_lateral_entry,
            };
            self.edit = EditSession::Editing { record: record.clone(), buffer };
        }
    }

    /// Close the edit session, discarding drafts. Never touches the network.
    pub fn close_edit(&mut self) {
        self.edit = EditSession::Closed;
    }

    pub fn set_draft_name(&mut self, name: String) {
        if let EditSession::Editing { buffer, .. } = &mut self.edit {
            buffer.name = name;
        }
    }

    pub fn set_draft_lateral(&mut self, lateral_entry: bool) {
        if let EditSession::Editing { buffer, .. } = &mut self.edit {
            buffer.lateral_entry = lateral_entry;
        }
    }

    /// Build the update request for the current edit session.
    ///
    /// # Errors
    ///
    /// [`FormError::NoSelection`] when no session is open,
    /// [`FormError::MissingKey`] when the selected record has no USN. Both
    /// set the user-facing error and must not produce a network call; the
    /// session stays as it was.
    pub fn update_request(&mut self) -> Result<UpdateStudentRequest, FormError> {
        let EditSession::Editing { record, buffer } = &self.edit else {
            self.error = Some(FormError::NoSelection.to_string());
            return Err(FormError::NoSelection);
        };
        if record.student_usn.is_empty() {
            let err = FormError::MissingKey;
            self.error = Some(err.to_string());
            return Err(err);
        }
        Ok(UpdateStudentRequest {
            student_usn: record.student_usn.clone(),
            student_name: buffer.name.clone(),
            is_lateral_entry: buffer.lateral_entry,
        })
    }

    /// Apply the outcome of an update request. Returns `true` when the
    /// caller should re-fetch the collection (exactly once, with
    /// [`last_criteria`](Self::last_criteria)).
    ///
    /// On failure the session and its buffer stay intact so the user can
    /// retry.
    pub fn apply_update(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.edit = EditSession::Closed;
                self.message = Some("Student updated successfully.".to_owned());
                true
            }
            Err(_) => {
                self.error = Some("Error updating student.".to_owned());
                false
            }
        }
    }

    /// Apply the outcome of a delete request. Returns `true` when the
    /// caller should re-fetch. The collection itself is never touched here:
    /// no optimistic removal, the row disappears with the re-fetch.
    pub fn apply_delete(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.message = Some("Student deleted successfully.".to_owned());
                true
            }
            Err(_) => {
                self.error = Some("Error deleting student.".to_owned());
                false
            }
        }
    }
}
