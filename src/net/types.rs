//! Wire types for the faculty REST API.
//!
//! Field names on the wire are the backend's camelCase (`studentUSN`,
//! `className`, ...), mapped to snake_case here via serde renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A student record as returned by the backend.
///
/// Identity is `student_usn`; every other field is display or scoping data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "studentUSN")]
    pub student_usn: String,
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "isLateralEntry")]
    pub is_lateral_entry: bool,
    #[serde(default)]
    pub branch: String,
    #[serde(rename = "className", default)]
    pub class_name: String,
    #[serde(default)]
    pub subject: String,
}

/// Branch/class/subject triple scoping a student list query.
///
/// All three fields must be non-empty before a fetch is issued.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub branch: String,
    #[serde(rename = "className")]
    pub class_name: String,
    pub subject: String,
}

impl FilterCriteria {
    /// True when every field has a value, i.e. a fetch may be issued.
    pub fn is_complete(&self) -> bool {
        !self.branch.is_empty() && !self.class_name.is_empty() && !self.subject.is_empty()
    }
}

/// Response body of `POST /api/faculty/getStudents`.
#[derive(Clone, Debug, Deserialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

/// Request body of `PUT /api/faculty/updateStudent`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateStudentRequest {
    #[serde(rename = "studentUSN")]
    pub student_usn: String,
    #[serde(rename = "studentName")]
    pub student_name: String,
    #[serde(rename = "isLateralEntry")]
    pub is_lateral_entry: bool,
}

/// Request body of `DELETE /api/faculty/deleteStudent` (body-bearing DELETE).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteStudentRequest {
    #[serde(rename = "studentUSN")]
    pub student_usn: String,
}

/// Request body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response body of `POST /api/auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Faculty profile as returned by `GET /api/faculty/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub department: String,
}
