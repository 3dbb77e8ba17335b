//! UI components for the admin dashboard.

pub mod alert_banner;
pub mod edit_modal;
pub mod manage_students;
pub mod student_table;
