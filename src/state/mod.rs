//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `students`) so individual components
//! can depend on small focused models. The student record manager keeps its
//! whole state machine in `students` as plain host-testable types; the
//! Leptos layer wraps it in an `RwSignal` provided via context.

pub mod auth;
pub mod students;
