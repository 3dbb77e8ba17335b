//! Top-level routed pages.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod profile;
