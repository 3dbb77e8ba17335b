//! Browser utility helpers.

pub mod session;
