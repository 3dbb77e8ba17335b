//! Network layer: wire types and REST API helpers for the faculty backend.

pub mod api;
pub mod types;
