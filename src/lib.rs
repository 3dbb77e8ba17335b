//! # campus-admin
//!
//! Leptos + WASM frontend for the campus administration portal.
//! Replaces the React `client/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the faculty API. The student record manager (fetch, search,
//! update, delete) is the main screen; login, password reset, and the
//! faculty profile round out the routing surface.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
