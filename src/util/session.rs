//! Bearer token persistence in browser `sessionStorage`.
//!
//! The token lives under a fixed key for the lifetime of the tab. All
//! access requires a browser environment; outside it these helpers
//! degrade to no-ops so SSR and host tests never touch the DOM.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window.session_storage().ok().flatten()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store the bearer token after a successful login.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the stored token on logout.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
