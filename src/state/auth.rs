#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use crate::net::types::FacultyProfile;

/// Injected accessor for the current bearer token.
///
/// Constructed once at app start and handed to the network layer, instead
/// of each call site reading a process-wide session store. The closure is
/// re-invoked on every request so an updated token (e.g. after login) is
/// picked up without re-wiring anything.
#[derive(Clone)]
pub struct TokenAccessor(Arc<dyn Fn() -> Option<String> + Send + Sync>);

impl TokenAccessor {
    pub fn new(read: impl Fn() -> Option<String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(read))
    }

    /// Accessor backed by browser session storage.
    pub fn from_session() -> Self {
        Self::new(crate::util::session::read_token)
    }

    /// The current token, or `None` when not logged in.
    pub fn token(&self) -> Option<String> {
        (self.0)()
    }
}

impl std::fmt::Debug for TokenAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAccessor").finish_non_exhaustive()
    }
}

/// Authentication state tracking the signed-in faculty member.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub profile: Option<FacultyProfile>,
    pub loading: bool,
}
