use super::*;

// =============================================================
// TokenAccessor
// =============================================================

#[test]
fn accessor_returns_injected_token() {
    let tokens = TokenAccessor::new(|| Some("abc123".to_owned()));
    assert_eq!(tokens.token().as_deref(), Some("abc123"));
}

#[test]
fn accessor_reads_on_every_call() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    let switched = Arc::new(AtomicBool::new(false));
    let flag = switched.clone();
    let tokens = TokenAccessor::new(move || {
        if flag.load(Ordering::Relaxed) {
            Some("t2".to_owned())
        } else {
            Some("t1".to_owned())
        }
    });

    assert_eq!(tokens.token().as_deref(), Some("t1"));
    switched.store(true, Ordering::Relaxed);
    assert_eq!(tokens.token().as_deref(), Some("t2"));
}

#[test]
fn accessor_outside_browser_has_no_token() {
    let tokens = TokenAccessor::from_session();
    assert!(tokens.token().is_none());
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_profile() {
    let state = AuthState::default();
    assert!(state.profile.is_none());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}
