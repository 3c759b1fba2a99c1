use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
}

#[test]
fn session_state_default_not_loading() {
    let state = SessionState::default();
    assert!(!state.loading);
}
