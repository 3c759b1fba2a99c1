use super::*;
use crate::net::token::{MemoryTokens, TokenStore};

// =============================================================
// Guard decision tracks the store
// =============================================================

#[test]
fn admits_only_when_a_token_is_present() {
    let tokens = MemoryTokens::new();
    assert_eq!(evaluate(&tokens), Decision::RedirectToLogin);

    tokens.set("abc");
    assert_eq!(evaluate(&tokens), Decision::Allow);
}

#[test]
fn decision_changes_on_the_next_evaluation_after_a_toggle() {
    let tokens = MemoryTokens::with_token("abc");
    assert_eq!(evaluate(&tokens), Decision::Allow);

    // Mid-session invalidation (the 401 interceptor's clear).
    tokens.clear();
    assert_eq!(evaluate(&tokens), Decision::RedirectToLogin);

    tokens.set("fresh");
    assert_eq!(evaluate(&tokens), Decision::Allow);
}
