//! Route guard for protected views.
//!
//! The decision is a pure function of the token store and is re-evaluated
//! on every navigation, never cached, so a token cleared mid-session by
//! the 401 interceptor is honored on the very next navigation attempt.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::token::TokenStore;

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// A token is present; admit the view.
    Allow,
    /// No session; send the user to the login view.
    RedirectToLogin,
}

/// Admit iff the store currently holds a token.
pub fn evaluate(tokens: &dyn TokenStore) -> Decision {
    if tokens.get().is_some() {
        Decision::Allow
    } else {
        Decision::RedirectToLogin
    }
}

/// Install the guard on the current page.
///
/// Call at the top of every protected page component; redirects to the
/// login view when no session is active.
pub fn use_session_guard() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        let navigate = use_navigate();
        Effect::new(move || {
            if evaluate(&crate::net::token::BrowserTokens) == Decision::RedirectToLogin {
                navigate(crate::net::http::LOGIN_PATH, NavigateOptions::default());
            }
        });
    }
}
