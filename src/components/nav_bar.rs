//! Top navigation bar shared by all protected pages.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Navigation bar with section links, the signed-in identity, and logout.
///
/// Loads the profile from `/auth/me` on first render when a session is
/// active; the profile is display-only and never cached beyond the
/// session context.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let state = session.get_untracked();
            if state.user.is_some() || state.loading {
                return;
            }
            if crate::guard::evaluate(&crate::net::token::BrowserTokens)
                == crate::guard::Decision::RedirectToLogin
            {
                return;
            }
            session.update(|s| s.loading = true);
            leptos::task::spawn_local(async move {
                let user = crate::net::auth::fetch_current_user().await;
                session.update(|s| {
                    s.user = user;
                    s.loading = false;
                });
            });
        });
    }

    let who = move || session.get().user.map(|u| u.email).unwrap_or_default();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::http::{BrowserNavigator, LOGIN_PATH, Navigator};
            use crate::net::token::{BrowserTokens, TokenStore};

            BrowserTokens.clear();
            BrowserNavigator.go(LOGIN_PATH);
        }
    };

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Retail Monitor"</span>
            <nav class="nav-bar__links">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/events">"Events"</a>
                <a href="/alerts">"Alerts"</a>
                <a href="/rules">"Rules"</a>
            </nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{who}</span>
            <button class="btn" on:click=on_logout>"Logout"</button>
        </header>
    }
}
