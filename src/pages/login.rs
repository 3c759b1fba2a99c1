//! Login page with email/password form.
//!
//! On success the page stores the returned token — the one explicit
//! session-start decision — and navigates to the dashboard. Failures are
//! rendered inline; a rejected login never navigates away because the
//! pipeline's 401 handling skips the login view.

use leptos::prelude::*;

/// Login page.
#[component]
pub fn LoginPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::net::token::{BrowserTokens, TokenStore};
            use leptos_router::NavigateOptions;

            let credentials = crate::net::types::Credentials {
                email: email.get(),
                password: password.get(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::login_browser(credentials).await {
                    Ok(token) => {
                        BrowserTokens.set(&token);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(message) => error.set(message),
                }
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Retail Monitor"</h1>
                <h2>"Login"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">{move || error.get()}</div>
                </Show>

                <form on:submit=on_submit>
                    <label class="auth-card__label">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">"Login"</button>
                </form>

                <p class="auth-card__alt">
                    "No account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
