//! Registration page.
//!
//! The confirm-password check lives here; the minimum-length rule is
//! enforced by the auth client before any request goes out. A created
//! account is not a session: after the success notice the user is sent
//! to the login view.

use leptos::prelude::*;

/// Registration page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        if password.get() != confirm.get() {
            error.set("Passwords do not match".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            let registration = crate::net::types::Registration {
                email: email.get(),
                password: password.get(),
                full_name: full_name.get(),
                role: "user".to_owned(),
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::auth::register_browser(registration).await {
                    Ok(_) => {
                        success.set("Registration successful! Redirecting to login...".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/login", NavigateOptions::default());
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
                <h2>"Create Account"</h2>

                <Show when=move || !error.get().is_empty()>
                    <div class="alert alert--error">{move || error.get()}</div>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <div class="alert alert--success">{move || success.get()}</div>
                </Show>

                <form on:submit=on_submit>
                    <label class="auth-card__label">
                        "Full Name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        <span class="auth-card__hint">"Minimum 6 characters"</span>
                    </label>
                    <label class="auth-card__label">
                        "Confirm Password"
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">"Register"</button>
                </form>

                <p class="auth-card__alt">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
