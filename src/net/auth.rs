//! Auth operations: login, registration, current-user lookup.
//!
//! Login returns the token payload without touching the token store;
//! storing the token is the caller's one explicit session-start decision.
//! A rejected login still flows through the pipeline's 401 interceptor,
//! which clears any stale token — the same-view check in the pipeline is
//! what keeps the user on the login page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::http::{ApiClient, Transport};
use super::types::{AuthToken, Credentials, Registration, User};

/// Minimum accepted password length, checked before any network call.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Auth-flow failure: a pipeline error or a locally enforced rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// 2xx login response without an `access_token` field.
    #[error("no access token received")]
    MissingToken,

    /// Rejected locally before any request was made.
    #[error("{0}")]
    Invalid(String),
}

impl AuthError {
    /// User-facing message; `action` as in [`ApiError::user_message`].
    pub fn user_message(&self, action: &str) -> String {
        match self {
            AuthError::Api(err) => err.user_message(action),
            AuthError::MissingToken => format!("{action} failed: No access token received"),
            AuthError::Invalid(msg) => msg.clone(),
        }
    }
}

/// POST `/auth/login`.
///
/// On success the returned payload carries the access token. No session
/// state changes here, success or failure.
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    credentials: &Credentials,
) -> Result<AuthToken, AuthError> {
    let token: AuthToken = api.post_json("/auth/login", credentials).await?;
    if token.access_token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// POST `/auth/register`; returns the created profile.
///
/// The password length is validated locally before the request is built.
/// A created account does not imply a session; the caller still sends the
/// user through the login view.
pub async fn register<T: Transport>(
    api: &ApiClient<T>,
    registration: &Registration,
) -> Result<User, AuthError> {
    if registration.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(api.post_json("/auth/register", registration).await?)
}

/// GET `/auth/me`.
pub async fn current_user<T: Transport>(api: &ApiClient<T>) -> Result<User, AuthError> {
    Ok(api.get_json("/auth/me").await?)
}

/// Browser login; returns the access token for the caller to store.
pub async fn login_browser(credentials: Credentials) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        match login(&api, &credentials).await {
            Ok(token) => Ok(token.access_token),
            Err(err) => Err(err.user_message("Login")),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Browser registration; returns the created profile.
pub async fn register_browser(registration: Registration) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        register(&api, &registration)
            .await
            .map_err(|err| err.user_message("Registration"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated user from `/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let api = super::http::browser_client();
        current_user(&api).await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
