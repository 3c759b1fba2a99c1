//! Persisted session-token slot.
//!
//! The token is the sole source of truth for "is a session active". In the
//! browser it lives under a single localStorage key so it survives page
//! reloads. Persistence is best-effort: when storage is unavailable the
//! store degrades to "no token" and the user is simply treated as
//! unauthenticated.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::cell::RefCell;

/// localStorage key holding the current access token.
pub const TOKEN_KEY: &str = "access_token";

/// Read/write access to the current session token.
///
/// Operations are synchronous and infallible. Written only by the
/// post-login call site and the 401 interceptor; both writes are
/// idempotent in effect, so no locking is needed.
pub trait TokenStore {
    /// The current token, if a session is active.
    fn get(&self) -> Option<String>;
    /// Store `token` as the current session token.
    fn set(&self, token: &str);
    /// Drop the current session token.
    fn clear(&self);
}

/// In-memory store used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    slot: RefCell<Option<String>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out with an active session.
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: RefCell::new(Some(token.to_owned())),
        }
    }
}

impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// localStorage-backed store used in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
impl BrowserTokens {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(_) => {
                log::warn!("localStorage unavailable; treating session as unauthenticated");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl TokenStore for BrowserTokens {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist access token");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
