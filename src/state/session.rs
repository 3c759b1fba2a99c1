#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session state tracking the signed-in profile and loading status.
///
/// Whether a session exists is the token store's call; this state only
/// carries the profile fetched from `/auth/me` for display. It is
/// provided as an `RwSignal` context at the application root.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}
