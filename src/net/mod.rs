//! Networking layer: token store, HTTP pipeline, and typed API clients.
//!
//! DESIGN
//! ======
//! Every outbound call goes through `http::ApiClient`, the single choke
//! point that attaches the bearer token and watches responses for session
//! invalidation. The domain modules (`auth`, `resources`) are thin typed
//! layers on top of it; none of them talk to the network directly.

pub mod auth;
pub mod error;
pub mod http;
pub mod resources;
pub mod token;
pub mod types;

#[cfg(test)]
pub mod testing;

/// Backend origin used when no override is baked in at build time.
const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Versioned REST prefix appended to the origin.
const API_PREFIX: &str = "/api/v1";

/// Base URL for all API requests: configured origin plus versioned prefix.
///
/// The origin comes from the `MONITOR_API_URL` environment variable at
/// build time, falling back to the local development backend.
pub fn api_base() -> String {
    let origin = option_env!("MONITOR_API_URL").unwrap_or(DEFAULT_ORIGIN);
    format!("{origin}{API_PREFIX}")
}
