//! Wire types for the monitoring REST contract.
//!
//! Response types default their optional fields so older backend versions
//! (or partially-filled demo data) deserialize without errors.

use serde_json::Value;

/// Authenticated user profile returned by `/auth/me` and registration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: i64,
}

/// Successful login payload.
///
/// The pipeline never stores the token on its own; the call site decides
/// whether `access_token` becomes the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct AuthToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

/// Login form payload. Transient; exists only for the submit call.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration form payload.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
}

/// A monitoring event ingested by the platform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: String,
    pub event_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub created_at: String,
}

/// An alert raised by a rule matching one or more events.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(default)]
    pub rule_id: String,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub acknowledged_at: Option<String>,
}

/// An alerting rule evaluated against incoming events.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub condition: Value,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: String,
}
