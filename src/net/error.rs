//! API failure classification.
//!
//! Every failed call is exactly one of three things: the request never
//! reached the server, the server rejected it with a status code, or the
//! request could not be built or its response decoded locally. Pages turn
//! these into user-facing text with [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error produced by the HTTP pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response reached the client (offline, DNS, refused connection).
    #[error("connection failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Server-supplied `detail` body field, when string-valued.
        detail: Option<String>,
        /// Server-supplied `message` body field, when string-valued.
        message: Option<String>,
    },

    /// The request could not be constructed or its response decoded.
    #[error("request failed locally: {0}")]
    Local(String),
}

impl ApiError {
    /// Build a `Rejected` error from a status code and raw response body.
    ///
    /// Recognizes the backend's `detail` field with `message` as a
    /// fallback. A non-JSON body or a structured (non-string) field is
    /// ignored, leaving the caller with the generic status message.
    pub fn rejection(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let field = |key: &str| {
            parsed
                .as_ref()
                .and_then(|v| v.get(key))
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        ApiError::Rejected {
            status,
            detail: field("detail"),
            message: field("message"),
        }
    }

    /// User-facing message for this failure.
    ///
    /// `action` is a capitalized noun such as "Login" or "Registration".
    /// Selection order for rejections: server `detail`, then server
    /// `message`, then "<action> failed: <status>". Transport failures get
    /// a connectivity sentence; local failures surface their raw text.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            ApiError::Rejected {
                status,
                detail,
                message,
            } => detail
                .clone()
                .or_else(|| message.clone())
                .unwrap_or_else(|| format!("{action} failed: {status}")),
            ApiError::Transport(_) => {
                "Cannot connect to server. Please check your connection.".to_owned()
            }
            ApiError::Local(raw) => format!("{action} failed: {raw}"),
        }
    }
}
