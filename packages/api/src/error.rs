//! Error taxonomy for calls to the Akram API.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, CORS, offline).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered 401. The session has already been cleared and the
    /// shell notified; pages must not render this.
    #[error("Session expired")]
    Unauthorized,

    /// Any other non-2xx response. `detail` is the server-supplied message.
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Rejected on the client before any request was sent.
    #[error("{0}")]
    Rejected(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build a [`ApiError::Status`] from a raw error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_detail(&value));
        ApiError::Status { status, detail }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text for a page's error banner: the server's `detail` or the local
    /// rejection reason when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected(reason) => reason.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pull a human-readable message out of an error body's `detail` field.
///
/// Accepts a plain string, or a validation array whose items carry `msg`
/// (joined with `"; "`).
pub fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
