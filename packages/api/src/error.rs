use serde_json::Value;
use thiserror::Error;

/// Connectivity guidance shown when no response was received at all.
pub const OFFLINE_MESSAGE: &str =
    "cannot reach the server, check your connection and try again";

/// Outcome of a failed backend call.
///
/// Every error is converted to a display string at the initiating action and
/// held in local view state; nothing propagates to a global handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response received: network failure, refused connection, timeout.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with an error status. `body` is the decoded JSON
    /// payload when one was present.
    #[error("server returned status {status}")]
    Status { status: u16, body: Option<Value> },

    /// Anything else: a malformed success body, an unexpected panic message.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// The first server-supplied message: body field `error`, then `message`.
    fn body_message(&self) -> Option<String> {
        let ApiError::Status { body: Some(body), .. } = self else {
            return None;
        };
        for field in ["error", "message"] {
            if let Some(text) = body.get(field).and_then(Value::as_str) {
                return Some(text.to_string());
            }
        }
        None
    }

    /// Convert to a display string for one action.
    ///
    /// Priority for server rejections: field `error`, then `message`, then a
    /// structured body serialized verbatim, then the per-action `fallback`.
    /// Transport failures map to connectivity guidance, anything else to the
    /// fallback plus the underlying text.
    pub fn surface(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => OFFLINE_MESSAGE.to_string(),
            ApiError::Status { body, .. } => {
                if let Some(message) = self.body_message() {
                    return message;
                }
                match body {
                    Some(body) if body.is_object() => {
                        serde_json::to_string(body).unwrap_or_else(|_| fallback.to_string())
                    }
                    _ => fallback.to_string(),
                }
            }
            ApiError::Unexpected(text) => format!("{fallback}: {text}"),
        }
    }

    /// Status-specific mapping for the login form.
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Network(_) => OFFLINE_MESSAGE.to_string(),
            ApiError::Status { status: 401, .. } => "invalid username or password".to_string(),
            ApiError::Status { status: 403, .. } => {
                "account pending verification, check your email for the OTP".to_string()
            }
            ApiError::Status { status: 400, .. } => self
                .body_message()
                .unwrap_or_else(|| "invalid form data".to_string()),
            ApiError::Status { status, .. } => self
                .body_message()
                .unwrap_or_else(|| format!("server error: {status}")),
            ApiError::Unexpected(text) => format!("login failed: {text}"),
        }
    }
}
