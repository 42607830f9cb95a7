//! Uniform response envelope.
//!
//! Every success body is `{"success": true, "message": "Success", "data": …}`;
//! handlers construct the envelope explicitly rather than relying on a
//! response-rewriting layer. Failure envelopes carry no `data` member.

use serde::{Deserialize, Serialize};

/// Uniform JSON envelope for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a payload in the success envelope.
    pub fn success(data: T) -> Self {
        Self { success: true, message: "Success".to_string(), data: Some(data) }
    }
}

impl ApiEnvelope<()> {
    /// Success envelope without a payload (e.g. delete responses).
    pub fn empty() -> Self {
        Self { success: true, message: "Success".to_string(), data: None }
    }

    /// Failure envelope with the given message.
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self { success: false, message: message.into(), data: None }
    }
}
