//! API failure taxonomy and backend error payloads.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as `{"detail": ...}` where `detail` is either a
//! plain string or a list of validation issues. Views never show raw transport
//! errors; they ask for [`ApiError::user_message`] with a context fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// One entry of a validation-error `detail` array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ValidationIssue {
    pub msg: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// The `detail` field of an error response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationIssue>),
}

impl ErrorDetail {
    /// Flatten to a single display string; validation messages join with ", ".
    pub fn message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Validation(issues) => issues.iter().map(|issue| issue.msg.as_str()).collect::<Vec<_>>().join(", "),
        }
    }
}

/// Error response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<ErrorDetail> },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// Bodies that are not the `{detail}` envelope yield no detail.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body).unwrap_or_default().detail;
        Self::Status { status, detail }
    }

    /// Displayable message: the backend detail when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Self::Status { detail: Some(detail), .. } = self {
            let message = detail.message();
            if !message.trim().is_empty() {
                return message;
            }
        }
        fallback.to_owned()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
