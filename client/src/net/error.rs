//! Gateway error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Only 401/403 are handled inside the gateway (forced logout). Everything
//! else reaches the calling page, which picks its own copy via
//! [`ApiError::user_message`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::transport::TransportError;

pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again later.";
pub const SESSION_ENDED_MESSAGE: &str = "Your session has ended. Please sign in again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response: network failure, timeout, or no HTTP in this build.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Server answered 401 or 403; the session has already been cleared.
    #[error("session rejected by server (status {status})")]
    Unauthorized { status: u16 },
    /// Any other non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// 2xx with a body that does not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Server-supplied message, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message for a form or page banner. `fallback` covers rejections and
    /// malformed replies that carry no server message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport(_) => UNREACHABLE_MESSAGE.to_owned(),
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } | Self::Decode(_) | Self::Encode(_) => fallback.to_owned(),
            Self::Unauthorized { .. } => SESSION_ENDED_MESSAGE.to_owned(),
        }
    }
}
