//! Error types for claude-responder operations.
//!
//! Defines error types for the major subsystems:
//! - Trigger event loading and classification
//! - Completion API calls
//! - Comment publication

use thiserror::Error;

/// Errors that can occur while loading a trigger event payload.
///
/// These indicate a broken runner contract (missing or corrupt payload
/// file), not an unsupported event: unsupported events are a silent skip,
/// never an error.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse event payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during a completion call.
///
/// Every variant is terminal for the run: completion failures are never
/// retried and never produce a partial comment.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Completion failed: {0}")]
    Unknown(String),
}

impl CompletionError {
    /// Short label for the failure kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthenticationFailure(_) => "authentication_failure",
            Self::RateLimited(_) => "rate_limited",
            Self::MalformedResponse(_) => "malformed_response",
            Self::TransportFailure(_) => "transport_failure",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Errors that can occur while publishing a comment.
///
/// Publication failures are logged and reported but never change the run's
/// exit status.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Missing API token: GITHUB_TOKEN environment variable not set")]
    MissingToken,

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Comment rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
