//! Classification of runner events into typed trigger events.

use std::path::Path;

use serde::Deserialize;

use crate::error::EventError;

/// The kind of event that activated the responder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A comment created on an issue (or on the conversation tab of a PR).
    IssueComment,
    /// A newly opened issue.
    IssueOpened,
    /// A review comment created on a pull request diff.
    ReviewComment,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::IssueComment => write!(f, "issue_comment"),
            EventKind::IssueOpened => write!(f, "issue_opened"),
            EventKind::ReviewComment => write!(f, "review_comment"),
        }
    }
}

/// A classified trigger event, immutable once constructed.
///
/// Carries everything later pipeline stages need: the text to scan for the
/// trigger token, the numeric thread id that will receive any reply, whether
/// that thread is a pull request, and a public URL for audit logging.
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    /// Which of the supported events this is.
    pub kind: EventKind,
    /// Issue or pull request number; issues and PRs share one id space.
    pub thread_id: u64,
    /// True when the target thread is a pull request.
    pub is_pull_request_thread: bool,
    /// The text body to scan for the trigger token.
    pub raw_text: String,
    /// Public URL of the comment or issue, for audit logging.
    pub source_url: String,
}

/// Payload shape for `issue_comment` events.
#[derive(Debug, Deserialize)]
struct IssueCommentPayload {
    action: String,
    issue: CommentedIssue,
    comment: EventComment,
}

/// The issue a comment was left on.
#[derive(Debug, Deserialize)]
struct CommentedIssue {
    number: u64,
    /// Present when the "issue" is actually a pull request; PR conversation
    /// comments are delivered as issue comments.
    pull_request: Option<serde_json::Value>,
}

/// A comment object, shared by issue comments and review comments.
#[derive(Debug, Deserialize)]
struct EventComment {
    #[serde(default)]
    body: String,
    html_url: String,
}

/// Payload shape for `issues` events.
#[derive(Debug, Deserialize)]
struct IssuesPayload {
    action: String,
    issue: OpenedIssue,
}

/// The issue carried by an `issues` event. The body is null when the issue
/// was opened without a description.
#[derive(Debug, Deserialize)]
struct OpenedIssue {
    number: u64,
    #[serde(default)]
    body: Option<String>,
    html_url: String,
}

/// Payload shape for `pull_request_review_comment` events.
#[derive(Debug, Deserialize)]
struct ReviewCommentPayload {
    action: String,
    comment: EventComment,
    pull_request: ReviewedPullRequest,
}

/// The pull request a review comment belongs to.
#[derive(Debug, Deserialize)]
struct ReviewedPullRequest {
    number: u64,
}

/// Classify an event from its name and raw JSON payload.
///
/// Returns `Ok(Some(event))` for the three supported (event name, action)
/// pairs, `Ok(None)` for everything else, and an error only when the payload
/// of a supported event cannot be deserialized.
///
/// # Example
///
/// ```
/// use claude_responder::event::{classify, EventKind};
///
/// let payload = r#"{
///     "action": "created",
///     "issue": { "number": 42 },
///     "comment": { "body": "@claude hello", "html_url": "https://example.com/c/1" }
/// }"#;
///
/// let event = classify("issue_comment", payload).unwrap().unwrap();
/// assert_eq!(event.kind, EventKind::IssueComment);
/// assert_eq!(event.thread_id, 42);
/// assert!(!event.is_pull_request_thread);
/// ```
pub fn classify(event_name: &str, payload: &str) -> Result<Option<TriggerEvent>, EventError> {
    let event = match event_name {
        "issue_comment" => {
            let payload: IssueCommentPayload = serde_json::from_str(payload)?;
            if payload.action != "created" {
                return Ok(None);
            }
            TriggerEvent {
                kind: EventKind::IssueComment,
                thread_id: payload.issue.number,
                is_pull_request_thread: payload.issue.pull_request.is_some(),
                raw_text: payload.comment.body,
                source_url: payload.comment.html_url,
            }
        }
        "issues" => {
            let payload: IssuesPayload = serde_json::from_str(payload)?;
            if payload.action != "opened" {
                return Ok(None);
            }
            TriggerEvent {
                kind: EventKind::IssueOpened,
                thread_id: payload.issue.number,
                is_pull_request_thread: false,
                raw_text: payload.issue.body.unwrap_or_default(),
                source_url: payload.issue.html_url,
            }
        }
        "pull_request_review_comment" => {
            let payload: ReviewCommentPayload = serde_json::from_str(payload)?;
            if payload.action != "created" {
                return Ok(None);
            }
            TriggerEvent {
                kind: EventKind::ReviewComment,
                thread_id: payload.pull_request.number,
                is_pull_request_thread: true,
                raw_text: payload.comment.body,
                source_url: payload.comment.html_url,
            }
        }
        _ => return Ok(None),
    };

    Ok(Some(event))
}

/// Read the payload file the runner wrote and classify it.
///
/// # Errors
///
/// Returns `EventError` if the file cannot be read or a supported event's
/// payload cannot be parsed.
pub fn load_trigger_event(
    event_name: &str,
    payload_path: &Path,
) -> Result<Option<TriggerEvent>, EventError> {
    let payload = std::fs::read_to_string(payload_path)?;
    classify(event_name, &payload)
}
