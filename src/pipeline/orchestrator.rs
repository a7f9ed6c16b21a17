//! Orchestrator for a single responder run.
//!
//! Each workflow invocation handles exactly one event: the stages run
//! sequentially with no retry, no shared state, and no concurrency. The two
//! HTTP clients are constructed only after a mention has been found, so
//! skipped runs touch neither credentials nor the network.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::error::{CompletionError, EventError};
use crate::event::load_trigger_event;
use crate::github::{render_comment, CommentPublisher};
use crate::llm::{AnthropicClient, CompletionRequest, CLAUDE_MODEL};
use crate::mention::extract_question;
use crate::prompts::build_respond_prompt;

/// Errors that fail a responder run.
///
/// Publish failures are deliberately absent: once an answer has been
/// generated the run counts as successful, and a rejected comment POST is
/// only logged.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The workflow payload could not be read or parsed.
    #[error("Event error: {0}")]
    Event(#[from] EventError),

    /// The completion call failed; no comment is posted in this case.
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

/// Everything one run needs, assembled by the CLI from flags and the
/// workflow environment. Built fresh per invocation and consumed once.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Workflow event name, e.g. "issue_comment".
    pub event_name: String,
    /// Path to the JSON payload file for the event.
    pub event_path: PathBuf,
    /// Target repository in "owner/repo" form.
    pub repository: String,
    /// GitHub REST API base URL.
    pub github_api_url: String,
    /// Anthropic API base URL.
    pub anthropic_base_url: String,
    /// Anthropic API key; absence surfaces at the completion step.
    pub anthropic_api_key: Option<String>,
    /// GitHub token; absence surfaces at the publish step.
    pub github_token: Option<String>,
    /// Static project-context text merged into every prompt.
    pub project_context: String,
}

/// Why a run ended without generating an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The event kind or action is not one the responder handles.
    UnsupportedEvent,
    /// The event text contains no trigger mention.
    NoMention,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnsupportedEvent => write!(f, "unsupported_event"),
            SkipReason::NoMention => write!(f, "no_mention"),
        }
    }
}

/// Terminal state of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run ended early with no side effects.
    Skipped(SkipReason),
    /// An answer was generated; `delivered` records whether the comment POST
    /// was accepted.
    Published { thread_id: u64, delivered: bool },
}

/// Run the responder pipeline once.
///
/// # Errors
///
/// Returns `PipelineError` if the payload cannot be read or the completion
/// call fails. A failed publish does not error; it is logged and reflected
/// in the returned outcome.
pub async fn run(config: ResponderConfig) -> Result<RunOutcome, PipelineError> {
    let trigger = match load_trigger_event(&config.event_name, &config.event_path)? {
        Some(trigger) => trigger,
        None => {
            info!(event = %config.event_name, "Unsupported event, skipping");
            return Ok(RunOutcome::Skipped(SkipReason::UnsupportedEvent));
        }
    };

    info!(
        kind = %trigger.kind,
        thread_id = trigger.thread_id,
        url = %trigger.source_url,
        "Classified trigger event"
    );

    let question = match extract_question(&trigger.raw_text) {
        Some(question) => question,
        None => {
            info!(thread_id = trigger.thread_id, "No trigger mention found, skipping");
            return Ok(RunOutcome::Skipped(SkipReason::NoMention));
        }
    };

    let prompt = build_respond_prompt(&config.project_context, &question);

    let api_key = config.anthropic_api_key.ok_or_else(|| {
        CompletionError::AuthenticationFailure("ANTHROPIC_API_KEY is not set".to_string())
    })?;

    let client = AnthropicClient::new(api_key, &config.anthropic_base_url);
    let completion = client
        .complete(CompletionRequest::new(CLAUDE_MODEL, prompt))
        .await?;

    info!(
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "Generated answer"
    );

    let body = render_comment(&completion.text);
    let publisher = CommentPublisher::new(
        &config.repository,
        config.github_token,
        &config.github_api_url,
    );

    // Issues and PRs share the comments endpoint, so the publish call is the
    // same for every supported thread kind.
    let delivered = match publisher.publish(trigger.thread_id, body).await {
        Ok(comment) => {
            info!(thread_id = comment.thread_id, "Published comment");
            true
        }
        Err(e) => {
            warn!(
                thread_id = trigger.thread_id,
                error = %e,
                "Failed to publish comment; answer was generated but not delivered"
            );
            false
        }
    };

    Ok(RunOutcome::Published {
        thread_id: trigger.thread_id,
        delivered,
    })
}
