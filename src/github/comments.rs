//! Comment rendering and submission to the GitHub REST API.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::PublishError;

/// GitHub REST API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// User-Agent sent with every request; GitHub rejects anonymous clients.
const USER_AGENT: &str = "claude-responder/0.1";

/// Request timeout for comment submission.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Heading line prepended to every published answer.
const COMMENT_HEADING: &str = "## Claude's Response";

/// Horizontal rule between the answer and the attribution footer.
const COMMENT_SEPARATOR: &str = "---";

/// Attribution footer appended to every published answer. The trigger token
/// is backtick-quoted so a published comment can never satisfy the mention
/// pattern and re-trigger the workflow on itself.
const COMMENT_FOOTER: &str =
    "*Automated reply to a `@claude` mention, generated with Claude 3.5 Sonnet.*";

/// Wrap generated answer text in the fixed comment template.
///
/// The answer is included verbatim, with no escaping or truncation.
///
/// # Example
///
/// ```
/// use claude_responder::github::render_comment;
///
/// let body = render_comment("Use `Arc<Mutex<T>>` for shared state.");
/// assert!(body.contains("Use `Arc<Mutex<T>>` for shared state."));
/// assert!(body.starts_with("## "));
/// ```
pub fn render_comment(answer: &str) -> String {
    format!(
        "{}\n\n{}\n\n{}\n{}",
        COMMENT_HEADING, answer, COMMENT_SEPARATOR, COMMENT_FOOTER
    )
}

/// A comment accepted by GitHub, with the body exactly as submitted.
#[derive(Debug, Clone)]
pub struct PublishedComment {
    /// Thread the comment was created on
    pub thread_id: u64,
    /// Full comment body as submitted
    pub body: String,
}

/// Wire format for the comment-creation request body.
#[derive(Debug, Serialize)]
struct CreateCommentRequest {
    body: String,
}

/// Publisher for comments on issue and pull request threads.
///
/// Holds an optional token rather than requiring one at construction; the
/// missing credential surfaces as a [`PublishError::MissingToken`] at the
/// first publish attempt, before any network traffic.
pub struct CommentPublisher {
    http_client: Client,
    api_base: String,
    repository: String,
    token: Option<String>,
}

impl CommentPublisher {
    /// Create a publisher for `owner/repo` against the given API base.
    ///
    /// A trailing slash on the base URL is trimmed so joined paths stay
    /// well-formed.
    pub fn new(
        repository: impl Into<String>,
        token: Option<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            http_client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            repository: repository.into(),
            token,
        }
    }

    /// API base this publisher targets.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Check if an API token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Create one comment on the given thread.
    ///
    /// Issues and pull requests share the comment-collection endpoint, so the
    /// same POST serves both thread kinds.
    pub async fn publish(
        &self,
        thread_id: u64,
        body: impl Into<String>,
    ) -> Result<PublishedComment, PublishError> {
        let token = self.token.as_ref().ok_or(PublishError::MissingToken)?;

        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_base, self.repository, thread_id
        );
        let body = body.into();

        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("Bearer {}", token))
            .json(&CreateCommentRequest { body: body.clone() })
            .send()
            .await
            .map_err(|e| PublishError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                body: error_text,
            });
        }

        debug!(thread_id, repository = %self.repository, "Comment created");

        Ok(PublishedComment { thread_id, body })
    }
}
