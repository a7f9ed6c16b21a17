//! HTTP client for the Anthropic Messages API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CompletionError;

/// Model used for every completion. The responder pins one model rather than
/// exposing a choice; answers stay consistent across runs of the workflow.
pub const CLAUDE_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Upper bound on generated tokens per answer. Comments are expected to be
/// short; anything approaching this limit is already too long for a thread.
pub const MAX_ANSWER_TOKENS: u32 = 2000;

/// Default API endpoint, overridable for tests and proxies.
pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";

/// Messages API revision sent with every request.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Request timeout for completion calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// A single completion request: one prompt, one model, one output budget.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier, e.g. "claude-3-5-sonnet-20241022"
    pub model: String,
    /// Full prompt text sent as the sole user message
    pub prompt: String,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a request with the default output budget.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: MAX_ANSWER_TOKENS,
        }
    }

    /// Override the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A successful completion with its token accounting.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Generated answer text, all text blocks concatenated
    pub text: String,
    /// Tokens consumed by the prompt
    pub input_tokens: u32,
    /// Tokens generated in the answer
    pub output_tokens: u32,
}

/// Wire format for the Messages API request body.
#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

/// Wire format for a successful Messages API response.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
    usage: ApiUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Wire format for a Messages API error body.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the Anthropic Messages API.
pub struct AnthropicClient {
    api_base: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl AnthropicClient {
    /// Create a new client for the given key and endpoint base.
    ///
    /// A trailing slash on the base URL is trimmed so joined paths stay
    /// well-formed.
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_base,
            api_key: api_key.into(),
            http_client,
        }
    }

    /// Endpoint base this client targets.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Run a single completion and return the generated text.
    pub async fn complete(&self, request: CompletionRequest) -> Result<Completion, CompletionError> {
        let url = format!("{}/v1/messages", self.api_base);

        let body = ApiRequest {
            model: request.model,
            max_tokens: request.max_tokens,
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
        };

        debug!(model = %body.model, max_tokens = body.max_tokens, "Sending completion request");

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            // Prefer the structured error message when the body parses.
            let detail = match serde_json::from_str::<ApiErrorResponse>(&error_text) {
                Ok(parsed) => parsed.error.message,
                Err(_) => error_text,
            };

            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationFailure(detail),
                429 => CompletionError::RateLimited(detail),
                _ => CompletionError::Unknown(format!(
                    "API returned status {}: {}",
                    status.as_u16(),
                    detail
                )),
            });
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let text: String = api_response
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(CompletionError::MalformedResponse(
                "Response contained no text content".to_string(),
            ));
        }

        debug!(
            input_tokens = api_response.usage.input_tokens,
            output_tokens = api_response.usage.output_tokens,
            "Completion received"
        );

        Ok(Completion {
            text,
            input_tokens: api_response.usage.input_tokens,
            output_tokens: api_response.usage.output_tokens,
        })
    }
}
