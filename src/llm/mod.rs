//! Completion client for the Anthropic Messages API.
//!
//! This module provides the single outbound LLM integration the responder
//! needs: one prompt in, one generated answer out. Every invocation is an
//! independent exchange with a fixed model and a fixed output budget; there
//! is no streaming, no conversation history, and no retry.
//!
//! ```no_run
//! use claude_responder::llm::{AnthropicClient, CompletionRequest, CLAUDE_MODEL};
//!
//! # async fn example() -> Result<(), claude_responder::CompletionError> {
//! let client = AnthropicClient::new("sk-ant-...", "https://api.anthropic.com");
//! let request = CompletionRequest::new(CLAUDE_MODEL, "Why is the sky blue?");
//! let completion = client.complete(request).await?;
//! println!("{}", completion.text);
//! # Ok(())
//! # }
//! ```

pub mod anthropic;

pub use anthropic::{
    AnthropicClient, Completion, CompletionRequest, ANTHROPIC_API_BASE, CLAUDE_MODEL,
    MAX_ANSWER_TOKENS,
};
