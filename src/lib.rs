//! claude-responder: answers `@claude` mentions on GitHub threads.
//!
//! This library implements a one-shot GitHub Actions responder: classify the
//! triggering event, extract the question after the `@claude` mention, ask
//! the Anthropic Messages API for an answer, and post the answer back to the
//! issue or pull request as a comment.

// Core modules
pub mod cli;
pub mod error;
pub mod event;
pub mod github;
pub mod llm;
pub mod mention;
pub mod pipeline;
pub mod prompts;

// Re-export commonly used error types
pub use error::{CompletionError, EventError, PublishError};
