//! Response prompt builder for mention questions.
//!
//! Combines the static project context with the extracted user question into
//! the single instruction string sent as the sole user message of the
//! completion call. The builder performs no truncation, sanitization, or
//! escaping: the question is opaque text.

use std::path::Path;

/// Context used when no project-context file is configured.
pub const DEFAULT_PROJECT_CONTEXT: &str = "\
No project-specific context was configured for this repository. Answer from \
the question alone, and say so when repository-specific detail would be \
needed for a complete answer.";

/// Instruction template for answering a mention.
///
/// `{project_context}` and `{question}` are substituted by
/// [`build_respond_prompt`]; everything else is fixed.
pub const RESPOND_PROMPT_TEMPLATE: &str = r#"You are Claude, a helpful AI assistant answering developer questions on a GitHub repository.

Project context:
{project_context}

User question:
{question}

When answering, focus on:
1. Concrete code examples wherever they make the answer clearer
2. How the pieces integrate with the rest of the project
3. Established best practices for the area in question
4. Actionable implementation guidance
5. Security considerations where they apply

Keep the answer concise and suitable for posting as a GitHub comment."#;

/// Builds the completion prompt for a mention question.
///
/// The question is embedded verbatim, including when it is empty: an empty
/// question is a permitted (if unhelpful) request and is left to the model.
///
/// # Examples
///
/// ```
/// use claude_responder::prompts::build_respond_prompt;
///
/// let prompt = build_respond_prompt("A Rust crate for parsing WAV files.", "is seeking supported?");
/// assert!(prompt.contains("A Rust crate for parsing WAV files."));
/// assert!(prompt.contains("is seeking supported?"));
/// ```
pub fn build_respond_prompt(project_context: &str, question: &str) -> String {
    RESPOND_PROMPT_TEMPLATE
        .replace("{project_context}", project_context)
        .replace("{question}", question)
}

/// Loads the static project context, once, at startup.
///
/// With a path, reads the file; without one, falls back to
/// [`DEFAULT_PROJECT_CONTEXT`]. An unreadable file is an error: a configured
/// context the process cannot read is a deployment problem.
pub fn load_project_context(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => Ok(DEFAULT_PROJECT_CONTEXT.to_string()),
    }
}
