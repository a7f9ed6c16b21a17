//! CLI definition and entry points for the claude-responder binary.
//!
//! Every argument doubles as a GitHub Actions environment variable, so a
//! workflow step can invoke the binary with no flags at all. Credentials are
//! optional at parse time; each one is checked at its point of first use.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use crate::github::GITHUB_API_BASE;
use crate::llm::ANTHROPIC_API_BASE;
use crate::pipeline::{self, ResponderConfig, RunOutcome};
use crate::prompts::load_project_context;

/// Answer `@claude` mentions on GitHub issues and pull requests.
#[derive(Parser, Debug)]
#[command(name = "claude-responder")]
#[command(about = "Answer @claude mentions on GitHub issues and pull requests")]
#[command(version)]
#[command(
    long_about = "claude-responder handles one workflow event per invocation: it classifies the event, looks for an @claude mention in the new text, asks Claude for an answer, and posts that answer back to the thread as a comment.\n\nExample usage:\n  claude-responder --event-name issue_comment --event-path \"$GITHUB_EVENT_PATH\" --repo owner/repo"
)]
pub struct Cli {
    /// Workflow event name (issue_comment, issues, pull_request_review_comment).
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: String,

    /// Path to the JSON event payload written by the runner.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: PathBuf,

    /// Target repository in owner/repo form.
    #[arg(long = "repo", env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_BASE)]
    pub github_api_url: String,

    /// Anthropic API base URL.
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = ANTHROPIC_API_BASE)]
    pub anthropic_base_url: String,

    /// Anthropic API key, required only when a mention is actually answered.
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    /// Token used to post the reply comment.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// File with project-context text for the prompt; built-in text is used
    /// when omitted.
    #[arg(long)]
    pub context_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before
/// running the pipeline.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the responder.
///
/// This is a convenience function that parses CLI args and runs the pipeline.
/// For more control over logging initialization, use `parse_cli()` and
/// `run_with_cli()`.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the responder with the parsed arguments.
///
/// Skipped runs and failed comment deliveries return `Ok`; only completion
/// failures and unreadable payloads propagate as errors (and so fail the
/// process).
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let project_context = load_project_context(cli.context_file.as_deref())
        .context("Failed to read project context file")?;

    let config = ResponderConfig {
        event_name: cli.event_name,
        event_path: cli.event_path,
        repository: cli.repository,
        github_api_url: cli.github_api_url,
        anthropic_base_url: cli.anthropic_base_url,
        anthropic_api_key: cli.anthropic_api_key,
        github_token: cli.github_token,
        project_context,
    };

    let outcome = match pipeline::run(config).await {
        Ok(outcome) => outcome,
        Err(err) => {
            if let pipeline::PipelineError::Completion(e) = &err {
                error!(kind = e.kind(), error = %e, "Completion failed, no comment posted");
            }
            return Err(err.into());
        }
    };

    match outcome {
        RunOutcome::Skipped(reason) => {
            info!(reason = %reason, "Run skipped");
        }
        RunOutcome::Published {
            thread_id,
            delivered,
        } => {
            if delivered {
                info!(thread_id, "Answer published");
            } else {
                warn!(thread_id, "Answer generated but comment delivery failed");
            }
        }
    }

    Ok(())
}
