//! Pipeline orchestration for answering thread mentions.
//!
//! This module sequences the full responder run: classify the trigger event,
//! extract the question, build the prompt, generate the answer, and publish
//! it back to the thread.
//!
//! # Pipeline Flow
//!
//! 1. **Classification**: The workflow payload is read and mapped to a
//!    [`TriggerEvent`](crate::event::TriggerEvent), or the run is skipped
//! 2. **Extraction**: The trigger mention is located in the event text; no
//!    mention means the run is skipped with no side effects
//! 3. **Prompt assembly**: Project context and question are merged into a
//!    single instruction string
//! 4. **Completion**: One Messages API call generates the answer
//! 5. **Publication**: The rendered comment is posted to the thread
//!
//! Skips and publish failures leave the process exit status untouched; only
//! completion failures (and unreadable payloads) fail the run.
//!
//! # Example
//!
//! ```rust,ignore
//! use claude_responder::pipeline::{run, ResponderConfig, RunOutcome};
//!
//! let config = ResponderConfig {
//!     event_name: "issue_comment".to_string(),
//!     event_path: "/github/workflow/event.json".into(),
//!     repository: "owner/repo".to_string(),
//!     ..base_config()
//! };
//!
//! match run(config).await? {
//!     RunOutcome::Skipped(reason) => println!("skipped: {}", reason),
//!     RunOutcome::Published { thread_id, delivered } => {
//!         println!("answered thread {} (delivered: {})", thread_id, delivered)
//!     }
//! }
//! ```

pub mod orchestrator;

// Re-export main types for convenience
pub use orchestrator::{run, PipelineError, ResponderConfig, RunOutcome, SkipReason};
