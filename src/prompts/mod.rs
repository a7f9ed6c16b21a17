//! Prompt construction for mention responses.
//!
//! This module owns the fixed instruction template sent to the completion
//! service and the static project-context text it embeds. The context is
//! loaded once at startup and passed explicitly into the builder; nothing
//! here is re-read per event or held as mutable global state.
//!
//! # Usage
//!
//! ```no_run
//! use claude_responder::prompts::{build_respond_prompt, load_project_context};
//!
//! let context = load_project_context(None).expect("default context");
//! let prompt = build_respond_prompt(&context, "how do I enable tracing?");
//! assert!(prompt.contains("how do I enable tracing?"));
//! ```

pub mod respond;

pub use respond::{
    build_respond_prompt, load_project_context, DEFAULT_PROJECT_CONTEXT, RESPOND_PROMPT_TEMPLATE,
};
