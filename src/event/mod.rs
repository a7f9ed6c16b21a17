//! Trigger event classification.
//!
//! This module turns the raw material delivered by the Actions runner (an
//! event name plus a JSON payload file) into a typed [`TriggerEvent`], or
//! into a "not for us" signal when the event kind or action is one the
//! responder does not handle.
//!
//! # Supported events
//!
//! | event name                    | action    | kind          |
//! |-------------------------------|-----------|---------------|
//! | `issue_comment`               | `created` | IssueComment  |
//! | `issues`                      | `opened`  | IssueOpened   |
//! | `pull_request_review_comment` | `created` | ReviewComment |
//!
//! Everything else is unsupported and skipped silently. A payload file that
//! cannot be read or parsed is an error: that breaks the runner contract,
//! which is different from receiving a well-formed event of the wrong kind.

pub mod classifier;

pub use classifier::{classify, load_trigger_event, EventKind, TriggerEvent};
