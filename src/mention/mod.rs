//! Trigger-token mention extraction.
//!
//! Scans event text for the `@claude` trigger token and isolates the
//! question that follows it. The token only counts as a mention when it is
//! followed by at least one whitespace character; the question is everything
//! after that whitespace run, across newlines, trimmed. No mention means the
//! run ends as a silent skip.

pub mod extractor;

pub use extractor::{extract_question, TRIGGER_TOKEN};
