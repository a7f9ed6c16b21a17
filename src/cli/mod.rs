//! Command-line interface for claude-responder.
//!
//! One flat command: the responder runs once per workflow event, taking its
//! inputs from flags or the standard GitHub Actions environment variables.

mod commands;

pub use commands::{parse_cli, run, run_with_cli, Cli};
