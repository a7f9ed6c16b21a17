//! Comment publication on GitHub threads.
//!
//! Issues and pull requests share one numeric id space and one
//! comment-collection endpoint (`/repos/{owner}/{repo}/issues/{number}/comments`),
//! so a single publisher covers replies to issue comments, new issues, and
//! review comments alike. Publication is one-shot: a rejected or failed POST
//! is reported to the caller and never retried.

pub mod comments;

pub use comments::{render_comment, CommentPublisher, PublishedComment, GITHUB_API_BASE};
