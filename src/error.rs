//! Failures that abort a generation run.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// `git` could not be started at all
    #[error("failed to run git: {0}")]
    GitUnavailable(#[source] std::io::Error),

    /// `git clone` exited non-zero
    #[error("git clone of {url} failed: {stderr}")]
    CloneFailed { url: String, stderr: String },

    /// The checkout has no function reference pages where we expect them
    #[error("functions directory not found: {}", .0.display())]
    MissingFunctionsDir(PathBuf),

    /// A page yielded nothing and there is no override to fall back on
    #[error("No examples found for {function}")]
    NoExamples { function: String },
}
