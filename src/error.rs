//! Error types for chain resolution, rebase and relabeling.

use std::io;
use std::path::PathBuf;

use crate::git_gateway::GitError;

/// Errors that end a run.
///
/// Every variant is fatal for the run; the starting position is still
/// restored before the process exits.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// A git invocation failed (nonzero exit outside the conflict protocol)
    #[error(transparent)]
    Git(#[from] GitError),

    /// A log line did not have the `hash|refs|title` shape
    #[error("malformed log line: {0:?}")]
    MalformedLogLine(String),

    /// The HEAD file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    ReadHead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The size-one range query for the target returned nothing
    #[error("Could not find the target commit {target} in the log. Are you sure it's correct?")]
    TargetNotFound { target: String },

    /// No commit in the chain carries the target's title
    #[error("Unable to identify the predecessor of {target} in the current chain. Please specify it explicitly and try again")]
    AncestorNotFound { target: String },

    /// The rewrite left nothing at HEAD to read back
    #[error("Could not read the rebased commit at HEAD")]
    MissingRebasedHead,

    /// The rebased chain does not line up with the original one
    #[error("Something went wrong during rebase: expected {expected} rebased commits, found {actual}")]
    ChainLengthMismatch { expected: usize, actual: usize },

    /// Reading the operator's acknowledgement failed
    #[error("failed to read operator input: {0}")]
    Input(#[source] io::Error),
}

impl ChainError {
    /// The failed git invocation behind this error, if that is what it is
    pub fn process_failure(&self) -> Option<&crate::git_gateway::ProcessFailure> {
        match self {
            ChainError::Git(GitError::Failed(failure)) => Some(failure),
            _ => None,
        }
    }
}
