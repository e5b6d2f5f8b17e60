//! Commit resolution and repository status for GitGateway.

use super::{GitError, GitGateway};

impl GitGateway {
    /// Resolve a revision (branch, `@`, hash, `main~2`) to a full commit hash
    pub fn resolve_commit(&self, rev: &str) -> Result<String, GitError> {
        self.run_git(&["rev-parse", "--verify", rev])
    }

    /// Get the merge base of two commits
    pub fn merge_base(&self, a: &str, b: &str) -> Result<String, GitError> {
        self.run_git(&["merge-base", a, b])
    }

    /// Human-readable `git status` output
    pub fn status(&self) -> Result<String, GitError> {
        self.run_git(&["status"])
    }
}
