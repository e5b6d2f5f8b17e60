//! Rebase operations for GitGateway.

use super::process::ProcessFailure;
use super::{GitError, GitGateway};

/// Outcome of a rebase operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebaseOutcome {
    /// Rebase completed successfully
    Success,
    /// Rebase paused due to conflicts requiring user resolution
    Conflicts(ProcessFailure),
}

impl GitGateway {
    /// Replay the commits after `old_base` up to and including `tip` onto `new_base`.
    ///
    /// Command: `git rebase --onto <new_base> <old_base> <tip>`
    ///
    /// `tip` is a commit hash, so the rebase runs on a detached HEAD and no
    /// branch moves. A stop for conflict resolution comes back as
    /// `Ok(Conflicts)`; every other failure is an error.
    pub fn rebase_onto_from(&self, new_base: &str, old_base: &str, tip: &str) -> Result<RebaseOutcome, GitError> {
        match self.run_git(&["rebase", "--onto", new_base, old_base, tip]) {
            Ok(_) => Ok(RebaseOutcome::Success),
            Err(GitError::Failed(failure)) if failure.is_conflict() => Ok(RebaseOutcome::Conflicts(failure)),
            Err(e) => Err(e),
        }
    }

    /// Check if there's a rebase in progress
    pub fn rebase_in_progress(&self) -> bool {
        // Check for rebase-merge or rebase-apply directories
        let rebase_merge = self.git_dir.join("rebase-merge");
        let rebase_apply = self.git_dir.join("rebase-apply");

        rebase_merge.exists() || rebase_apply.exists()
    }
}
