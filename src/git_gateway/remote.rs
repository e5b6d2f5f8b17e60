//! Remote operations for GitGateway.

use super::refs::LOCAL_BRANCH_PREFIX;
use super::{GitError, GitGateway};

impl GitGateway {
    /// Force-update `branch` on `remote` to point at `hash`.
    ///
    /// Command: `git push -f <remote> <hash>:refs/heads/<branch>`. The full
    /// destination refname lets a bare hash create a branch the remote does
    /// not have yet. This rewrites the remote branch's history; under `--dry`
    /// it is only printed.
    pub fn force_push(&self, remote: &str, hash: &str, branch: &str) -> Result<(), GitError> {
        let refspec = format!("{}:{}{}", hash, LOCAL_BRANCH_PREFIX, branch);
        self.run_git_mutating(&["push", "-f", remote, &refspec])?;
        Ok(())
    }
}
