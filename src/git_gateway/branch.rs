//! Branch pointer updates for GitGateway.

use super::{GitError, GitGateway};

impl GitGateway {
    /// Point a local ref at `hash`.
    ///
    /// Command: `git update-ref <path> <hash>`. A direct pointer rewrite, no
    /// checkout involved; under `--dry` it is only printed.
    pub fn update_ref(&self, path: &str, hash: &str) -> Result<(), GitError> {
        self.run_git_mutating(&["update-ref", path, hash])?;
        Ok(())
    }

    /// Read the commit a ref points at, if it exists
    #[cfg(test)]
    pub fn read_ref(&self, path: &str) -> Result<Option<String>, GitError> {
        match self.run_git(&["rev-parse", "--verify", "--quiet", path]) {
            Ok(hash) => Ok(Some(hash)),
            Err(GitError::Failed(failure)) if failure.code == Some(1) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
