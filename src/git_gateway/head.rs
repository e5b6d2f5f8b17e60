//! Starting position capture and restoration.
//!
//! The rewrite leaves the working tree on a detached commit. The position the
//! run started from is read up front and checked out again when the run ends,
//! whatever the outcome.

use std::fs;
use std::path::PathBuf;

use super::refs::parse_ref;
use super::{GitError, GitGateway};
use crate::error::ChainError;

/// Where HEAD pointed when the run started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPosition {
    /// On a local branch
    Branch(String),
    /// Detached at a commit
    Detached(String),
}

impl StartPosition {
    /// Parse the contents of a HEAD file
    pub fn parse(contents: &str) -> Self {
        let contents = contents.trim();
        if let Some(target) = contents.strip_prefix("ref: ") {
            if let Some(branch) = parse_ref(target, &[]) {
                return StartPosition::Branch(branch.name);
            }
        }
        StartPosition::Detached(contents.to_string())
    }

    /// Revision to hand to `git checkout`
    pub fn rev(&self) -> &str {
        match self {
            StartPosition::Branch(name) => name,
            StartPosition::Detached(hash) => hash,
        }
    }
}

impl GitGateway {
    /// Read the current position from `<git-dir>/HEAD`
    pub fn current_position(&self) -> Result<StartPosition, ChainError> {
        let path: PathBuf = self.git_dir.join("HEAD");
        let contents = fs::read_to_string(&path).map_err(|source| ChainError::ReadHead { path, source })?;
        Ok(StartPosition::parse(&contents))
    }

    /// Check out a branch or commit
    pub fn checkout(&self, rev: &str) -> Result<(), GitError> {
        self.run_git(&["checkout", rev])?;
        Ok(())
    }
}

/// Restores the starting position when the run ends.
///
/// Call [`HeadGuard::restore`] on the normal path to observe checkout errors.
/// If the guard is dropped without it (early return, panic), the checkout is
/// still attempted and failures are logged.
pub struct HeadGuard<'a> {
    gateway: &'a GitGateway,
    start: StartPosition,
    restored: bool,
}

impl<'a> HeadGuard<'a> {
    pub fn capture(gateway: &'a GitGateway) -> Result<Self, ChainError> {
        let start = gateway.current_position()?;
        slog::debug!(gateway.logger, "captured starting position"; "rev" => start.rev());
        Ok(Self {
            gateway,
            start,
            restored: false,
        })
    }

    /// Check out the starting position again
    pub fn restore(mut self) -> Result<(), GitError> {
        self.restored = true;
        self.gateway.checkout(self.start.rev())
    }
}

impl Drop for HeadGuard<'_> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = self.gateway.checkout(self.start.rev()) {
            slog::warn!(self.gateway.logger, "failed to restore starting position";
                "rev" => self.start.rev(), "error" => %e);
        }
    }
}
