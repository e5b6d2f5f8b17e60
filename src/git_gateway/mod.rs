//! Git operations gateway.
//!
//! All interaction with the repository goes through [`GitGateway`], which runs
//! the `git` CLI as an external process. The engine does the real work
//! (rewriting commits, merging, storing refs); this module only issues
//! commands and parses what comes back.
//!
//! # Operations
//!
//! - **Process**: run git, capture output, honor `--dry` for mutations
//! - **Refs**: classify decoration tokens into local and remote branches
//! - **Log**: read a commit range into [`Commit`] records
//! - **Rebase**: `rebase --onto`, with conflict stops as a distinct outcome
//! - **Branch/remote**: move local refs, force-push remote branches
//! - **Head**: capture and restore the starting position
//!
//! # Example
//!
//! ```ignore
//! let gateway = GitGateway::from_path(&cwd, ctx, printer, logger)?;
//! let chain = gateway.log("@", "main")?;
//! ```

mod branch;
mod commit;
mod head;
mod log;
mod process;
mod rebase;
mod refs;
mod remote;


use slog::Logger;
use std::path::{Path, PathBuf};

use crate::context::ExecutionContext;
use crate::ui::Printer;

pub use self::head::HeadGuard;
pub use self::log::Commit;
pub use self::process::{GitError, ProcessFailure};
pub use self::rebase::RebaseOutcome;

#[cfg(test)]
pub use self::head::StartPosition;
#[cfg(test)]
pub use self::refs::Ref;

/// Unified interface to git operations.
///
/// The gateway carries the run's [`ExecutionContext`] so that every mutating
/// command can honor `--dry`, the [`Printer`] used to report skipped commands,
/// and the logger every invocation is traced to.
pub struct GitGateway {
    /// Directory git commands run in
    pub(crate) workdir: PathBuf,
    /// Absolute path to the git directory (per worktree)
    pub(crate) git_dir: PathBuf,
    ctx: ExecutionContext,
    printer: Printer,
    pub(crate) logger: Logger,
}

impl GitGateway {
    /// Create a GitGateway for the repository containing `path`
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        ctx: ExecutionContext,
        printer: Printer,
        logger: Logger,
    ) -> Result<Self, GitError> {
        let mut gateway = Self {
            workdir: path.as_ref().to_path_buf(),
            git_dir: PathBuf::new(),
            ctx,
            printer,
            logger,
        };

        gateway.git_dir = PathBuf::from(gateway.run_git(&["rev-parse", "--absolute-git-dir"])?);
        slog::debug!(gateway.logger, "opened repository";
            "workdir" => %gateway.workdir.display(), "git_dir" => %gateway.git_dir.display());

        Ok(gateway)
    }

    /// Get the git directory path
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    pub fn context(&self) -> &ExecutionContext {
        &self.ctx
    }

    pub fn printer(&self) -> &Printer {
        &self.printer
    }
}
