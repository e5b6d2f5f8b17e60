//! Throwaway repositories for unit tests.
//!
//! Everything here drives the real `git` CLI inside a temporary directory, so
//! tests never touch the current directory or process-wide state and can run in
//! parallel.
//!
//! # Example
//!
//! ```ignore
//! #[test]
//! fn test_something() -> anyhow::Result<()> {
//!     let dir = tempdir()?;
//!     init_test_repo(dir.path())?;
//!     commit_file(dir.path(), "a.txt", "v1", "base")?;
//!
//!     let gateway = test_gateway(dir.path(), false)?;
//!     assert_eq!(gateway.log("@", "main~1")?.len(), 1);
//!     Ok(())
//! }
//! ```

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

use crate::context::{ExecutionContext, Verbosity};
use crate::git_gateway::GitGateway;
use crate::logging::discard_logger;
use crate::ui::Printer;

/// Run git in `dir` and return its trimmed stdout, failing on a nonzero exit
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    git_with_env(dir, args, &[])
}

/// Like [`git`], with extra environment variables for the child only
pub fn git_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .envs(env.iter().copied())
        .output()
        .with_context(|| format!("failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Initialize a test repository with consistent "main" branch naming.
///
/// Creates a git repository with an empty initial commit on "main" and a local
/// identity, so commits and rebases work regardless of the machine's config.
pub fn init_test_repo(path: &Path) -> Result<()> {
    git(path, &["init", "--quiet"])?;
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    configure_identity(path)?;
    git(path, &["commit", "--quiet", "--allow-empty", "-m", "Initial commit"])?;
    Ok(())
}

/// Initialize a bare repository to act as a remote
pub fn init_bare_remote(path: &Path) -> Result<()> {
    git(path, &["init", "--quiet", "--bare"])?;
    Ok(())
}

fn configure_identity(path: &Path) -> Result<()> {
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "commit.gpgsign", "false"])?;
    Ok(())
}

/// Write `content` to `file`, commit it with `message` and return the new hash
pub fn commit_file(dir: &Path, file: &str, content: &str, message: &str) -> Result<String> {
    std::fs::write(dir.join(file), content)?;
    git(dir, &["add", file])?;
    git(dir, &["commit", "--quiet", "-m", message])?;
    git(dir, &["rev-parse", "HEAD"])
}

/// Gateway on `path` that prints nothing and logs nowhere
pub fn test_gateway(path: &Path, dry_run: bool) -> Result<GitGateway> {
    let ctx = ExecutionContext::new(Verbosity::Quiet, dry_run);
    Ok(GitGateway::from_path(path, ctx, Printer::quiet(), discard_logger())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_main_with_initial_commit() -> Result<()> {
        let dir = tempdir()?;
        init_test_repo(dir.path())?;

        assert_eq!(git(dir.path(), &["rev-parse", "--abbrev-ref", "HEAD"])?, "main");
        assert_eq!(git(dir.path(), &["log", "--format=%s"])?, "Initial commit");
        Ok(())
    }

    #[test]
    fn test_commit_file_returns_head() -> Result<()> {
        let dir = tempdir()?;
        init_test_repo(dir.path())?;
        let hash = commit_file(dir.path(), "a.txt", "a", "add a")?;

        assert_eq!(hash, git(dir.path(), &["rev-parse", "HEAD"])?);
        assert_eq!(hash.len(), 40);
        Ok(())
    }

    #[test]
    fn test_git_reports_failures() -> Result<()> {
        let dir = tempdir()?;
        init_test_repo(dir.path())?;

        let err = git(dir.path(), &["rev-parse", "--verify", "nope"]).unwrap_err();
        assert!(err.to_string().contains("git rev-parse --verify nope failed"));
        Ok(())
    }
}
