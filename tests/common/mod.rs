use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Helper to get the path to the git-rebase-chain binary
pub fn chain_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_git-rebase-chain"))
}

/// Helper to initialize a test git repository on "main" with an initial commit
pub fn init_test_repo(dir: &Path) -> Result<()> {
    git(dir, &["init", "--quiet"])?;
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"])?;

    // Configure git
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])?;
    git(dir, &["config", "commit.gpgsign", "false"])?;

    // Prevent editors from blocking tests
    git(dir, &["config", "core.editor", "true"])?;

    fs::write(dir.join("README.md"), "# Test Repo")?;
    git(dir, &["add", "."])?;
    git(dir, &["commit", "--quiet", "-m", "Initial commit"])?;

    Ok(())
}

/// Helper to initialize a bare repository used as a remote
#[allow(dead_code)]
pub fn init_bare_remote(dir: &Path) -> Result<()> {
    git(dir, &["init", "--quiet", "--bare"])?;
    Ok(())
}

/// Build the chain used throughout the tests:
///
/// ```text
/// main:       Initial ── A "base"
/// branch-b2:                └── B2 "feat"
/// branch-b3:                      └── B3 "fix"   (checked out)
/// upstream:   Initial ── T "base"
/// ```
///
/// With `conflicting`, B2 edits the same file T rewrites.
#[allow(dead_code)]
pub fn create_stacked_chain(dir: &Path, conflicting: bool) -> Result<()> {
    commit_file(dir, "a.txt", "v1\n", "base")?;
    git(dir, &["checkout", "--quiet", "-b", "branch-b2"])?;
    if conflicting {
        commit_file(dir, "a.txt", "feature\n", "feat")?;
    } else {
        commit_file(dir, "b2.txt", "b2\n", "feat")?;
    }
    git(dir, &["checkout", "--quiet", "-b", "branch-b3"])?;
    commit_file(dir, "b3.txt", "b3\n", "fix")?;

    git(dir, &["checkout", "--quiet", "-b", "upstream", "main~1"])?;
    commit_file(dir, "a.txt", "v2\n", "base")?;
    git(dir, &["checkout", "--quiet", "branch-b3"])?;
    Ok(())
}

/// Write a file and commit it, returning the new commit hash
pub fn commit_file(dir: &Path, file: &str, content: &str, message: &str) -> Result<String> {
    fs::write(dir.join(file), content)?;
    git(dir, &["add", file])?;
    git(dir, &["commit", "--quiet", "-m", message])?;
    get_commit_hash(dir, "HEAD")
}

/// Run the binary in `dir` with no input
pub fn run_chain(dir: &Path, config_home: &Path, args: &[&str]) -> Result<Output> {
    run_chain_with_input(dir, config_home, args, "")
}

/// Run the binary in `dir`, feeding `input` on stdin.
///
/// The user config directory is redirected to `config_home` and colors are
/// disabled so output can be matched as plain text.
pub fn run_chain_with_input(dir: &Path, config_home: &Path, args: &[&str], input: &str) -> Result<Output> {
    let mut child = Command::new(chain_binary())
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Dropping stdin closes it, so a waiting prompt sees EOF
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(input.as_bytes()) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e.into());
            }
        }
    }

    Ok(child.wait_with_output()?)
}

/// Helper to run git commands directly and return trimmed stdout
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Helper to get current git branch
#[allow(dead_code)]
pub fn get_current_branch(dir: &Path) -> Result<String> {
    git(dir, &["branch", "--show-current"])
}

/// Helper to get commit hash for a revision
pub fn get_commit_hash(dir: &Path, rev: &str) -> Result<String> {
    git(dir, &["rev-parse", rev])
}

/// Helper to get a commit's subject line
#[allow(dead_code)]
pub fn get_commit_subject(dir: &Path, rev: &str) -> Result<String> {
    git(dir, &["log", "-1", "--format=%s", rev])
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
