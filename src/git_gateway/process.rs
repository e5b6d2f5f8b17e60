//! Synchronous git invocation.
//!
//! Every call is `git <subcommand> <args...>` run in the gateway's working
//! directory with stdout and stderr captured in full. A nonzero exit is
//! returned as a [`ProcessFailure`] carrying the code and the captured output,
//! so callers can match on specific codes instead of catching errors
//! generically.

use std::process::Command;

use super::GitGateway;

/// Exit status git uses when a rewrite stopped for manual conflict resolution
pub const CONFLICT_EXIT_CODE: i32 = 1;

/// A git invocation that exited with a nonzero status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error executing command: {command} ({})", exit_label(.code))]
pub struct ProcessFailure {
    /// The full command line, e.g. `git rebase --onto abc def 123`
    pub command: String,
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessFailure {
    /// Check whether the failure is git stopping for conflict resolution
    pub fn is_conflict(&self) -> bool {
        self.code == Some(CONFLICT_EXIT_CODE)
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "killed by signal".to_string(),
    }
}

/// Errors from running git
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// git could not be started at all
    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Failed(#[from] ProcessFailure),
}

/// Render the command line the way it is shown to the user
pub fn format_command(args: &[&str]) -> String {
    let mut command = String::from("git");
    for arg in args {
        command.push(' ');
        command.push_str(arg);
    }
    command
}

impl GitGateway {
    /// Run a git command and return its trimmed stdout.
    ///
    /// Read-only queries and the rewrite itself go through here; they run
    /// even under `--dry`.
    pub(crate) fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        let command = format_command(args);
        slog::debug!(self.logger, "running git"; "command" => command.as_str());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        slog::trace!(self.logger, "git exited";
            "command" => command.as_str(),
            "status" => ?output.status.code(),
            "stdout" => stdout.as_str(),
            "stderr" => stderr.as_str()
        );

        if !output.status.success() {
            return Err(ProcessFailure {
                command,
                code: output.status.code(),
                stdout,
                stderr,
            }
            .into());
        }

        Ok(stdout.trim().to_string())
    }

    /// Run a git command that changes refs, local or remote.
    ///
    /// Under `--dry` the command is only printed and `None` is returned.
    pub(crate) fn run_git_mutating(&self, args: &[&str]) -> Result<Option<String>, GitError> {
        if self.ctx.is_dry_run() {
            let command = format_command(args);
            slog::debug!(self.logger, "skipping git"; "command" => command.as_str(), "dry" => true);
            self.printer.dry_run_cmd(&command);
            return Ok(None);
        }

        self.run_git(args).map(Some)
    }
}
