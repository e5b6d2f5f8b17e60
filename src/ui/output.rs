//! Output functions for consistent message formatting.
//!
//! Every user-facing line goes through a [`Printer`], which carries the run's
//! verbosity. Quiet runs print nothing except fatal errors.

use colored::Colorize;

use super::style::*;
use crate::context::Verbosity;

/// Verbosity-aware terminal printer
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    verbosity: Verbosity,
}

impl Printer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Printer that never writes anything but errors
    #[cfg(test)]
    pub fn quiet() -> Self {
        Self::new(Verbosity::Quiet)
    }

    fn enabled(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    // ──────────────────────────────────────────────────────────────
    // Primary output functions
    // ──────────────────────────────────────────────────────────────

    /// Print success message: "✓ {message}" in green
    pub fn success(&self, message: &str) {
        if self.enabled() {
            println!("{} {}", MARK_SUCCESS.green(), message);
        }
    }

    /// Print error message to stderr: "✗ {message}" in red
    ///
    /// Errors are printed even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", MARK_ERROR.red(), message);
    }

    /// Print warning message: "! {message}" in yellow
    pub fn warning(&self, message: &str) {
        if self.enabled() {
            println!("{} {}", MARK_WARNING.yellow().bold(), message);
        }
    }

    /// Print info message: "ℹ {message}" in blue
    pub fn info(&self, message: &str) {
        if self.enabled() {
            println!("{} {}", MARK_INFO.blue(), message);
        }
    }

    /// Print step/progress message: "→ {message}" in blue
    pub fn step(&self, message: &str) {
        if self.enabled() {
            println!("{} {}", MARK_STEP.blue(), message);
        }
    }

    /// Print a plain line
    pub fn line(&self, message: &str) {
        if self.enabled() {
            println!("{}", message);
        }
    }

    /// Print a block of captured command output in red (e.g. `git status`)
    pub fn error_block(&self, text: &str) {
        if self.enabled() {
            println!("{}", error_style(text));
        }
    }

    /// Print a command that was skipped because of `--dry`
    pub fn dry_run_cmd(&self, command: &str) {
        if self.enabled() {
            println!("  {} {}", "[dry-run]".dimmed(), dim_style(command));
        }
    }

    pub fn blank(&self) {
        if self.enabled() {
            println!();
        }
    }
}

// ──────────────────────────────────────────────────────────────
// Formatted output helpers
// ──────────────────────────────────────────────────────────────

/// Print a branch name in the standard style
pub fn print_branch(name: &str) -> String {
    format!("{}", branch_style(name))
}

/// Print a remote branch name in the standard style
pub fn print_remote_branch(name: &str) -> String {
    format!("{}", remote_branch_style(name))
}

/// Print a commit hash in the standard style
pub fn print_hash(hash: &str) -> String {
    format!("{}", hash_style(hash))
}

/// Print a command in the standard style
pub fn print_cmd(cmd: &str) -> String {
    format!("{}", cmd_style(cmd))
}

/// Print a count in the standard style
pub fn print_count(n: usize) -> String {
    format!("{}", count_style(n.to_string()))
}
