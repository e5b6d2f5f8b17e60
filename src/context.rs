//! Execution context for a single run.
//!
//! Holds the output verbosity and the `--dry` flag. The context is a plain
//! value handed to every component that needs it, so nothing reads ambient
//! global state.

use anyhow::{bail, Result};

/// How much the tool prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// `-q`: nothing but fatal errors
    Quiet,
    /// Default: progress messages and ref updates
    Normal,
    /// `-v`: also every git command being executed
    Verbose,
    /// `-vv` and up: also exit status and captured output of each command
    Trace,
}

impl Verbosity {
    /// Resolve the verbosity from the raw `-v` count and `-q` flag.
    ///
    /// Quiet combined with any `-v` is rejected before any work is done.
    pub fn from_flags(verbose: u8, quiet: bool) -> Result<Self> {
        if quiet && verbose > 0 {
            bail!("Cannot be both quiet and verbose");
        }
        if quiet {
            return Ok(Verbosity::Quiet);
        }

        Ok(match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        })
    }
}

/// Flags shared by every component for the current invocation
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext {
    pub verbosity: Verbosity,
    /// Log mutating ref operations instead of executing them
    pub dry_run: bool,
}

impl ExecutionContext {
    pub fn new(verbosity: Verbosity, dry_run: bool) -> Self {
        Self { verbosity, dry_run }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(Verbosity::Normal, false)
    }
}
