//! Diagnostic logging.
//!
//! Git invocations are traced through a `slog` logger on stderr. The level
//! follows the run's verbosity: commands show up at `-v`, their exit status and
//! captured output at `-vv`.

use slog::{Drain, Level, Logger};

use crate::context::Verbosity;

/// Map a verbosity to the most detailed slog level it lets through
pub fn level_for(verbosity: Verbosity) -> Level {
    match verbosity {
        Verbosity::Quiet | Verbosity::Normal => Level::Warning,
        Verbosity::Verbose => Level::Debug,
        Verbosity::Trace => Level::Trace,
    }
}

/// Create a slog logger that outputs to the terminal's stderr
pub fn create_logger(verbosity: Verbosity) -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = std::sync::Mutex::new(drain).fuse();
    let drain = slog::LevelFilter::new(drain, level_for(verbosity)).fuse();
    Logger::root(drain, slog::o!("app" => "git-rebase-chain"))
}

/// Logger that drops everything (tests, embedding)
#[cfg(test)]
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}
