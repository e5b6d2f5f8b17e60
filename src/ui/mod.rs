//! Terminal UI: styling, verbosity-aware output, the conflict report and
//! the operator prompt.
//!
//! All output gracefully degrades when not running in a TTY.

pub mod conflict;
mod output;
mod prompt;
mod style;

pub use output::*;
pub use prompt::*;
