//! Style constants and color helpers.
//!
//! Centralizes all styling decisions for consistent output.

use colored::{ColoredString, Colorize};

// ──────────────────────────────────────────────────────────────
// Markers
// ──────────────────────────────────────────────────────────────

/// Success marker: ✓
pub const MARK_SUCCESS: &str = "✓";
/// Error/failure marker: ✗
pub const MARK_ERROR: &str = "✗";
/// Warning marker: !
pub const MARK_WARNING: &str = "!";
/// Info marker: ℹ
pub const MARK_INFO: &str = "ℹ";
/// Progress/step marker: →
pub const MARK_STEP: &str = "→";

// ──────────────────────────────────────────────────────────────
// Color helper functions
// ──────────────────────────────────────────────────────────────

/// Format text as error (red)
pub fn error_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().red()
}

/// Format branch name (green)
pub fn branch_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().green()
}

/// Format remote branch name (red)
pub fn remote_branch_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().red()
}

/// Format a commit hash (yellow)
pub fn hash_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().yellow()
}

/// Format command text (cyan)
pub fn cmd_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().cyan()
}

/// Format count/number (yellow)
pub fn count_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().yellow()
}

/// Format subdued/secondary text (bright black/gray)
pub fn dim_style<S: AsRef<str>>(s: S) -> ColoredString {
    s.as_ref().bright_black()
}
