//! Commit history queries.
//!
//! `git log base..head` is read with a fixed three-field line format,
//! `hash|refs|title`, and parsed into [`Commit`] values, newest first.

use super::refs::{parse_ref, Ref};
use super::GitGateway;
use crate::error::ChainError;

/// `%H` full hash, `%d` ref decorations, `%f` sanitized subject
pub const LOG_FORMAT: &str = "--format=format:%H|%d|%f";

/// Pins `%d` to short ref names whatever `log.decorate` says
pub const LOG_DECORATE: &str = "--decorate=short";

/// Field separator of [`LOG_FORMAT`]
const FIELD_SEPARATOR: char = '|';

/// A commit as seen by the log query.
///
/// `hash` changes whenever the commit is rewritten. `title` is git's sanitized
/// subject line and is the only identity that survives a rebase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub title: String,
    pub refs: Vec<Ref>,
}

impl Commit {
    /// Get short form (first 7 chars)
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }

    /// Local branches pointing at this commit
    pub fn local_refs(&self) -> impl Iterator<Item = &Ref> {
        self.refs.iter().filter(|r| r.is_local())
    }
}

/// Parse one line of [`LOG_FORMAT`] output.
///
/// The refs field is either empty or a parenthesized, comma separated list.
/// Anything else leaves the commit without refs.
pub fn parse_log_line(line: &str, remotes: &[String]) -> Result<Commit, ChainError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    let [hash, refs, title] = fields.as_slice() else {
        return Err(ChainError::MalformedLogLine(line.to_string()));
    };

    let refs = refs.trim();
    let refs = match refs.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(list) => list.split(", ").filter_map(|token| parse_ref(token, remotes)).collect(),
        None => Vec::new(),
    };

    Ok(Commit {
        hash: hash.to_string(),
        title: title.to_string(),
        refs,
    })
}

impl GitGateway {
    /// List the names of the configured remotes
    pub fn remotes(&self) -> Result<Vec<String>, ChainError> {
        let output = self.run_git(&["remote"])?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect())
    }

    /// Read the commits in `base..head`, newest first
    pub fn log(&self, head: &str, base: &str) -> Result<Vec<Commit>, ChainError> {
        let range = format!("{}..{}", base, head);
        let output = self.run_git(&["log", &range, LOG_DECORATE, LOG_FORMAT])?;
        let remotes = self.remotes()?;

        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| parse_log_line(line, &remotes))
            .collect()
    }

    /// Read the single newest commit of `base..head`, if any
    pub fn log_one(&self, head: &str, base: &str) -> Result<Option<Commit>, ChainError> {
        Ok(self.log(head, base)?.into_iter().next())
    }
}
