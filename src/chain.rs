//! Chain resolution.
//!
//! Works out which commits sit between the head and its merge-base with the
//! target, and which of them is the old version of the target commit the
//! chain is currently based on. Rebasing changes hashes, so that old version
//! is found by title: the first commit, walking from the head down, whose
//! title equals the target's. Two unrelated commits sharing a title can fool
//! this walk.

use crate::error::ChainError;
use crate::git_gateway::{Commit, GitGateway};

/// Everything needed to rebase a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebasePlan {
    /// Commits to replay, newest first, ancestor excluded
    pub chain: Vec<Commit>,
    /// Old version of the target the chain currently sits on
    pub ancestor: Commit,
    /// The commit to rebase onto
    pub target: Commit,
}

/// Result of resolving a head against a target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The head already contains the target; nothing to do
    AlreadyBased,
    Rebase(RebasePlan),
}

/// Resolve the chain to rebase from `head_name` onto `target_name`
pub fn resolve(gateway: &GitGateway, head_name: &str, target_name: &str) -> Result<Resolution, ChainError> {
    let head = gateway.resolve_commit(head_name)?;
    let target = gateway.resolve_commit(target_name)?;
    let merge_base = gateway.merge_base(&head, &target)?;

    slog::debug!(gateway.logger, "resolved chain endpoints";
        "head" => head.as_str(), "target" => target.as_str(), "merge_base" => merge_base.as_str());

    if merge_base == target {
        return Ok(Resolution::AlreadyBased);
    }

    let candidates = gateway.log(&head, &merge_base)?;

    let target_commit = gateway
        .log_one(&target, &format!("{}~1", target))?
        .ok_or_else(|| ChainError::TargetNotFound {
            target: target_name.to_string(),
        })?;

    let (chain, ancestor) =
        split_at_ancestor(candidates, &target_commit.title).ok_or_else(|| ChainError::AncestorNotFound {
            target: target_name.to_string(),
        })?;

    Ok(Resolution::Rebase(RebasePlan {
        chain,
        ancestor,
        target: target_commit,
    }))
}

/// Split candidates (newest first) at the first commit titled `title`.
///
/// Returns the commits before it and the match itself, or `None` when no
/// candidate carries the title.
pub fn split_at_ancestor(candidates: Vec<Commit>, title: &str) -> Option<(Vec<Commit>, Commit)> {
    let mut chain = Vec::new();
    for commit in candidates {
        if commit.title == title {
            return Some((chain, commit));
        }
        chain.push(commit);
    }
    None
}
