//! Ref relabeling after a chain rebase.
//!
//! The rebase leaves every branch on its old commit. The rebased chain is read
//! back and paired position by position with the original one, and each ref is
//! moved from `original[i]` to `new[i]`. If the two chains differ in length the
//! pairing is meaningless, so nothing is moved.

use crate::error::ChainError;
use crate::git_gateway::{Commit, GitGateway};
use crate::ui::{print_branch, print_hash, print_remote_branch};

/// How ref moves are propagated to a remote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelabelOptions {
    /// Remote to force-push to, if any
    pub push: Option<String>,
    /// Also push local-only branches to `push`
    pub force: bool,
}

/// A single ref move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefUpdate {
    pub name: String,
    pub hash: String,
}

/// Every ref move performed (or printed, under `--dry`) by a relabel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelabelReport {
    pub local: Vec<RefUpdate>,
    pub remote: Vec<RefUpdate>,
}

impl RelabelReport {
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }
}

/// Move the refs of `original` onto the rebased chain ending at `new_top`.
///
/// `original` is newest first, exactly as resolved before the rebase. On a
/// length mismatch the working tree is checked out at the old top and
/// [`ChainError::ChainLengthMismatch`] is returned without touching any ref.
pub fn relabel(
    gateway: &GitGateway,
    original: &[Commit],
    target: &Commit,
    new_top: &Commit,
    options: &RelabelOptions,
) -> Result<RelabelReport, ChainError> {
    let printer = gateway.printer();
    let rebased = gateway.log(&new_top.hash, &target.hash)?;

    if rebased.len() != original.len() {
        printer.error("Something went wrong during rebase. Returning to the original state");
        if let Some(old_top) = original.first() {
            gateway.checkout(&old_top.hash)?;
        }
        return Err(ChainError::ChainLengthMismatch {
            expected: original.len(),
            actual: rebased.len(),
        });
    }

    let mut report = RelabelReport::default();

    for (old, new) in original.iter().zip(&rebased) {
        slog::debug!(gateway.logger, "relabeling commit";
            "title" => &old.title, "from" => &old.hash, "to" => &new.hash);

        let mut pushed = false;

        if let Some(remote) = options.push.as_deref() {
            for r in old.refs.iter().filter(|r| r.is_on_remote(remote)) {
                printer.step(&format!(
                    "Updating remote {} to {}",
                    print_remote_branch(r.display_name()),
                    print_hash(new.short_hash())
                ));
                gateway.force_push(remote, &new.hash, &r.name)?;
                report.remote.push(RefUpdate {
                    name: r.path.clone(),
                    hash: new.hash.clone(),
                });
                pushed = true;
            }
        }

        for r in old.local_refs() {
            if let Some(remote) = options.push.as_deref() {
                if options.force && !pushed {
                    printer.step(&format!(
                        "Updating remote {} to {}",
                        print_remote_branch(&format!("{}/{}", remote, r.name)),
                        print_hash(new.short_hash())
                    ));
                    gateway.force_push(remote, &new.hash, &r.name)?;
                    report.remote.push(RefUpdate {
                        name: format!("{}/{}", remote, r.name),
                        hash: new.hash.clone(),
                    });
                }
            }

            printer.step(&format!(
                "Updating {} to {}",
                print_branch(&r.name),
                print_hash(new.short_hash())
            ));
            gateway.update_ref(&r.path, &new.hash)?;
            report.local.push(RefUpdate {
                name: r.name.clone(),
                hash: new.hash.clone(),
            });
        }
    }

    Ok(report)
}
