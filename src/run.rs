//! One invocation: resolve the chain, rebase it, relabel its refs.
//!
//! The starting position is captured before any other git call and restored
//! when the run ends, on success and on every error path.

use crate::chain::{self, Resolution};
use crate::error::ChainError;
use crate::git_gateway::{GitGateway, HeadGuard};
use crate::rebase::{RebaseExecutor, ResolutionSignal};
use crate::relabel::{relabel, RelabelOptions, RelabelReport};
use crate::ui::{print_branch, print_count, print_hash};

/// What the operator asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Top of the chain (`-@/--head`)
    pub head: String,
    /// Commit to rebase onto
    pub target: String,
    /// Remote to force-push moved refs to
    pub push: Option<String>,
    /// Push local-only branches too
    pub force: bool,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The head already contains the target
    AlreadyBased,
    /// The head is the ancestor itself; there was nothing to replay
    NothingToRebase,
    Relabeled(RelabelReport),
}

/// Run the whole chain rebase against `gateway`
pub fn run<S: ResolutionSignal>(gateway: &GitGateway, options: &RunOptions, signal: S) -> Result<Outcome, ChainError> {
    let guard = HeadGuard::capture(gateway)?;
    let result = rebase_chain(gateway, options, signal);

    // A failed restore is only reported when the run itself succeeded
    let restored = guard.restore();
    let outcome = result?;
    restored?;

    Ok(outcome)
}

fn rebase_chain<S: ResolutionSignal>(
    gateway: &GitGateway,
    options: &RunOptions,
    signal: S,
) -> Result<Outcome, ChainError> {
    let printer = gateway.printer();
    if gateway.context().is_dry_run() {
        printer.warning("Dry run: the chain is rebased, but no branch is moved and nothing is pushed");
    }

    let plan = match chain::resolve(gateway, &options.head, &options.target)? {
        Resolution::AlreadyBased => {
            printer.info("Head is already based on target. Nothing to be done!");
            return Ok(Outcome::AlreadyBased);
        }
        Resolution::Rebase(plan) => plan,
    };

    printer.step(&format!(
        "Rebasing {} {} onto {}",
        print_count(plan.chain.len()),
        if plan.chain.len() == 1 { "commit" } else { "commits" },
        print_branch(&options.target)
    ));
    slog::debug!(gateway.logger, "resolved rebase plan";
        "chain" => plan.chain.len(), "ancestor" => &plan.ancestor.hash, "target" => &plan.target.hash);

    let mut executor = RebaseExecutor::new(gateway, signal);
    let Some(new_top) = executor.rebase(&plan)? else {
        printer.info("Head is the predecessor of target. Nothing to rebase.");
        return Ok(Outcome::NothingToRebase);
    };

    let relabel_options = RelabelOptions {
        push: options.push.clone(),
        force: options.force,
    };
    let report = relabel(gateway, &plan.chain, &plan.target, &new_top, &relabel_options)?;

    if report.is_empty() {
        printer.success(&format!(
            "Rebased chain onto {}; no branches to move",
            print_hash(plan.target.short_hash())
        ));
        return Ok(Outcome::Relabeled(report));
    }

    let mut summary = format!(
        "Rebased chain onto {}: moved {} {}",
        print_hash(plan.target.short_hash()),
        print_count(report.local.len()),
        if report.local.len() == 1 { "branch" } else { "branches" }
    );
    if !report.remote.is_empty() {
        summary.push_str(&format!(", pushed {}", print_count(report.remote.len())));
    }
    printer.success(&summary);

    Ok(Outcome::Relabeled(report))
}
