//! Rebase execution with the conflict wait protocol.
//!
//! The executor replays the chain onto the target with a single
//! `git rebase --onto`. When git stops on a conflict the executor moves to
//! [`RebaseState::AwaitingResolution`] and blocks on a [`ResolutionSignal`]
//! until the operator acknowledges that the rebase was finished by hand.
//!
//! ```text
//! Running ──conflict──▶ AwaitingResolution ──"c"──▶ Running ──▶ Finished
//!    └───────────────────────success────────────────────────────────┘
//! ```

use std::io;

use crate::chain::RebasePlan;
use crate::error::ChainError;
use crate::git_gateway::{Commit, GitGateway, RebaseOutcome};
use crate::ui::conflict::{display_conflict_message, display_continue_hint};
use crate::ui::{is_continue, print_cmd};

/// Where the executor is in the rebase protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebaseState {
    Running,
    /// Stopped on a conflict, waiting for the operator
    AwaitingResolution,
    Finished,
}

/// Source of the operator's answers while a conflict is being resolved.
///
/// The binary reads from the terminal; tests script the answers.
pub trait ResolutionSignal {
    /// Block until the next answer is available
    fn next_response(&mut self) -> io::Result<String>;
}

impl<F> ResolutionSignal for F
where
    F: FnMut() -> io::Result<String>,
{
    fn next_response(&mut self) -> io::Result<String> {
        self()
    }
}

/// Runs the rebase of a [`RebasePlan`]
pub struct RebaseExecutor<'a, S: ResolutionSignal> {
    gateway: &'a GitGateway,
    signal: S,
    state: RebaseState,
}

impl<'a, S: ResolutionSignal> RebaseExecutor<'a, S> {
    pub fn new(gateway: &'a GitGateway, signal: S) -> Self {
        Self {
            gateway,
            signal,
            state: RebaseState::Running,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RebaseState {
        self.state
    }

    /// Rebase the chain onto the target and return the new top commit.
    ///
    /// An empty chain needs no rewrite and yields `None`.
    pub fn rebase(&mut self, plan: &RebasePlan) -> Result<Option<Commit>, ChainError> {
        let Some(tip) = plan.chain.first() else {
            slog::debug!(self.gateway.logger, "empty chain, skipping rebase");
            self.transition(RebaseState::Finished);
            return Ok(None);
        };

        self.transition(RebaseState::Running);
        let outcome = self
            .gateway
            .rebase_onto_from(&plan.target.hash, &plan.ancestor.hash, &tip.hash)?;

        if let RebaseOutcome::Conflicts(failure) = outcome {
            slog::debug!(self.gateway.logger, "rebase stopped on conflicts";
                "command" => &failure.command, "stderr" => &failure.stderr);
            self.await_resolution(plan)?;
            self.transition(RebaseState::Running);

            if self.gateway.rebase_in_progress() {
                slog::warn!(self.gateway.logger, "rebase still in progress after acknowledgement");
            }
        }

        let new_top = self
            .gateway
            .log_one("@", "@~1")?
            .ok_or(ChainError::MissingRebasedHead)?;

        self.transition(RebaseState::Finished);
        Ok(Some(new_top))
    }

    fn await_resolution(&mut self, plan: &RebasePlan) -> Result<(), ChainError> {
        self.transition(RebaseState::AwaitingResolution);

        let printer = self.gateway.printer();
        let status = self.gateway.status()?;
        display_conflict_message(printer, plan, &status);

        loop {
            let response = self.signal.next_response().map_err(ChainError::Input)?;
            if is_continue(&response) {
                printer.step(&format!("Continuing after {}", print_cmd("git rebase --continue")));
                return Ok(());
            }
            display_continue_hint(printer);
        }
    }

    fn transition(&mut self, next: RebaseState) {
        if self.state != next {
            slog::trace!(self.gateway.logger, "rebase state";
                "from" => ?self.state, "to" => ?next);
            self.state = next;
        }
    }
}
