//! Conflict message formatting while a chain rebase waits on the operator

use colored::Colorize;

use super::output::{print_branch, print_cmd, print_hash, Printer};
use super::prompt::CONTINUE_PROMPT;
use crate::chain::RebasePlan;
use crate::git_gateway::Commit;

/// Format the chain being rebased, newest first, with the branches riding on it
///
/// Example output:
/// ```text
/// Chain (2 commits onto 1a2b3c4):
///   5d6e7f8 fix [branch-b3]
///   9a0b1c2 feat [branch-b2]
/// ```
pub fn format_chain(plan: &RebasePlan) -> String {
    let mut lines = vec![format!(
        "Chain ({} {} onto {}):",
        plan.chain.len(),
        if plan.chain.len() == 1 { "commit" } else { "commits" },
        print_hash(plan.target.short_hash())
    )];

    for commit in &plan.chain {
        lines.push(format_commit_line(commit));
    }

    lines.join("\n")
}

fn format_commit_line(commit: &Commit) -> String {
    let names: Vec<String> = commit.refs.iter().map(|r| print_branch(r.display_name())).collect();
    if names.is_empty() {
        format!("  {} {}", commit.short_hash().dimmed(), commit.title)
    } else {
        format!("  {} {} [{}]", commit.short_hash().dimmed(), commit.title, names.join(", "))
    }
}

/// Display the conflict message with repository status and resolution steps
pub fn display_conflict_message(printer: &Printer, plan: &RebasePlan, status: &str) {
    printer.blank();
    printer.warning("Unable to complete rebase! Please manually complete the rebase.");
    printer.blank();
    printer.line(&format_chain(plan));
    printer.blank();
    printer.error_block(status);
    printer.blank();
    printer.line(&format!(
        "When you're done, run {}, then type {} to continue.",
        print_cmd("git rebase --continue"),
        CONTINUE_PROMPT.green()
    ));
    printer.line(&format!("You can safely {} this process", "background".yellow()));
}

/// Reminder printed after an answer that is not an acknowledgement
pub fn display_continue_hint(printer: &Printer) {
    printer.line(&format!("Please type {} to continue", CONTINUE_PROMPT.green()));
}
