use clap::{ArgAction, Parser};

mod chain;
mod config;
mod context;
mod error;
mod git_gateway;
mod logging;
mod rebase;
mod relabel;
mod run;
#[cfg(test)]
mod test_context;
pub mod ui;

use config::Config;
use context::{ExecutionContext, Verbosity};
use error::ChainError;
use git_gateway::{GitError, GitGateway, ProcessFailure};
use run::RunOptions;
use ui::{Printer, TerminalSignal};

/// Name in help output and interrupt hints; git finds the binary as `git rebase-chain`
const PROGRAM_NAME: &str = "git-rebase-chain";

#[derive(Parser)]
#[command(
    name = PROGRAM_NAME,
    about = "Rebase a chain of stacked branches onto a new target and move every branch along",
    long_about = None,
    version,
    after_help = "\
Examples:
  git rebase-chain main              Rebase the chain under HEAD onto main
  git rebase-chain -@ top main       Rebase the chain under 'top' instead
  git rebase-chain --dry main        Rebase, but only print the ref moves
  git rebase-chain main -p           Also force-push branches tracked on the default remote
  git rebase-chain main -p fork -f   Push every moved branch to 'fork'"
)]
pub struct Cli {
    /// Commit to rebase the chain onto
    target: String,

    /// Top of the chain to rebase
    #[arg(short = '@', long, default_value = "@", value_name = "REV")]
    head: String,

    /// Rebase, but only print ref updates and pushes instead of running them
    #[arg(short = 'd', long)]
    dry: bool,

    /// Force-push moved branches tracked on REMOTE (default: configured remote)
    #[arg(
        short = 'p',
        long,
        value_name = "REMOTE",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    push: Option<String>,

    /// With --push, also push branches that only exist locally
    #[arg(short = 'f', long)]
    force: bool,

    /// Show git commands being executed (repeat for their output)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,

    /// Print nothing but errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

/// Install signal handler for graceful interruption
fn install_signal_handler() {
    ctrlc::set_handler(|| {
        // A rebase may be stopped halfway; git keeps its own state for it
        eprintln!("\n\n{} interrupted. Run:", PROGRAM_NAME);
        eprintln!("  git rebase --abort        if a rebase is still in progress");
        eprintln!("  git checkout <branch>     to return to where you started");
        std::process::exit(130);
    })
    .expect("Error setting Ctrl-C handler");
}

fn main() {
    // Install signal handler for graceful interruption
    install_signal_handler();

    let cli = Cli::parse();

    let verbosity = match Verbosity::from_flags(cli.verbose, cli.quiet) {
        Ok(verbosity) => verbosity,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let ctx = ExecutionContext::new(verbosity, cli.dry);
    let printer = Printer::new(ctx.verbosity);
    if let Err(e) = execute(&cli, ctx, printer) {
        report_error(&printer, &e);
        std::process::exit(1);
    }
}

fn execute(cli: &Cli, ctx: ExecutionContext, printer: Printer) -> anyhow::Result<()> {
    let logger = logging::create_logger(ctx.verbosity);
    let cwd = std::env::current_dir()?;

    let gateway = GitGateway::from_path(&cwd, ctx, printer, logger)?;
    let config = Config::load(gateway.git_dir())?;

    let options = RunOptions {
        head: cli.head.clone(),
        target: cli.target.clone(),
        push: config.push_remote(cli.push.as_deref()),
        force: cli.force || config.push.force,
    };

    run::run(&gateway, &options, TerminalSignal)?;
    Ok(())
}

/// Find the failed git invocation behind an error, if any
fn process_failure(err: &anyhow::Error) -> Option<&ProcessFailure> {
    if let Some(chain_error) = err.downcast_ref::<ChainError>() {
        return chain_error.process_failure();
    }
    match err.downcast_ref::<GitError>() {
        Some(GitError::Failed(failure)) => Some(failure),
        _ => None,
    }
}

fn report_error(printer: &Printer, err: &anyhow::Error) {
    printer.error(&format!("{:#}", err));
    if let Some(failure) = process_failure(err) {
        // Some git commands report failures on stdout only
        let details = match failure.stderr.trim_end() {
            "" => failure.stdout.trim_end(),
            stderr => stderr,
        };
        if !details.is_empty() {
            eprintln!("{}", details);
        }
    }
}
