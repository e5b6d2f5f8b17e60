//! Operator prompt used while a rebase waits for manual conflict resolution.
//!
//! In a terminal the answer is read with dialoguer; with a piped stdin we fall
//! back to plain line reads so scripts can still feed `c`.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{self, BufRead, IsTerminal, Write};

use crate::rebase::ResolutionSignal;

/// Prompt label shown while waiting for the operator
pub const CONTINUE_PROMPT: &str = "[c/continue]";

/// Reads resolution acknowledgements from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalSignal;

impl ResolutionSignal for TerminalSignal {
    fn next_response(&mut self) -> io::Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(CONTINUE_PROMPT.green().to_string())
                .allow_empty(true)
                .interact_text()
                .map_err(io::Error::other);
        }

        print!("{} > ", CONTINUE_PROMPT.green());
        io::stdout().flush()?;
        read_response(&mut io::stdin().lock())
    }
}

/// Read one answer line; a closed input can never acknowledge, so it is an error.
fn read_response(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for the rebase to be resolved",
        ));
    }
    Ok(line)
}

/// True when the operator's answer acknowledges the resolution
pub fn is_continue(response: &str) -> bool {
    matches!(response.trim().to_lowercase().as_str(), "c" | "continue")
}
