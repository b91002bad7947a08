//! Interactive shell.
//!
//! One shell is one user session: the profile and any session changes live
//! only until the shell exits. Recoverable failures (no profile yet, unknown
//! or full session, bad input) are reported and the shell keeps going.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use studymatch_core::{AppState, Config, CoreError};
use tracing::debug;

use super::{catalog, matches, profile, session, split_words, CommandResult, Output};

#[derive(Parser)]
#[command(
    name = "",
    no_binary_name = true,
    disable_version_flag = true,
    about = "StudyMatch shell commands"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Your profile
    Profile {
        #[command(subcommand)]
        action: profile::ProfileAction,
    },
    /// Find study buddies
    Matches {
        /// Include every class year
        #[arg(long, conflicts_with = "same_year")]
        all_years: bool,
        /// Only classmates from your year
        #[arg(long)]
        same_year: bool,
    },
    /// Study sessions
    Sessions {
        #[command(subcommand)]
        action: session::SessionAction,
    },
    /// Show the course, spot, year, time slot and style lists
    Catalog,
    /// Show the candidate roster
    Roster {
        /// Only show this person
        name: Option<String>,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until it ends or `quit` is entered.
///
/// With `interactive` set, a banner and a prompt are shown; JSON output never
/// gets either so that it stays a clean stream of values.
pub fn run<R: BufRead, W: Write>(
    config: Config,
    input: R,
    interactive: bool,
    out: &mut Output<W>,
) -> CommandResult {
    let mut state = AppState::new(config);
    let interactive = interactive && !out.is_json();

    if interactive {
        out.line("StudyMatch - find your study crew. Type 'help' for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            out.prompt()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if let Flow::Quit = execute_line(&mut state, &line, out)? {
            break;
        }
    }
    Ok(())
}

fn execute_line<W: Write>(state: &mut AppState, line: &str, out: &mut Output<W>) -> Result<Flow, Box<dyn std::error::Error>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Flow::Continue);
    }
    debug!(line, "shell command");

    let words = match split_words(line) {
        Ok(words) => words,
        Err(message) => {
            report(out, &message)?;
            return Ok(Flow::Continue);
        }
    };
    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Also covers `help` and `--help`.
            out.line(err.render().to_string().trim_end())?;
            return Ok(Flow::Continue);
        }
    };

    let result = match parsed.command {
        ShellCommand::Profile { action } => profile::run(action, state, out),
        ShellCommand::Matches {
            all_years,
            same_year,
        } => {
            let same_year_only = if all_years {
                false
            } else {
                same_year || state.defaults().same_year_only
            };
            matches::run(state, same_year_only, out)
        }
        ShellCommand::Sessions { action } => session::run(action, state, out),
        ShellCommand::Catalog => catalog::show_catalog(state.catalog(), out),
        ShellCommand::Roster { name } => catalog::show_roster(state.roster(), name.as_deref(), out),
        ShellCommand::Quit => return Ok(Flow::Quit),
    };

    match result {
        Ok(()) => Ok(Flow::Continue),
        Err(err) => match err.downcast_ref::<CoreError>() {
            Some(core) if core.is_recoverable() => {
                report(out, &core.to_string())?;
                Ok(Flow::Continue)
            }
            _ => Err(err),
        },
    }
}

fn report<W: Write>(out: &mut Output<W>, message: &str) -> CommandResult {
    out.message(
        format!("error: {message}"),
        &serde_json::json!({ "error": message }),
    )
}
