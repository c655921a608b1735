//! # Bingo CLI Library
//!
//! Command-line front end for the bingo engine. It plays the part of the
//! storage and transport collaborator: card configurations and play data are
//! JSON files, and each invocation restores state, applies one operation and
//! writes the result back.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["bingo", "generate", "--type", "75-ball", "--cards", "10", "--seed", "7"];
//! let code = bingo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `variants`: List supported bingo variants
//! - `generate`: Generate a card configuration
//! - `validate`: Validate a stored card configuration
//! - `show`: Render one card with called values marked
//! - `check`: List cards that currently have a bingo
//! - `call` / `uncall`: Mark or revert a called ball
//! - `reset`: Clear every called ball (requires `--yes`)
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{BingoCli, Commands};
use commands::{
    handle_call_command, handle_cfg_command, handle_check_command, handle_generate_command,
    handle_reset_command, handle_show_command, handle_uncall_command, handle_validate_command,
    handle_variants_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &[
    "variants", "generate", "validate", "show", "check", "call", "uncall", "reset", "cfg",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let code = bingo_cli::run(vec!["bingo", "variants"], &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BingoCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Variants => handle_variants_command(out),
        Commands::Generate {
            variant,
            cards,
            seed,
            free_index,
            output,
        } => handle_generate_command(variant, cards, seed, free_index, output, out, err),
        Commands::Validate {
            input,
            variant,
            free_index,
        } => match handle_validate_command(&input, variant.as_deref(), free_index, out, err) {
            // Already reported with its path.
            Err(CliError::Validation(_)) => return exit_code::ERROR,
            other => other,
        },
        Commands::Show {
            config,
            card,
            play_data,
            variant,
            free_index,
        } => handle_show_command(
            &config,
            card,
            play_data.as_deref(),
            variant.as_deref(),
            free_index,
            out,
        ),
        Commands::Check {
            config,
            play_data,
            variant,
            free_index,
        } => handle_check_command(&config, &play_data, variant.as_deref(), free_index, out),
        Commands::Call {
            play_data,
            value,
            variant,
            log,
        } => handle_call_command(&play_data, value, variant.as_deref(), log.as_deref(), out),
        Commands::Uncall {
            play_data,
            value,
            variant,
            log,
        } => handle_uncall_command(&play_data, value, variant.as_deref(), log.as_deref(), out),
        Commands::Reset {
            play_data,
            yes,
            variant,
            log,
        } => handle_reset_command(&play_data, yes, variant.as_deref(), log.as_deref(), out),
        Commands::Cfg => match handle_cfg_command(out, err) {
            Err(CliError::Config(_)) => return exit_code::ERROR,
            other => other,
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: bingo <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: bingo --help");
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["bingo", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(stderr.contains(c), "missing {} in usage", c);
        }
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        assert_eq!(run(["bingo", "--help"], &mut out, &mut err), exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("generate"));
        assert!(err.is_empty());
    }

    #[test]
    fn command_table_matches_clap() {
        use clap::CommandFactory;
        let cmd = BingoCli::command();
        let names: Vec<&str> = cmd
            .get_subcommands()
            .map(|s| s.get_name())
            .filter(|n| *n != "help")
            .collect();
        for c in COMMANDS {
            assert!(names.contains(c), "{} not registered", c);
        }
        assert_eq!(names.len(), COMMANDS.len());
    }
}
