//! # Showdown CLI Library
//!
//! Command-line front end for `showdown-engine`: evaluates hands, settles
//! finished hands described in JSON, deals seeded hands, and aggregates the
//! resulting hand history.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand, and returns the
//! process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "settle", "--input", "table.json"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Best hand for two hole cards and a board
//! - `settle`: Winners, side pots, and payouts for a table file
//! - `deal`: Deal a seeded hand to the river and settle it
//! - `stats`: Aggregate JSONL settlement history
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod deck;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, ShowdownCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_settle_command,
    handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "settle", "deal", "stats", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["showdown", "eval", "--hole", "Ah", "Kd", "--board", "Qh", "Jh", "Th"];
/// let code = showdown_cli::run(args, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Straight"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => usage_error(&e, err),
            };
        }
    };

    let level = config::load()
        .map(|c| c.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    logging::init_logging(&level);

    let result = match cli.cmd {
        Commands::Eval { hole, board } => handle_eval_command(&hole, &board, out),
        Commands::Settle {
            input,
            odd_chip,
            history,
        } => handle_settle_command(input, odd_chip, history, out, err),
        Commands::Deal {
            seed,
            players,
            history,
        } => handle_deal_command(seed, players, history, out),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: &clap::Error, err: &mut dyn Write) -> i32 {
    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Showdown CLI");
    write_or_exit!(err, "Usage: showdown <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: showdown --help");
    exit_code::ERROR
}
