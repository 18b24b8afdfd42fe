//! # Preflop CLI Library
//!
//! Command-line front end for the preflop scenario engine. Scenarios are
//! stored as JSON records; each command reads one, runs a single engine
//! operation, and prints or writes the result.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["preflop", "seed", "--format", "six-max", "--output", "s.json"];
//! let code = preflop_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `seed`: Create a scenario with one undecided node per seat
//! - `legal`: List the legal actions of a node
//! - `apply`: Apply an action to a node and grow the tree
//! - `sizes`: Show sizing presets for an action
//! - `show`: Print a scenario as a node table
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, PreflopCli};
use commands::{
    ApplyArgs, handle_apply_command, handle_cfg_command, handle_legal_command,
    handle_seed_command, handle_show_command, handle_sizes_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["seed", "legal", "apply", "sizes", "show", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses `args`, dispatches to the subcommand handler, and returns the
/// exit code: `0` for success (including `--help`/`--version`), `2` for
/// any error.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["preflop", "sizes", "--action", "open"];
/// let code = preflop_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PreflopCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a success code
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Preflop scenario CLI");
            write_or_exit!(err, "Usage: preflop <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: preflop --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Seed {
            format,
            hero,
            output,
        } => handle_seed_command(format, hero, output, out),
        Commands::Legal { input, node } => handle_legal_command(&input, node, out),
        Commands::Apply {
            input,
            node,
            action,
            sizing,
            output,
        } => handle_apply_command(
            ApplyArgs {
                input,
                node,
                action,
                sizing,
                output,
            },
            out,
            err,
        ),
        Commands::Sizes { action } => handle_sizes_command(&action, out),
        Commands::Show { input } => handle_show_command(&input, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
