//! # phhforge CLI Library
//!
//! Command-line front end for `phhforge_engine`: finds hand-history files,
//! fans records out across threads and writes the resulting datasets.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["phhforge", "generate", "--phh-path", "data", "--output", "train.json"];
//! let code = phhforge_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `generate`: Prompt/target training examples from hand-history folders
//! - `rewards`: Flat reward dataset from every record below a directory
//! - `inspect`: Parsed fields, events and decision points of one record
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
pub mod discovery;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod writer;

use cli::{Commands, PhhforgeCli};
use commands::{
    GenerateArgs, handle_cfg_command, handle_generate_command, handle_inspect_command,
    handle_rewards_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["generate", "rewards", "inspect", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let code = phhforge_cli::run(["phhforge", "cfg"], &mut io::sink(), &mut io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PhhforgeCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Generate {
            phh_path,
            folders,
            output,
            max_files,
            format,
            player,
            positional,
        } => handle_generate_command(
            GenerateArgs {
                phh_path,
                folders,
                output,
                max_files: max_files.map(to_usize),
                format,
                player,
                positional,
            },
            out,
            err,
        ),
        Commands::Rewards {
            data_dir,
            output,
            max_files,
        } => handle_rewards_command(&data_dir, &output, max_files.map(to_usize), out, err),
        Commands::Inspect { input, player } => {
            handle_inspect_command(&input, player.as_deref(), out, err)
        }
        Commands::Cfg => match handle_cfg_command(out, err) {
            Ok(()) => return exit_code::SUCCESS,
            // already reported by the handler
            Err(_) => return exit_code::ERROR,
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn to_usize(n: u64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }
    let _ = write_usage(e, err);
    exit_code::ERROR
}

fn write_usage(e: clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "phhforge hand-history toolkit")?;
    writeln!(err, "Usage: phhforge <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: phhforge --help")
}
