//! linescope: scope static-analysis findings to the lines a pull request
//! changed, and post the rest as inline review comments.
//!
//! This is the main entry point for the `linescope` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and maps the outcome onto
//! the process exit status.

mod changes;
mod cli;
mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod git;
pub mod github;
pub mod paths;
pub mod report;

#[cfg(test)]
mod test_support;

use clap::error::ErrorKind;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::FAILURE,
            };
            // Best effort; nothing sensible to do if stderr is gone.
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code())
        }
    }
}
