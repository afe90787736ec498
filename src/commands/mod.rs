//! Command implementations for linescope.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command returns the process exit status on success.

mod comment;
mod parse_result;
mod patch;
mod pr;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// Resolves the configuration first: `--config`, then `linescope.yaml` in the
/// working directory, then defaults, with global flags applied on top.
pub fn dispatch(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(cli.global.config.as_deref(), &cwd)?
        .with_overrides(cli.global.overrides())?;

    match cli.command {
        Command::Pr(args) => pr::cmd_pr(&config, args),
        Command::Patch(args) => patch::cmd_patch(&config, args),
        Command::ParseResult(args) => parse_result::cmd_parse_result(&config, args),
        Command::PrComment(args) => comment::cmd_pr_comment(&config, args),
        Command::PrStatus(args) => pr::cmd_pr_status(&config, args),
    }
}
