//! CLI argument parsing for linescope.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::Overrides;
use crate::github::StatusState;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// linescope: scope static-analysis reports to the lines a pull request
/// touched, and post what remains as inline review comments.
#[derive(Parser, Debug)]
#[command(name = "linescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command; they override `linescope.yaml`.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file (default: ./linescope.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Repository checkout the report was produced from.
    #[arg(long, global = true)]
    pub repo_dir: Option<PathBuf>,

    /// Directory holding per-file patches.
    #[arg(long, global = true)]
    pub patch_dir: Option<PathBuf>,

    /// Repository owner on the review service.
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Repository name on the review service.
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// REST API base URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl GlobalArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            repo_owner: self.owner.clone(),
            repo_name: self.repo.clone(),
            repo_dir: self.repo_dir.clone(),
            patch_dir: self.patch_dir.clone(),
        }
    }
}

/// Available commands for linescope.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a pull request as JSON.
    Pr(PrArgs),

    /// Write the patch of every changed file into the patch directory.
    ///
    /// Removed files and files outside `include_globs` are skipped.
    Patch(PatchArgs),

    /// Drop findings on lines the change did not touch.
    ///
    /// Rewrites the report in place and exits with the number of findings
    /// that remain (0 means clean).
    ParseResult(ParseResultArgs),

    /// Replace this user's review comments with one per remaining finding.
    PrComment(PrCommentArgs),

    /// Create a commit status.
    PrStatus(PrStatusArgs),
}

/// Token and pull request number.
#[derive(Args, Debug)]
pub struct PullRequestArgs {
    /// API token.
    #[arg(short, long)]
    pub token: String,

    /// Pull request number.
    #[arg(short, long)]
    pub pr_number: u64,
}

/// Arguments for the `pr` command.
#[derive(Args, Debug)]
pub struct PrArgs {
    #[command(flatten)]
    pub pull: PullRequestArgs,
}

/// Arguments for the `patch` command.
#[derive(Args, Debug)]
pub struct PatchArgs {
    /// API token.
    #[arg(short, long)]
    pub token: String,

    /// Base commit of the comparison.
    #[arg(long)]
    pub base_sha: String,

    /// Head commit of the comparison.
    #[arg(long)]
    pub head_sha: String,
}

/// Arguments for the `parse-result` command.
#[derive(Args, Debug)]
pub struct ParseResultArgs {
    /// Commit the change is compared against.
    #[arg(long)]
    pub base_sha: String,

    /// Checkstyle XML report (rewritten in place).
    #[arg(long)]
    pub file: PathBuf,
}

/// Arguments for the `pr-comment` command.
#[derive(Args, Debug)]
pub struct PrCommentArgs {
    #[command(flatten)]
    pub pull: PullRequestArgs,

    /// Checkstyle XML report, already scoped with `parse-result`.
    #[arg(long)]
    pub file: PathBuf,
}

/// Arguments for the `pr-status` command.
#[derive(Args, Debug)]
pub struct PrStatusArgs {
    /// API token.
    #[arg(short, long)]
    pub token: String,

    /// Statuses URL of the commit.
    #[arg(long)]
    pub status_url: String,

    #[arg(long, value_enum)]
    pub state: StatusState,

    #[arg(long)]
    pub target_url: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub context: String,
}

impl Cli {
    /// Parse CLI arguments from the process environment.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Cli::try_parse()
    }
}
