//! `pr` and `pr-status` commands.

use crate::cli::{PrArgs, PrStatusArgs};
use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use crate::github::{GithubClient, ReviewApi, StatusRequest};

/// Print the pull request JSON for downstream tooling.
pub fn cmd_pr(config: &Config, args: PrArgs) -> Result<u8> {
    let client = GithubClient::new(config, &args.pull.token)?;
    let body = client.pull_request_raw(args.pull.pr_number)?;
    println!("{}", body);
    Ok(exit_codes::SUCCESS)
}

pub fn cmd_pr_status(config: &Config, args: PrStatusArgs) -> Result<u8> {
    let client = GithubClient::new(config, &args.token)?;
    let status = StatusRequest {
        state: args.state,
        target_url: args.target_url,
        description: args.description,
        context: args.context,
    };

    client.create_status(&args.status_url, &status)?;
    log::info!("status '{}' set for {}", status.context, args.status_url);
    Ok(exit_codes::SUCCESS)
}
