//! `pr-comment` command: post remaining findings as inline review comments.

use crate::cli::PrCommentArgs;
use crate::config::Config;
use crate::diff::PositionResolver;
use crate::error::Result;
use crate::exit_codes;
use crate::git;
use crate::github::{GithubClient, ReviewApi, ReviewComment, ReviewRequest};
use crate::report::{Finding, Report};
use std::path::Path;

/// Comments ready to submit, plus how many findings could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPlan {
    pub comments: Vec<ReviewComment>,
    pub unmapped: usize,
}

pub fn cmd_pr_comment(config: &Config, args: PrCommentArgs) -> Result<u8> {
    let client = GithubClient::new(config, &args.pull.token)?;
    let report = Report::load(&args.file)?;

    let mut config = config.clone();
    config.repo_dir = git::resolve_repo_dir(&config.repo_dir)?;

    let plan = post_review(&client, &config, args.pull.pr_number, &report)?;
    if plan.unmapped > 0 {
        log::warn!("{} finding(s) could not be placed in the diff", plan.unmapped);
    }
    Ok(exit_codes::SUCCESS)
}

/// Replace the token user's comments on `pr` with one per finding.
///
/// No review is submitted when no finding maps onto the diff.
pub fn post_review(
    api: &dyn ReviewApi,
    config: &Config,
    pr: u64,
    report: &Report,
) -> Result<CommentPlan> {
    let user = api.current_user()?;

    let own: Vec<String> = api
        .review_comments(pr)?
        .into_iter()
        .filter(|comment| comment.user.login == user.login)
        .map(|comment| comment.url)
        .collect();
    for url in &own {
        api.delete_comment(url)?;
    }
    if !own.is_empty() {
        log::info!("removed {} previous comment(s) by {}", own.len(), user.login);
    }

    let plan = plan_comments(report, &config.repo_dir, &config.patch_dir);
    if plan.comments.is_empty() {
        log::info!("no findings map onto the diff of #{}, nothing to post", pr);
        return Ok(plan);
    }

    let review = ReviewRequest {
        event: config.review_event,
        comments: plan.comments.clone(),
    };
    api.create_review(pr, &review)?;
    log::info!("posted {} comment(s) on #{}", review.comments.len(), pr);

    Ok(plan)
}

/// Resolve a diff position for every finding in the report.
///
/// Each file is matched against `<patch_dir>/<relative path>`, where the
/// relative path is taken against `repo_dir` (canonical). Findings are
/// resolved in ascending line order over one forward scan of that patch.
/// Findings that cannot be placed are logged and counted, never fatal.
pub fn plan_comments(report: &Report, repo_dir: &Path, patch_dir: &Path) -> CommentPlan {
    let mut plan = CommentPlan::default();

    for entry in &report.files {
        let Some(file) = entry.relative_path(repo_dir) else {
            log::warn!(
                "{}: not inside {}, skipping {} finding(s)",
                entry.name,
                repo_dir.display(),
                entry.findings.len()
            );
            plan.unmapped += entry.findings.len();
            continue;
        };
        let patch_path = patch_dir.join(&file);
        let patch = match std::fs::read_to_string(&patch_path) {
            Ok(patch) => patch,
            Err(e) => {
                log::warn!(
                    "{}: no patch at {} ({}), skipping {} finding(s)",
                    file,
                    patch_path.display(),
                    e,
                    entry.findings.len()
                );
                plan.unmapped += entry.findings.len();
                continue;
            }
        };

        let mut ordered: Vec<&Finding> = entry.findings.iter().collect();
        ordered.sort_by_key(|finding| finding.line);

        let mut resolver = PositionResolver::from_patch(&patch);
        for (index, finding) in ordered.iter().enumerate() {
            let found = match resolver.resolve(finding.line) {
                Ok(found) => found,
                Err(e) => {
                    log::warn!("{}: {}, skipping remaining findings", file, e);
                    plan.unmapped += ordered.len() - index;
                    break;
                }
            };

            match found.and_then(|f| u64::try_from(f.position).ok()) {
                Some(position) => plan.comments.push(ReviewComment {
                    file: file.clone(),
                    position,
                    body: comment_body(finding),
                }),
                None => {
                    log::warn!("{}: line {} is not part of the diff", file, finding.line);
                    plan.unmapped += 1;
                }
            }
        }
    }

    plan
}

fn comment_body(finding: &Finding) -> String {
    format!(
        "[{}]: Line {} {}",
        finding.severity.as_str().to_uppercase(),
        finding.line,
        finding.message
    )
}
