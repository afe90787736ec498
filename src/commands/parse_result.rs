//! `parse-result` command: scope a checkstyle report to changed lines.

use crate::changes::{ChangeSet, changed_lines};
use crate::cli::ParseResultArgs;
use crate::config::Config;
use crate::error::Result;
use crate::exit_codes;
use crate::filter::{ScopeSummary, scope_report};
use crate::git::{GitRevisionSource, RevisionSource};
use crate::report::Report;
use std::collections::HashMap;
use std::path::Path;

pub fn cmd_parse_result(config: &Config, args: ParseResultArgs) -> Result<u8> {
    let source = GitRevisionSource::new(&config.repo_dir, &args.base_sha)?;
    let summary = scope_report_file(&args.file, &source, source.repo_dir())?;

    log::info!(
        "{} finding(s) on changed lines, {} discarded, {} file(s) now clean",
        summary.retained,
        summary.discarded,
        summary.emptied_files.len()
    );
    Ok(exit_codes::for_findings(summary.retained))
}

/// Load the report at `path`, scope it, print what remains and write it back.
///
/// `repo_dir` must be canonical (see [`GitRevisionSource::repo_dir`]).
pub fn scope_report_file(
    path: &Path,
    source: &dyn RevisionSource,
    repo_dir: &Path,
) -> Result<ScopeSummary> {
    let mut report = Report::load(path)?;
    log::info!(
        "{}: {} finding(s) in {} file(s)",
        path.display(),
        report.finding_count(),
        report.files.len()
    );
    let change_sets = collect_change_sets(&report, source, repo_dir);
    let summary = scope_report(&mut report, &change_sets, repo_dir);

    for entry in &report.files {
        for finding in &entry.findings {
            println!(
                "[{}] Line {}: {}",
                finding.severity, finding.line, finding.message
            );
        }
    }
    for file in &summary.emptied_files {
        log::debug!("{}: no findings on changed lines, entry removed", file);
    }

    report.save(path)?;
    Ok(summary)
}

/// Compute the change set of every file named in the report.
///
/// Failures are per file: a name outside `repo_dir` or an unreadable working
/// copy leaves the file without a change set (its findings are discarded), an
/// unreadable base revision treats the whole file as new.
pub fn collect_change_sets(
    report: &Report,
    source: &dyn RevisionSource,
    repo_dir: &Path,
) -> HashMap<String, ChangeSet> {
    let mut change_sets = HashMap::new();

    for entry in &report.files {
        // Reported by `scope_report`, which discards these entries.
        let Some(file) = entry.relative_path(repo_dir) else {
            continue;
        };
        if change_sets.contains_key(&file) {
            continue;
        }
        println!("   Checking {}", file);

        let current = match source.current(&file) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("{}: cannot read working copy ({}), discarding its findings", file, e);
                continue;
            }
        };
        let prior = source.prior(&file).unwrap_or_else(|e| {
            log::warn!("{}: cannot read base revision ({}), treating every line as changed", file, e);
            None
        });

        let lines = changed_lines(prior.as_deref(), &current);
        log::debug!("{}: {} changed line(s)", file, lines.len());
        change_sets.insert(file, lines);
    }

    change_sets
}
