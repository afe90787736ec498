//! Change-scoped finding filter.
//!
//! Keeps only the findings that sit on a line touched by the change under
//! review. A file with no change set has nothing touched, so all of its
//! findings are discarded.

use crate::changes::ChangeSet;
use crate::report::{Finding, Report};
use std::collections::HashMap;
use std::path::Path;


/// A finding together with the repository-relative file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFinding {
    pub file: String,
    pub finding: Finding,
}

/// Result of filtering a list of findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Retained findings in their original order.
    pub kept: Vec<LocatedFinding>,
    pub discarded: usize,
}

/// Result of scoping a whole report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSummary {
    pub retained: usize,
    pub discarded: usize,
    /// File entries removed because none of their findings survived.
    pub emptied_files: Vec<String>,
}

/// Keep findings whose line is in their file's change set.
pub fn filter_findings(
    findings: Vec<LocatedFinding>,
    change_sets: &HashMap<String, ChangeSet>,
) -> FilterOutcome {
    let total = findings.len();
    let kept: Vec<LocatedFinding> = findings
        .into_iter()
        .filter(|located| {
            change_sets
                .get(&located.file)
                .is_some_and(|lines| lines.contains(&located.finding.line))
        })
        .collect();

    FilterOutcome {
        discarded: total - kept.len(),
        kept,
    }
}

/// Filter every file entry of `report` in place.
///
/// Change sets are keyed by repository-relative path. Entries whose name is
/// outside `repo_dir` have no change set, so their findings are discarded.
/// Entries left without findings are dropped from the report and listed in
/// the summary.
pub fn scope_report(
    report: &mut Report,
    change_sets: &HashMap<String, ChangeSet>,
    repo_dir: &Path,
) -> ScopeSummary {
    let mut summary = ScopeSummary::default();

    for entry in &mut report.files {
        let Some(file) = entry.relative_path(repo_dir) else {
            log::warn!(
                "{}: not inside {}, discarding {} finding(s)",
                entry.name,
                repo_dir.display(),
                entry.findings.len()
            );
            summary.discarded += entry.findings.len();
            entry.findings.clear();
            summary.emptied_files.push(entry.name.clone());
            continue;
        };
        let located = std::mem::take(&mut entry.findings)
            .into_iter()
            .map(|finding| LocatedFinding {
                file: file.clone(),
                finding,
            })
            .collect();

        let outcome = filter_findings(located, change_sets);
        summary.retained += outcome.kept.len();
        summary.discarded += outcome.discarded;
        entry.findings = outcome.kept.into_iter().map(|l| l.finding).collect();

        if entry.findings.is_empty() {
            summary.emptied_files.push(file);
        }
    }

    report.files.retain(|entry| !entry.findings.is_empty());
    summary
}
