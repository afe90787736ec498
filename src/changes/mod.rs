//! Change-set computation between two revisions of one file.
//!
//! A change set holds the 1-based line numbers of the *new* revision that
//! were added or modified. Deleted lines have no number in the new revision
//! and never appear.

use similar::{Algorithm, ChangeTag, TextDiff};
use std::collections::BTreeSet;

#[cfg(test)]
mod tests;

/// Line numbers (1-based, new revision) that were added or modified.
pub type ChangeSet = BTreeSet<usize>;

/// Compute the changed lines of `new` relative to `old`.
///
/// `old` is `None` when the file did not exist in the prior revision, in
/// which case every line of `new` is part of the change set.
pub fn changed_lines(old: Option<&str>, new: &str) -> ChangeSet {
    let Some(old) = old else {
        return (1..=new.lines().count()).collect();
    };

    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(old, new);

    diff.iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Insert)
        .filter_map(|change| change.new_index())
        .map(|index| index + 1)
        .collect()
}
