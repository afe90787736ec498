//! Tests for change-set computation.

use super::{ChangeSet, changed_lines};

fn set(lines: &[usize]) -> ChangeSet {
    lines.iter().copied().collect()
}

#[test]
fn test_modified_line() {
    assert_eq!(changed_lines(Some("a\nb\nc\n"), "a\nx\nc\n"), set(&[2]));
}

#[test]
fn test_appended_line() {
    assert_eq!(changed_lines(Some("a\nb\n"), "a\nb\nc\n"), set(&[3]));
}

#[test]
fn test_missing_prior_revision_marks_everything() {
    assert_eq!(changed_lines(None, "a\nb\n"), set(&[1, 2]));
}

#[test]
fn test_missing_prior_revision_of_empty_file() {
    assert!(changed_lines(None, "").is_empty());
}

#[test]
fn test_identical_content() {
    let text = "<?php\necho 'hi';\n";
    assert!(changed_lines(Some(text), text).is_empty());
}

/// Deleted lines do not contribute, and later lines keep new numbering.
#[test]
fn test_deleted_lines_are_not_reported() {
    let old = "one\ntwo\nthree\nfour\n";
    let new = "one\nfour\n";
    assert!(changed_lines(Some(old), new).is_empty());

    let new = "one\nfour\nfive\n";
    assert_eq!(changed_lines(Some(old), new), set(&[3]));
}

#[test]
fn test_inserted_block_in_the_middle() {
    let old = "a\nb\nc\n";
    let new = "a\nnew1\nnew2\nb\nc\n";
    assert_eq!(changed_lines(Some(old), new), set(&[2, 3]));
}

#[test]
fn test_prepended_line_shifts_nothing_else() {
    let old = "a\nb\n";
    let new = "header\na\nb\n";
    assert_eq!(changed_lines(Some(old), new), set(&[1]));
}

#[test]
fn test_whitespace_change_counts_as_modified() {
    assert_eq!(changed_lines(Some("a\nb\n"), "a\nb \n"), set(&[2]));
}

#[test]
fn test_multiple_separate_edits() {
    let old = "1\n2\n3\n4\n5\n6\n";
    let new = "1\nX\n3\n4\nY\n6\nZ\n";
    assert_eq!(changed_lines(Some(old), new), set(&[2, 5, 7]));
}
