//! Helper functions for diff scanning.

use regex::Regex;
use std::sync::LazyLock;

use super::scanner::HunkHeader;

/// Hunk header: `@@ -old_start[,old_count] +new_start[,new_count] @@[ context]`.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// Parse a hunk header line.
///
/// Handles:
/// - "@@ -10,5 +20,3 @@"
/// - "@@ -1 +1 @@" (counts omitted, default to 1)
/// - "@@ -10,5 +20,3 @@ fn foo()" (trailing section heading)
///
/// Returns None if the line is not a well-formed header.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;

    let number = |idx: usize| -> Option<usize> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(1),
        }
    };

    Some(HunkHeader {
        old_start: number(1)?,
        old_count: number(2)?,
        new_start: number(3)?,
        new_count: number(4)?,
    })
}
