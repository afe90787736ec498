//! Resumable source line to diff position lookups.

use crate::error::Result;

use super::scanner::{DiffLine, ScanCursor};

/// Where a source line sits inside a file's diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffPosition {
    /// Index used by the review comment API.
    pub position: i64,
    /// Source line the scan stopped on.
    pub source_line: usize,
}

/// Maps ascending source lines to diff positions over one diff stream.
///
/// The resolver never rewinds: targets must be requested in non-decreasing
/// order. Create one per file and drop it once that file is done, since
/// positions are only meaningful within a single file's diff.
pub struct PositionResolver<I> {
    lines: I,
    cursor: ScanCursor,
    last: Option<DiffPosition>,
}

impl<'a> PositionResolver<std::str::Lines<'a>> {
    /// Build a resolver over an in-memory patch.
    pub fn from_patch(patch: &'a str) -> Self {
        Self::new(patch.lines())
    }
}

impl<I, S> PositionResolver<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            cursor: ScanCursor::new(),
            last: None,
        }
    }

    /// Current scan state.
    pub fn cursor(&self) -> &ScanCursor {
        &self.cursor
    }

    /// Advance until the cursor reaches `target` and return its position.
    ///
    /// Asking again for the line that was just resolved returns the same
    /// answer without consuming input. `Ok(None)` means the diff ended first:
    /// the line is outside every hunk (or was requested out of order).
    pub fn resolve(&mut self, target: usize) -> Result<Option<DiffPosition>> {
        if let Some(last) = self.last.filter(|last| last.source_line == target) {
            return Ok(Some(last));
        }

        for line in self.lines.by_ref() {
            let kind = self.cursor.advance(line.as_ref())?;
            if matches!(kind, DiffLine::Added | DiffLine::Context)
                && self.cursor.source_line == target
            {
                let found = DiffPosition {
                    position: self.cursor.position,
                    source_line: self.cursor.source_line,
                };
                self.last = Some(found);
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}
