//! Line classification and cursor updates for unified diff text.

use crate::error::{Result, ScopeError};

use super::helpers::parse_hunk_header;

/// Ranges declared by a `@@ -a,b +c,d @@` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
}

impl HunkHeader {
    /// Parse a header line, failing with `MalformedHunkHeader`.
    pub fn parse(line: &str) -> Result<Self> {
        parse_hunk_header(line).ok_or_else(|| ScopeError::MalformedHunkHeader(line.to_string()))
    }
}

/// Kind of one physical diff line, decided by its leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine {
    Added,
    Removed,
    Context,
    HunkHeader,
    /// Anything else (`\ No newline at end of file`, blank lines, `index ...`).
    Other,
}

impl DiffLine {
    /// Classify a raw diff line.
    ///
    /// Hunk headers are matched before removed lines. Any other line starting
    /// with `-`, including a `--- a/path` file header, counts as removed.
    pub fn classify(line: &str) -> Self {
        if line.starts_with("@@ ") {
            DiffLine::HunkHeader
        } else if line.starts_with('-') {
            DiffLine::Removed
        } else if line.starts_with('+') {
            DiffLine::Added
        } else if line.starts_with(' ') {
            DiffLine::Context
        } else {
            DiffLine::Other
        }
    }
}

/// Resumable scan state over one file's diff.
///
/// `position` counts every classified line seen so far, starting at -1 so
/// that the first line (normally the first hunk header) is position 0.
/// `source_line` is the running line counter, seeded from each hunk
/// header's *old* start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    pub source_line: usize,
    pub position: i64,
    pub after_hunk_header: bool,
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self {
            source_line: 0,
            position: -1,
            after_hunk_header: false,
        }
    }
}

impl ScanCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume exactly one diff line and update the cursor.
    ///
    /// Returns the line's classification. A `@@ ` line that does not parse
    /// leaves the cursor untouched and returns `MalformedHunkHeader`.
    pub fn advance(&mut self, line: &str) -> Result<DiffLine> {
        let kind = DiffLine::classify(line);

        match kind {
            DiffLine::HunkHeader => {
                let header = HunkHeader::parse(line)?;
                // Old range start, not new range start. Kept as observed.
                self.source_line = header.old_start;
                self.after_hunk_header = true;
                self.position += 1;
            }
            DiffLine::Removed => {
                self.position += 1;
                self.after_hunk_header = false;
            }
            DiffLine::Added | DiffLine::Context => {
                self.position += 1;
                if !self.after_hunk_header {
                    self.source_line += 1;
                }
                self.after_hunk_header = false;
            }
            DiffLine::Other => {}
        }

        Ok(kind)
    }
}
