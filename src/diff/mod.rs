//! Diff position mapping for inline review comments.
//!
//! Review comments are anchored to a *position* inside one file's unified
//! diff, not to a source line. This module scans a diff text line by line,
//! keeping a resumable cursor so that a sorted sequence of source lines can be
//! mapped onto positions in a single forward pass:
//! - `scanner`: line classification, hunk header parsing and cursor updates
//! - `resolver`: resumable source line -> position lookups over one diff

mod helpers;
mod resolver;
mod scanner;


pub use resolver::{DiffPosition, PositionResolver};
pub use scanner::{DiffLine, HunkHeader, ScanCursor};
