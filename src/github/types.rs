//! Request and response payloads for the review service.

use crate::config::ReviewEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub login: String,
}

/// One file entry of a commit comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed`, ...
    pub status: String,
    /// Unified diff hunks for this file; absent for binary or huge files.
    #[serde(default)]
    pub patch: Option<String>,
}

impl ChangedFile {
    pub fn is_removed(&self) -> bool {
        self.status == "removed"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Comparison {
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

/// An existing inline comment, as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewCommentRecord {
    pub url: String,
    pub user: User,
}

/// An inline comment to submit.
///
/// `position` indexes into this file's diff for one specific pair of
/// revisions; it is not a source line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewComment {
    #[serde(rename = "path")]
    pub file: String,
    pub position: u64,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRequest {
    pub event: ReviewEvent,
    pub comments: Vec<ReviewComment>,
}

/// Commit status state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Pending,
    Success,
    Error,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRequest {
    pub state: StatusState,
    pub target_url: String,
    pub description: String,
    pub context: String,
}
