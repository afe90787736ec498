//! Configuration types and defaults for linescope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Event attached to the submitted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    /// Block the pull request until findings are addressed (default).
    #[default]
    RequestChanges,
    /// Leave the comments without approving or blocking.
    Comment,
    Approve,
}

impl ReviewEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestChanges => "REQUEST_CHANGES",
            Self::Comment => "COMMENT",
            Self::Approve => "APPROVE",
        }
    }
}

impl fmt::Display for ReviewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default globs selecting which changed files get a patch written.
pub fn default_include_globs() -> Vec<String> {
    vec!["**/*.php".to_string(), "**/*.js".to_string()]
}

// Default value functions for serde
pub(crate) fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
pub(crate) fn default_user_agent() -> String {
    "linescope".to_string()
}
pub(crate) fn default_repo_dir() -> PathBuf {
    PathBuf::from(".")
}
pub(crate) fn default_patch_dir() -> PathBuf {
    PathBuf::from(".linescope/patches")
}
