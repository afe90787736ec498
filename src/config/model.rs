//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for linescope.
///
/// This struct represents the contents of `linescope.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Review service settings
    // =========================================================================
    /// Base URL of the REST API (GitHub or GitHub Enterprise).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Owner (user or organization) of the repository under review.
    pub repo_owner: String,

    /// Name of the repository under review.
    pub repo_name: String,

    /// User-Agent header sent with every API request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Event used when submitting the review.
    pub review_event: ReviewEvent,

    // =========================================================================
    // Local paths
    // =========================================================================
    /// Checkout of the repository the report was produced from.
    #[serde(default = "default_repo_dir")]
    pub repo_dir: PathBuf,

    /// Directory holding one patch file per changed source file.
    #[serde(default = "default_patch_dir")]
    pub patch_dir: PathBuf,

    // =========================================================================
    // Patch selection
    // =========================================================================
    /// Changed files matching any of these globs get a patch written.
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            repo_owner: String::new(),
            repo_name: String::new(),
            user_agent: default_user_agent(),
            review_event: ReviewEvent::default(),
            repo_dir: default_repo_dir(),
            patch_dir: default_patch_dir(),
            include_globs: default_include_globs(),
        }
    }
}
