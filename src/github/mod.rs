//! Review service collaborator.
//!
//! The `ReviewApi` trait is the seam between the scoping pipeline and the
//! hosted service; `GithubClient` implements it against the GitHub REST API.
//! Each call is a single best-effort attempt.

mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::GithubClient;
pub use types::{
    ChangedFile, Comparison, ReviewComment, ReviewCommentRecord, ReviewRequest, StatusRequest,
    StatusState, User,
};

use crate::error::Result;

/// Operations linescope needs from the review service.
pub trait ReviewApi {
    /// The account the token belongs to.
    fn current_user(&self) -> Result<User>;

    /// Raw JSON of a pull request.
    fn pull_request_raw(&self, number: u64) -> Result<String>;

    /// Files changed between two commits, with per-file patches.
    fn compare(&self, base: &str, head: &str) -> Result<Comparison>;

    /// Inline review comments currently on a pull request.
    fn review_comments(&self, number: u64) -> Result<Vec<ReviewCommentRecord>>;

    /// Delete one review comment by its API URL.
    fn delete_comment(&self, url: &str) -> Result<()>;

    /// Submit a review with inline comments.
    fn create_review(&self, number: u64, review: &ReviewRequest) -> Result<()>;

    /// Create a commit status at the given statuses URL.
    fn create_status(&self, url: &str, status: &StatusRequest) -> Result<()>;
}
