//! Git command runner for linescope.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling, plus the prior-revision lookup used when
//! computing change sets.

use crate::error::{Result, ScopeError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output, trim: bool) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout);
        Self {
            stdout: if trim {
                stdout.trim().to_string()
            } else {
                stdout.into_owned()
            },
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// Stdout is trimmed. Non-zero exit codes map to `ScopeError::GitError`.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    execute(cwd.as_ref(), args, true)
}

/// Like [`run_git`] but leaves stdout byte-for-byte intact (file contents).
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    execute(cwd.as_ref(), args, false)
}

fn spawn(cwd: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ScopeError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

fn execute(cwd: &Path, args: &[&str], trim: bool) -> Result<GitOutput> {
    let output = spawn(cwd, args)?;
    let git_output = GitOutput::from_output(&output, trim);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(ScopeError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Canonical form of a repository directory given on the command line or in
/// config, so report names can be matched against it.
pub fn resolve_repo_dir<P: AsRef<Path>>(repo_dir: P) -> Result<PathBuf> {
    let repo_dir = repo_dir.as_ref();
    std::fs::canonicalize(repo_dir).map_err(|e| {
        ScopeError::GitError(format!(
            "repository directory '{}' is not accessible: {}",
            repo_dir.display(),
            e
        ))
    })
}

/// Check whether `path` exists in the tree of `rev`.
///
/// A path that is simply absent is `Ok(false)`; an unknown revision or a path
/// outside the repository is a `GitError`.
pub fn exists_at<P: AsRef<Path>>(repo_dir: P, rev: &str, path: &str) -> Result<bool> {
    let output = run_git(
        repo_dir,
        &["ls-tree", "--full-tree", "--name-only", rev, "--", path],
    )?;
    Ok(!output.stdout.is_empty())
}

/// Read `path` as it was at `rev`.
///
/// Returns `Ok(None)` when the file did not exist at that revision.
pub fn show_file_at<P: AsRef<Path>>(repo_dir: P, rev: &str, path: &str) -> Result<Option<String>> {
    let repo_dir = repo_dir.as_ref();
    if !exists_at(repo_dir, rev, path)? {
        return Ok(None);
    }

    let object = format!("{}:{}", rev, path);
    let output = run_git_raw(repo_dir, &["show", &object])?;
    Ok(Some(output.stdout))
}

/// Supplies both revisions of a file for change-set computation.
pub trait RevisionSource {
    /// Content before the change, `None` if the file is new.
    fn prior(&self, path: &str) -> Result<Option<String>>;

    /// Content after the change.
    fn current(&self, path: &str) -> Result<String>;
}

/// Reads the prior revision from git history and the current one from the
/// working tree.
#[derive(Debug, Clone)]
pub struct GitRevisionSource {
    repo_dir: PathBuf,
    base_sha: String,
}

impl GitRevisionSource {
    /// Create a source, checking that `base_sha` names a commit.
    ///
    /// `repo_dir` is canonicalized; use [`GitRevisionSource::repo_dir`] when
    /// matching report names against it.
    pub fn new(repo_dir: impl Into<PathBuf>, base_sha: impl Into<String>) -> Result<Self> {
        let repo_dir = resolve_repo_dir(repo_dir.into())?;
        let base_sha = base_sha.into();

        let commit = format!("{}^{{commit}}", base_sha);
        run_git(&repo_dir, &["rev-parse", "--verify", "--quiet", &commit]).map_err(|_| {
            ScopeError::GitError(format!(
                "base revision '{}' not found in {}",
                base_sha,
                repo_dir.display()
            ))
        })?;

        Ok(Self { repo_dir, base_sha })
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }
}

impl RevisionSource for GitRevisionSource {
    fn prior(&self, path: &str) -> Result<Option<String>> {
        show_file_at(&self.repo_dir, &self.base_sha, path)
    }

    fn current(&self, path: &str) -> Result<String> {
        let full = self.repo_dir.join(path);
        std::fs::read_to_string(&full).map_err(ScopeError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, create_test_repo, head_sha, relative_from_cwd};
    use tempfile::TempDir;

    #[test]
    fn test_run_git_success() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["status", "--porcelain"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = create_test_repo();
        let result = run_git(temp_dir.path(), &["checkout", "nonexistent-branch"]);
        let err = result.unwrap_err();
        assert!(matches!(err, ScopeError::GitError(_)));
        assert!(err.to_string().contains("git checkout failed"));
    }

    #[test]
    fn test_run_git_raw_keeps_trailing_newline() {
        let temp_dir = create_test_repo();
        let output = run_git_raw(temp_dir.path(), &["show", "HEAD:README.md"]).unwrap();
        assert_eq!(output.stdout, "# Test\n");

        let trimmed = run_git(temp_dir.path(), &["show", "HEAD:README.md"]).unwrap();
        assert_eq!(trimmed.stdout, "# Test");
    }

    #[test]
    fn test_show_file_at_existing_and_missing() {
        let temp_dir = create_test_repo();
        let base = head_sha(temp_dir.path());
        commit_file(temp_dir.path(), "src/new.js", "let a = 1;\n");

        let readme = show_file_at(temp_dir.path(), &base, "README.md").unwrap();
        assert_eq!(readme.as_deref(), Some("# Test\n"));

        let missing = show_file_at(temp_dir.path(), &base, "src/new.js").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_revision_source_reads_both_sides() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "app.php", "<?php\necho 1;\n");
        let base = head_sha(temp_dir.path());
        std::fs::write(temp_dir.path().join("app.php"), "<?php\necho 2;\n").unwrap();

        let source = GitRevisionSource::new(temp_dir.path(), &base).unwrap();
        assert_eq!(source.prior("app.php").unwrap().as_deref(), Some("<?php\necho 1;\n"));
        assert_eq!(source.current("app.php").unwrap(), "<?php\necho 2;\n");
        assert!(source.prior("nope.php").unwrap().is_none());
        assert!(source.current("nope.php").is_err());
    }

    #[test]
    fn test_revision_source_rejects_unknown_base() {
        let temp_dir = create_test_repo();
        let err = GitRevisionSource::new(temp_dir.path(), "deadbeefdeadbeef").unwrap_err();
        assert!(matches!(err, ScopeError::GitError(_)));
        assert!(err.to_string().contains("deadbeefdeadbeef"));
    }

    #[test]
    fn test_exists_at_outside_repository_is_an_error() {
        let temp_dir = create_test_repo();
        let base = head_sha(temp_dir.path());

        assert!(exists_at(temp_dir.path(), &base, "README.md").unwrap());
        assert!(!exists_at(temp_dir.path(), &base, "missing.php").unwrap());

        let outside = TempDir::new().unwrap();
        let stray = outside.path().join("a.php").to_string_lossy().to_string();
        let err = exists_at(temp_dir.path(), &base, &stray).unwrap_err();
        assert!(matches!(err, ScopeError::GitError(_)));
    }

    #[test]
    fn test_exists_at_unknown_revision_is_an_error() {
        let temp_dir = create_test_repo();
        let result = exists_at(temp_dir.path(), "deadbeefdeadbeef", "README.md");
        assert!(matches!(result, Err(ScopeError::GitError(_))));
    }

    #[test]
    fn test_revision_source_canonicalizes_relative_dir() {
        let temp_dir = create_test_repo();
        let base = head_sha(temp_dir.path());

        let source = GitRevisionSource::new(relative_from_cwd(temp_dir.path()), &base).unwrap();

        assert!(source.repo_dir().is_absolute());
        assert_eq!(
            source.repo_dir(),
            std::fs::canonicalize(temp_dir.path()).unwrap()
        );
        assert_eq!(source.prior("README.md").unwrap().as_deref(), Some("# Test\n"));
    }
}
