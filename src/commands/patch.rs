//! `patch` command: one patch file per changed source file.

use crate::cli::PatchArgs;
use crate::config::Config;
use crate::error::{Result, ScopeError};
use crate::exit_codes;
use crate::github::{Comparison, GithubClient, ReviewApi};

pub fn cmd_patch(config: &Config, args: PatchArgs) -> Result<u8> {
    let client = GithubClient::new(config, &args.token)?;
    let comparison = client.compare(&args.base_sha, &args.head_sha)?;

    let written = write_patches(&comparison, config)?;
    println!("{}", written.join(" "));
    Ok(exit_codes::SUCCESS)
}

/// Write each selected file's patch to `<patch_dir>/<filename>`.
///
/// Skips removed files, names that would land outside `patch_dir`, files
/// outside `include_globs`, and files the service returned without a patch.
/// Returns the written file names in comparison order.
pub fn write_patches(comparison: &Comparison, config: &Config) -> Result<Vec<String>> {
    let matcher = config.include_matcher()?;
    let mut written = Vec::new();

    for file in &comparison.files {
        if file.is_removed() {
            log::debug!("skipping {} ({})", file.filename, file.status);
            continue;
        }
        let target = match config.patch_path(&file.filename) {
            Ok(target) => target,
            Err(e) => {
                log::warn!("{}, skipping", e);
                continue;
            }
        };
        if !matcher.is_match(&file.filename) {
            log::debug!("skipping {} (not in include_globs)", file.filename);
            continue;
        }
        let Some(patch) = &file.patch else {
            log::warn!("no patch returned for {}, skipping", file.filename);
            continue;
        };

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScopeError::UserError(format!(
                    "failed to create patch directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        std::fs::write(&target, patch).map_err(|e| {
            ScopeError::UserError(format!(
                "failed to write patch '{}': {}",
                target.display(),
                e
            ))
        })?;

        written.push(file.filename.clone());
    }

    log::info!("wrote {} patch file(s) to {}", written.len(), config.patch_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ChangedFile;
    use tempfile::TempDir;

    fn changed(filename: &str, status: &str, patch: Option<&str>) -> ChangedFile {
        ChangedFile {
            filename: filename.to_string(),
            status: status.to_string(),
            patch: patch.map(str::to_string),
        }
    }

    #[test]
    fn test_write_patches_filters_and_writes() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            patch_dir: temp.path().join("patches"),
            ..Default::default()
        };
        let comparison = Comparison {
            files: vec![
                changed("custom/include/javascript/Help.js", "modified", Some("@@ -1 +1 @@\n-a\n+b")),
                changed("README.md", "modified", Some("@@ -1 +1 @@\n-a\n+b")),
                changed("old/Gone.php", "removed", Some("@@ -1 +0,0 @@\n-x")),
                changed("big/Generated.php", "modified", None),
                changed("index.php", "added", Some("@@ -0,0 +1 @@\n+<?php")),
            ],
        };

        let written = write_patches(&comparison, &config).unwrap();

        assert_eq!(written, vec!["custom/include/javascript/Help.js", "index.php"]);
        let help = std::fs::read_to_string(
            temp.path().join("patches/custom/include/javascript/Help.js"),
        )
        .unwrap();
        assert_eq!(help, "@@ -1 +1 @@\n-a\n+b");
        assert!(!temp.path().join("patches/README.md").exists());
        assert!(!temp.path().join("patches/old/Gone.php").exists());
    }

    #[test]
    fn test_write_patches_rejects_escaping_names() {
        let temp = TempDir::new().unwrap();
        let patch_dir = temp.path().join("patches");
        let outside = temp.path().join("outside.php");
        let config = Config {
            patch_dir: patch_dir.clone(),
            ..Default::default()
        };
        let comparison = Comparison {
            files: vec![
                changed("../outside.php", "modified", Some("@@ -1 +1 @@\n-a\n+b")),
                changed(&outside.to_string_lossy(), "modified", Some("@@ -1 +1 @@\n-a\n+b")),
                changed("src/ok.php", "modified", Some("@@ -1 +1 @@\n-a\n+b")),
            ],
        };

        let written = write_patches(&comparison, &config).unwrap();

        assert_eq!(written, vec!["src/ok.php"]);
        assert!(!outside.exists());
        assert!(patch_dir.join("src/ok.php").exists());
    }

    #[test]
    fn test_write_patches_empty_comparison() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            patch_dir: temp.path().to_path_buf(),
            ..Default::default()
        };
        let written = write_patches(&Comparison::default(), &config).unwrap();
        assert!(written.is_empty());
    }
}
