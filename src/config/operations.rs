//! Config loading, validation, and override operations.

use super::model::Config;
use crate::error::{Result, ScopeError};
use crate::paths;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "linescope.yaml";

/// Values supplied on the command line; `Some` wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub repo_owner: Option<String>,
    pub repo_name: Option<String>,
    pub repo_dir: Option<PathBuf>,
    pub patch_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScopeError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load the explicit config file, or `linescope.yaml` in `cwd` if it
    /// exists, or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = cwd.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            log::debug!("using config file {}", implicit.display());
            Self::load(implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ScopeError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line values on top of this config.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(api_url) = overrides.api_url {
            self.api_url = api_url;
        }
        if let Some(owner) = overrides.repo_owner {
            self.repo_owner = owner;
        }
        if let Some(name) = overrides.repo_name {
            self.repo_name = name;
        }
        if let Some(repo_dir) = overrides.repo_dir {
            self.repo_dir = repo_dir;
        }
        if let Some(patch_dir) = overrides.patch_dir {
            self.patch_dir = patch_dir;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `api_url` must be an http(s) URL
    /// - `user_agent` must be non-empty
    /// - `include_globs` must all compile
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(ScopeError::ConfigError(format!(
                "api_url must start with http:// or https:// (found '{}')",
                self.api_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ScopeError::ConfigError(
                "user_agent must be non-empty".to_string(),
            ));
        }

        self.include_matcher()?;
        Ok(())
    }

    /// Compile `include_globs` into a matcher.
    pub fn include_matcher(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.include_globs {
            let glob = Glob::new(pattern).map_err(|e| {
                ScopeError::ConfigError(format!("invalid include glob '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| ScopeError::ConfigError(format!("failed to build include globs: {}", e)))
    }

    /// Owner and name of the repository, required by every API command.
    pub fn repository(&self) -> Result<(&str, &str)> {
        if self.repo_owner.is_empty() || self.repo_name.is_empty() {
            return Err(ScopeError::ConfigError(
                "repository not configured: set repo_owner and repo_name in linescope.yaml \
                 or pass --owner and --repo"
                    .to_string(),
            ));
        }
        Ok((&self.repo_owner, &self.repo_name))
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Where the patch for repository-relative `file` lives.
    ///
    /// Names that are absolute or climb out with `..` are rejected so a
    /// patch is never written outside `patch_dir`.
    pub fn patch_path(&self, file: &str) -> Result<PathBuf> {
        let relative = paths::clean_relative(Path::new(file)).ok_or_else(|| {
            ScopeError::UserError(format!(
                "'{}' is not a relative path inside the repository",
                file
            ))
        })?;
        Ok(self.patch_dir.join(relative))
    }
}
