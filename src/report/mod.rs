//! Checkstyle XML analysis reports.
//!
//! Reports are read once, scoped in memory and written back in place:
//!
//! ```xml
//! <checkstyle version="3.7.2">
//!   <file name="/repo/src/Help.js">
//!     <error line="10" column="3" severity="error" message="Missing semicolon" source="..."/>
//!   </file>
//! </checkstyle>
//! ```

use crate::error::{Result, ScopeError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;


const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Severity label attached to a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Ignore,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Ignore => "ignore",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue (`<error>` element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "@line")]
    pub line: usize,
    #[serde(rename = "@column", default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(rename = "@severity")]
    pub severity: Severity,
    #[serde(rename = "@message")]
    pub message: String,
    #[serde(rename = "@source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// All findings for one source file (`<file>` element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// File name as written by the analyzer, usually absolute.
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "error", default)]
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Repository-relative path (forward slashes) of this entry.
    ///
    /// `repo_dir` is expected to be canonical. An absolute name that does not
    /// start with it is canonicalized before a second attempt, so names written
    /// through a symlinked checkout still match. Returns `None` for names that
    /// end up outside `repo_dir`.
    pub fn relative_path(&self, repo_dir: &Path) -> Option<String> {
        let name = Path::new(&self.name);
        let inside = if name.is_absolute() {
            match name.strip_prefix(repo_dir) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => std::fs::canonicalize(name)
                    .ok()?
                    .strip_prefix(repo_dir)
                    .ok()?
                    .to_path_buf(),
            }
        } else {
            name.to_path_buf()
        };

        let relative = paths::clean_relative(&inside)?;
        Some(relative.to_string_lossy().replace('\\', "/"))
    }
}

/// A whole checkstyle report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "checkstyle")]
pub struct Report {
    #[serde(rename = "@version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "file", default)]
    pub files: Vec<FileReport>,
}

impl Report {
    /// Load a report from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScopeError::ReportError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        Self::from_xml(&content).map_err(|e| match e {
            ScopeError::ReportError(msg) => {
                ScopeError::ReportError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse a report from XML text.
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml)
            .map_err(|e| ScopeError::ReportError(format!("failed to parse checkstyle XML: {}", e)))
    }

    /// Serialize the report, declaration included.
    pub fn to_xml(&self) -> Result<String> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        self.serialize(serializer).map_err(|e| {
            ScopeError::ReportError(format!("failed to serialize checkstyle XML: {}", e))
        })?;

        Ok(format!("{}{}\n", XML_DECLARATION, body))
    }

    /// Write the report back to disk, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let xml = self.to_xml()?;
        std::fs::write(path, xml).map_err(|e| {
            ScopeError::ReportError(format!("failed to write '{}': {}", path.display(), e))
        })
    }

    /// Total number of findings across all files.
    pub fn finding_count(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }
}
