//! Error types for the linescope CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for linescope operations.
#[derive(Error, Debug)]
pub enum ScopeError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be read, parsed or validated.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The analysis report could not be read or written.
    #[error("Report error: {0}")]
    ReportError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The review API answered with a failure or could not be reached.
    #[error("HTTP request failed ({status}): {message}")]
    HttpError { status: u16, message: String },

    /// A `@@` line in a diff that does not carry a parsable old range.
    #[error("Malformed hunk header: {0}")]
    MalformedHunkHeader(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScopeError {
    /// Returns the exit code for this error type.
    ///
    /// Every error is a structural failure; finding counts own the rest of
    /// the exit code range.
    pub fn exit_code(&self) -> u8 {
        exit_codes::FAILURE
    }
}

/// Result type alias for linescope operations.
pub type Result<T> = std::result::Result<T, ScopeError>;
