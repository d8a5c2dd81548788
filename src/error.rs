//! Error types for the extraction pipeline.
//!
//! Every stage after argument parsing reports through [`ExtractError`]; the
//! top-level handler in `pipeline` cleans up the workspace and returns the
//! error unchanged.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Errors that abort the extraction pipeline.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A git subcommand could not be spawned or exited non-zero.
    #[error("git {command} failed: {message}")]
    Git { command: String, message: String },

    /// A filesystem operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Walking a directory tree failed.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// The archive writer reported an error.
    #[error("archive write failed: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ExtractError {
    /// Build a `Git` variant conveniently.
    pub fn git(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Git {
            command: command.into(),
            message: message.into(),
        }
    }
}
