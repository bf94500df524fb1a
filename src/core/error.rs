//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`LibGitError`] which provides error handling for all
//! library-panel git operations. It uses `thiserror` for ergonomic error
//! definitions and includes specialized constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`LibGitError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, LibGitError>`
//!
//! # Error Categories
//! - **Git operations**: git2 library errors, unbound repository handle
//! - **Remote protocol**: pull/push failures carrying one human-readable message
//! - **File operations**: I/O errors, UTF-8 issues
//! - **Configuration**: config directory and serialization errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for the library sync engine
#[derive(Error, Debug)]
pub enum LibGitError {
    // Repository handle errors
    #[error("No git repository bound to the library path")]
    NoRepository,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("Repository has no working directory")]
    BareRepository,

    // User-initiated command failures; the message is shown verbatim
    #[error("Failed to pull library:\n{message}")]
    PullFailed { message: String },

    #[error("Failed to push library:\n{message}")]
    PushFailed { message: String },

    #[error("Commit failed: {message}")]
    CommitFailed { message: String },

    // File operation errors
    #[error("Library path does not exist: {}", path.display())]
    LibraryPathNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 in file content: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    // Configuration errors
    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{}': {source}", path.display())]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using LibGitError
pub type Result<T> = std::result::Result<T, LibGitError>;

impl LibGitError {
    /// Create a pull failure carrying the protocol's error message
    pub fn pull_failed(message: impl Into<String>) -> Self {
        Self::PullFailed {
            message: message.into(),
        }
    }

    /// Create a push failure carrying the protocol's error message
    pub fn push_failed(message: impl Into<String>) -> Self {
        Self::PushFailed {
            message: message.into(),
        }
    }

    /// Create a commit failure with a specific message
    pub fn commit_failed(message: impl Into<String>) -> Self {
        Self::CommitFailed {
            message: message.into(),
        }
    }

    /// Create a library path not found error
    pub fn library_path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::LibraryPathNotFound { path: path.into() }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// The single human-readable message to surface for user-initiated
    /// command failures (pull/push/commit)
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
