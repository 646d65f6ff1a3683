//! Error types for Homebrew operations.

use thiserror::Error;

/// Errors that can occur during Homebrew operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Homebrew is not installed or not found in PATH
    #[error("Homebrew not found. Install it from https://brew.sh")]
    BrewNotFound,

    /// Command execution failed
    #[error("command failed: {message}")]
    CommandFailed {
        /// Description of what command failed
        message: String,
        /// Standard error output from the failed command
        stderr: String,
    },

    /// Download of the Homebrew install script failed
    #[error("download failed: {0}")]
    Download(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Homebrew operations.
pub type Result<T> = std::result::Result<T, Error>;
