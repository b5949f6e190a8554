/*!
 * Error types for the vidsearch application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing and indexing subtitle files
#[derive(Error, Debug)]
pub enum SubtitleError {
    /// The subtitle file does not exist on disk
    #[error("Subtitle file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// The file bytes could not be decoded with any supported encoding
    #[error("Could not decode subtitle file: {0:?}")]
    EncodingError(PathBuf),

    /// The file content does not conform to the expected subtitle format
    #[error("Invalid subtitle format: {0}")]
    InvalidFormat(String),

    /// No registered parser handles the file's extension
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),

    /// Error enumerating a directory or reading file contents
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle parsing or scanning
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
