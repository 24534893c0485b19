//! Error types for media persistence

use thiserror::Error;

/// Result type for media storage operations
pub type MediaStorageResult<T> = Result<T, MediaStorageError>;

/// Errors that can occur while saving media
#[derive(Error, Debug)]
pub enum MediaStorageError {
    /// The media id cannot be used as a file name
    #[error("Invalid media name: {0}")]
    InvalidName(String),

    /// Filesystem failure
    #[error("Failed to write media: {0}")]
    Io(#[from] std::io::Error),
}
