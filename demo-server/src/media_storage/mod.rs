//! Persists downloaded image media into the static directory

mod error;

use std::path::{Path, PathBuf};

pub use error::{MediaStorageError, MediaStorageResult};
use idverify_sdk::Media;
use tracing::info;

/// Writes media files under a single directory
#[derive(Debug, Clone)]
pub struct MediaStorage {
    dir: PathBuf,
}

impl MediaStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves `media` as `<name>.<extension>` and returns the file name.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` is empty or contains anything other than
    ///   ASCII alphanumerics, `-` and `_`
    /// - `Io` if the directory cannot be created or the file written
    pub async fn save(&self, name: &str, media: &Media) -> MediaStorageResult<String> {
        if !is_safe_name(name) {
            return Err(MediaStorageError::InvalidName(name.to_string()));
        }

        let file_name = format!("{name}.{}", media.file_extension());
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&file_name), media.content()).await?;

        info!("Saved {} media to {file_name}", media.mime_type());
        Ok(file_name)
    }
}

fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
