//! Image store errors.

use std::path::PathBuf;

/// Failure to load an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No file exists at the resolved path.
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// Path the store tried to read.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            AssetError::NotFound(path) | AssetError::Io { path, .. } => path,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}
