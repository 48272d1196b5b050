//! Image store trait and implementations.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use maskdash_core::AssetRef;

use crate::error::AssetError;

/// Source of precomputed image bytes.
pub trait ImageStore: Send + Sync {
    /// Load the bytes behind `asset`.
    fn load(&self, asset: &AssetRef) -> Result<Arc<[u8]>, AssetError>;

    /// Where `asset` lives, for display and for opening in a viewer.
    fn locate(&self, asset: &AssetRef) -> PathBuf;
}

/// Filesystem store rooted at an asset directory, with a read cache.
pub struct FsImageStore {
    root: PathBuf,
    cache: RwLock<HashMap<AssetRef, Arc<[u8]>>>,
}

impl FsImageStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of assets currently cached.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Drop every cached asset so the next load rereads the disk.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }
}

impl ImageStore for FsImageStore {
    fn load(&self, asset: &AssetRef) -> Result<Arc<[u8]>, AssetError> {
        // Check cache first
        if let Some(bytes) = self.cache.read().get(asset) {
            return Ok(Arc::clone(bytes));
        }

        let path = self.locate(asset);
        let bytes: Arc<[u8]> = match std::fs::read(&path) {
            Ok(bytes) => bytes.into(),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "asset not found");
                return Err(AssetError::NotFound(path));
            }
            Err(source) => return Err(AssetError::Io { path, source }),
        };
        tracing::debug!(asset = %asset, bytes = bytes.len(), "loaded asset");

        self.cache
            .write()
            .insert(asset.clone(), Arc::clone(&bytes));
        Ok(bytes)
    }

    fn locate(&self, asset: &AssetRef) -> PathBuf {
        self.root.join(asset.as_str())
    }
}

/// In-memory store keyed by asset path.
#[derive(Debug, Clone, Default)]
pub struct MemoryImageStore {
    files: HashMap<AssetRef, Arc<[u8]>>,
}

impl MemoryImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset.
    #[must_use]
    pub fn with(mut self, asset: impl Into<AssetRef>, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes: Vec<u8> = bytes.into();
        self.files.insert(asset.into(), bytes.into());
        self
    }
}

impl ImageStore for MemoryImageStore {
    fn load(&self, asset: &AssetRef) -> Result<Arc<[u8]>, AssetError> {
        self.files
            .get(asset)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(self.locate(asset)))
    }

    fn locate(&self, asset: &AssetRef) -> PathBuf {
        PathBuf::from(asset.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[(&str, &[u8])]) -> (TempDir, FsImageStore) {
        let dir = TempDir::new().unwrap();
        for (name, bytes) in files {
            std::fs::write(dir.path().join(name), bytes).unwrap();
        }
        let store = FsImageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn loads_existing_file() {
        let (_dir, store) = store_with(&[("confusion_matrix.png", b"\x89PNG")]);
        let bytes = store.load(&AssetRef::new("confusion_matrix.png")).unwrap();
        assert_eq!(&*bytes, b"\x89PNG");
    }

    #[test]
    fn missing_file_is_not_found() {
        let (dir, store) = store_with(&[]);
        let err = store.load(&AssetRef::new("gradcam_with_mask.jpg")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), dir.path().join("gradcam_with_mask.jpg"));
    }

    #[test]
    fn loads_are_cached() {
        let (dir, store) = store_with(&[("a.png", b"one")]);
        let asset = AssetRef::new("a.png");
        let first = store.load(&asset).unwrap();
        assert_eq!(store.cached_len(), 1);

        // Cached bytes survive the file changing on disk
        std::fs::write(dir.path().join("a.png"), b"two").unwrap();
        let second = store.load(&asset).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        store.clear_cache();
        assert_eq!(&*store.load(&asset).unwrap(), b"two");
    }

    #[test]
    fn missing_files_are_not_cached() {
        let (_dir, store) = store_with(&[]);
        let _ = store.load(&AssetRef::new("absent.png"));
        assert_eq!(store.cached_len(), 0);
    }

    #[test]
    fn locate_joins_root() {
        let store = FsImageStore::new("/srv/artifacts");
        assert_eq!(
            store.locate(&AssetRef::new("accuracy_plot.png")),
            PathBuf::from("/srv/artifacts/accuracy_plot.png")
        );
        assert_eq!(store.root(), Path::new("/srv/artifacts"));
    }

    #[test]
    fn memory_store() {
        let store = MemoryImageStore::new().with("a.png", b"abc".to_vec());
        assert_eq!(&*store.load(&AssetRef::new("a.png")).unwrap(), b"abc");
        assert!(store.load(&AssetRef::new("b.png")).unwrap_err().is_not_found());
    }
}
