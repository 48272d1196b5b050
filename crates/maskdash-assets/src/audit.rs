//! Availability audit over the asset catalog.

use std::path::PathBuf;

use serde::Serialize;

use maskdash_core::{AssetCatalog, AssetRef};

use crate::store::ImageStore;

/// Outcome of loading one asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AssetState {
    Found { bytes: usize },
    Missing,
    Unreadable { reason: String },
}

/// Load result for a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetStatus {
    pub asset: AssetRef,
    pub path: PathBuf,
    #[serde(flatten)]
    pub state: AssetState,
}

impl AssetStatus {
    /// Load `asset` from `store` and record the outcome.
    pub fn probe(store: &dyn ImageStore, asset: &AssetRef) -> Self {
        let state = match store.load(asset) {
            Ok(bytes) => AssetState::Found { bytes: bytes.len() },
            Err(e) if e.is_not_found() => AssetState::Missing,
            Err(e) => AssetState::Unreadable {
                reason: e.to_string(),
            },
        };
        Self {
            asset: asset.clone(),
            path: store.locate(asset),
            state,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self.state, AssetState::Found { .. })
    }
}

/// Availability of every catalog asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    pub entries: Vec<AssetStatus>,
}

impl AssetReport {
    #[must_use]
    pub fn missing(&self) -> Vec<&AssetStatus> {
        self.entries.iter().filter(|e| !e.is_available()).collect()
    }

    #[must_use]
    pub fn all_available(&self) -> bool {
        self.entries.iter().all(AssetStatus::is_available)
    }
}

/// Probe every asset in `catalog`.
pub fn audit(store: &dyn ImageStore, catalog: &AssetCatalog) -> AssetReport {
    let entries: Vec<AssetStatus> = catalog
        .all()
        .into_iter()
        .map(|asset| AssetStatus::probe(store, asset))
        .collect();
    let missing = entries.iter().filter(|e| !e.is_available()).count();
    if missing > 0 {
        tracing::warn!(missing, total = entries.len(), "catalog assets unavailable");
    } else {
        tracing::info!(total = entries.len(), "all catalog assets available");
    }
    AssetReport { entries }
}
