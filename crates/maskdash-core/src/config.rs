//! Dashboard data: asset catalog and constant tables.
//!
//! Built-in defaults cover every field. A JSON file may override any subset
//! of them; it is read once at startup and validated before use.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::AssetCatalog;
use crate::error::DashError;
use crate::tables::{ComparisonTable, MetricsTable};

const CONFIG_FILENAME: &str = "dashboard.json";
const CONFIG_DIR_NAME: &str = "maskdash";
const CWD_CONFIG_FILENAME: &str = ".maskdash.json";

/// Everything the dashboard displays, apart from the image bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub assets: AssetCatalog,
    pub metrics: MetricsTable,
    pub comparison: ComparisonTable,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    BuiltIn,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::BuiltIn => f.write_str("built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DashboardConfig {
    /// Reject configurations the dashboard cannot display faithfully.
    pub fn validate(&self) -> Result<(), DashError> {
        if self.assets.gradcam_aliased() {
            return Err(DashError::Config(
                "the four Grad-CAM images must be distinct files".to_string(),
            ));
        }
        if let Some(asset) = self.assets.escaping_asset() {
            return Err(DashError::Config(format!(
                "asset path {:?} must be relative to the asset root without \"..\"",
                asset.as_str()
            )));
        }
        self.metrics.validate()?;
        self.comparison.validate()?;
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, DashError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DashError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, DashError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DashError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
            .map_err(|e| DashError::Config(format!("{}: {}", path.display(), strip_prefix(&e))))
    }

    /// Pretty-printed JSON of this configuration.
    pub fn to_json(&self) -> Result<String, DashError> {
        serde_json::to_string_pretty(self).map_err(|e| DashError::Config(e.to_string()))
    }

    /// Load the active configuration.
    ///
    /// An explicit path must exist. Otherwise tries the XDG config dir, then
    /// the working directory, then falls back to the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), DashError> {
        if let Some(path) = explicit {
            let config = Self::load_from_path(path)?;
            tracing::info!(path = %path.display(), "loaded dashboard config");
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        for path in search_paths() {
            if path.exists() {
                let config = Self::load_from_path(&path)?;
                tracing::info!(path = %path.display(), "loaded dashboard config");
                return Ok((config, ConfigSource::File(path)));
            }
        }

        tracing::debug!("no dashboard config found, using built-in defaults");
        Ok((Self::default(), ConfigSource::BuiltIn))
    }
}

/// Candidate config locations, in lookup order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = xdg_config_path() {
        paths.push(p);
    }
    paths.push(cwd_config_path());
    paths
}

fn xdg_config_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

fn cwd_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CWD_CONFIG_FILENAME)
}

fn strip_prefix(err: &DashError) -> String {
    match err {
        DashError::Config(msg) => msg.clone(),
        other => other.to_string(),
    }
}
