//! Shared fixtures for the workspace integration tests.

use serde::Deserialize;

/// Expected resolution for one (section, model) input.
#[derive(Debug, Deserialize)]
pub struct GoldenResolution {
    /// Section label or slug as a user would type it.
    pub section: String,
    #[serde(default)]
    pub model: Option<String>,
    /// `kind` tag of the serialized result.
    pub kind: String,
    /// Images in display order; empty for table sections.
    #[serde(default)]
    pub assets: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub resolutions: Vec<GoldenResolution>,
}

/// Load `tests/testdata/resolutions_golden.json`.
pub fn load_golden_data() -> Result<GoldenData, String> {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/resolutions_golden.json"
    );
    let data = std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    serde_json::from_str(&data).map_err(|e| format!("{path}: {e}"))
}
