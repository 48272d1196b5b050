//! Golden file integration tests.
//!
//! Reads tests/testdata/resolutions_golden.json and checks that routing user
//! input through the selector and resolver yields the recorded assets.

use maskdash_assets::{audit, FsImageStore};
use maskdash_core::{
    select, select_model, ArtifactResolver, DashboardConfig, ResolvedAssets, Section,
};
use maskdash_tests::load_golden_data;

fn resolve(section: &str, model: Option<&str>) -> ResolvedAssets {
    let section = select(section).unwrap();
    let model = model.map(|m| select_model(m).unwrap()).unwrap_or_default();
    ArtifactResolver::default()
        .resolve(section, Some(model))
        .unwrap()
}

#[test]
fn golden_resolutions() {
    let data = load_golden_data().unwrap();
    assert!(!data.description.is_empty());
    for entry in &data.resolutions {
        let resolved = resolve(&entry.section, entry.model.as_deref());
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["kind"], entry.kind.as_str(), "{entry:?}");

        let assets: Vec<&str> = resolved.asset_refs().iter().map(|a| a.as_str()).collect();
        assert_eq!(assets, entry.assets, "{entry:?}");
    }
}

#[test]
fn golden_covers_every_section() {
    let data = load_golden_data().unwrap();
    for section in Section::ALL {
        assert!(
            data.resolutions
                .iter()
                .any(|e| select(&e.section).unwrap() == section),
            "no golden entry for {section}"
        );
    }
}

#[test]
fn gradcam_pairs_never_overlap() {
    let mobilenet = resolve("gradcam", Some("mobilenet"));
    let cnn = resolve("gradcam", Some("cnn"));
    for asset in cnn.asset_refs() {
        assert!(!mobilenet.asset_refs().contains(&asset));
    }
}

#[test]
fn config_file_drives_resolution_and_audit() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("dashboard.json");
    std::fs::write(
        &config_path,
        r#"{"assets": {"confusion_matrix": "plots/cm.png"}}"#,
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("plots")).unwrap();
    std::fs::write(dir.path().join("plots/cm.png"), b"png").unwrap();

    let (config, _) = DashboardConfig::load(Some(&config_path)).unwrap();
    let resolver = ArtifactResolver::new(config.clone());
    let resolved = resolver.resolve(Section::ConfusionMatrix, None).unwrap();
    assert_eq!(resolved.asset_refs()[0].as_str(), "plots/cm.png");

    let report = audit(&FsImageStore::new(dir.path()), &config.assets);
    let available: Vec<_> = report
        .entries
        .iter()
        .filter(|e| e.is_available())
        .map(|e| e.asset.as_str())
        .collect();
    assert_eq!(available, vec!["plots/cm.png"]);
}
