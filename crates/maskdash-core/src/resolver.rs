//! Artifact resolver: section + model to assets or tables.

use serde::Serialize;

use crate::asset::AssetRef;
use crate::config::DashboardConfig;
use crate::error::DashError;
use crate::section::{ModelChoice, Section};
use crate::tables::{ComparisonTable, MetricsTable};

/// Everything a section needs in order to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedAssets {
    /// Training-accuracy plots for both models.
    AccuracyPlots {
        mobilenet: AssetRef,
        custom_cnn: AssetRef,
    },
    /// MobileNetV2 confusion matrix.
    ConfusionMatrix { image: AssetRef },
    /// Grad-CAM pair for the chosen model.
    GradCam {
        model: ModelChoice,
        with_mask: AssetRef,
        without_mask: AssetRef,
    },
    Comparison { table: ComparisonTable },
    Report { table: MetricsTable },
}

impl ResolvedAssets {
    /// Images referenced by this result; empty for table sections.
    #[must_use]
    pub fn asset_refs(&self) -> Vec<&AssetRef> {
        match self {
            ResolvedAssets::AccuracyPlots {
                mobilenet,
                custom_cnn,
            } => vec![mobilenet, custom_cnn],
            ResolvedAssets::ConfusionMatrix { image } => vec![image],
            ResolvedAssets::GradCam {
                with_mask,
                without_mask,
                ..
            } => vec![with_mask, without_mask],
            ResolvedAssets::Comparison { .. } | ResolvedAssets::Report { .. } => Vec::new(),
        }
    }

    /// Images paired with the caption shown above each one.
    #[must_use]
    pub fn captioned_assets(&self) -> Vec<(&'static str, &AssetRef)> {
        match self {
            ResolvedAssets::AccuracyPlots {
                mobilenet,
                custom_cnn,
            } => vec![("MobileNetV2", mobilenet), ("Custom CNN", custom_cnn)],
            ResolvedAssets::ConfusionMatrix { image } => vec![("MobileNetV2", image)],
            ResolvedAssets::GradCam {
                with_mask,
                without_mask,
                ..
            } => vec![("With Mask", with_mask), ("Without Mask", without_mask)],
            ResolvedAssets::Comparison { .. } | ResolvedAssets::Report { .. } => Vec::new(),
        }
    }

    /// Section this result belongs to.
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            ResolvedAssets::AccuracyPlots { .. } => Section::ModelAccuracy,
            ResolvedAssets::ConfusionMatrix { .. } => Section::ConfusionMatrix,
            ResolvedAssets::GradCam { .. } => Section::GradCamViewer,
            ResolvedAssets::Comparison { .. } => Section::ModelComparison,
            ResolvedAssets::Report { .. } => Section::ClassificationReport,
        }
    }
}

/// Resolves sections against a loaded [`DashboardConfig`].
#[derive(Debug, Clone, Default)]
pub struct ArtifactResolver {
    config: DashboardConfig,
}

impl ArtifactResolver {
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Resolve `section` to the assets or table it displays.
    ///
    /// `model` is only consulted for [`Section::GradCamViewer`], which fails
    /// with [`DashError::MissingModelChoice`] when it is absent.
    pub fn resolve(
        &self,
        section: Section,
        model: Option<ModelChoice>,
    ) -> Result<ResolvedAssets, DashError> {
        let model = match model {
            Some(model) => model,
            None if section.requires_model() => return Err(DashError::MissingModelChoice),
            None => ModelChoice::default(),
        };
        Ok(self.resolve_with(section, model))
    }

    /// Resolve, substituting the default model when none was chosen.
    #[must_use]
    pub fn resolve_or_default(&self, section: Section, model: Option<ModelChoice>) -> ResolvedAssets {
        self.resolve_with(section, model.unwrap_or_default())
    }

    fn resolve_with(&self, section: Section, model: ModelChoice) -> ResolvedAssets {
        let assets = &self.config.assets;
        let resolved = match section {
            Section::ModelAccuracy => ResolvedAssets::AccuracyPlots {
                mobilenet: assets.mobilenet_accuracy.clone(),
                custom_cnn: assets.cnn_accuracy.clone(),
            },
            Section::ConfusionMatrix => ResolvedAssets::ConfusionMatrix {
                image: assets.confusion_matrix.clone(),
            },
            Section::GradCamViewer => {
                let pair = assets.gradcam(model);
                ResolvedAssets::GradCam {
                    model,
                    with_mask: pair.with_mask.clone(),
                    without_mask: pair.without_mask.clone(),
                }
            }
            Section::ModelComparison => ResolvedAssets::Comparison {
                table: self.config.comparison.clone(),
            },
            Section::ClassificationReport => ResolvedAssets::Report {
                table: self.config.metrics.clone(),
            },
        };
        tracing::debug!(section = section.slug(), model = model.slug(), "resolved section");
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ArtifactResolver {
        ArtifactResolver::default()
    }

    fn names(resolved: &ResolvedAssets) -> Vec<&str> {
        resolved.asset_refs().iter().map(|a| a.as_str()).collect()
    }

    #[test]
    fn model_accuracy_returns_both_plots() {
        let r = resolver().resolve(Section::ModelAccuracy, None).unwrap();
        assert_eq!(names(&r), vec!["accuracy_plot.png", "simple_cnn_accuracy.png"]);
    }

    #[test]
    fn model_accuracy_ignores_model() {
        let r = resolver();
        let a = r.resolve(Section::ModelAccuracy, None).unwrap();
        let b = r
            .resolve(Section::ModelAccuracy, Some(ModelChoice::CustomCNN))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn confusion_matrix_ignores_model() {
        let r = resolver();
        for model in [None, Some(ModelChoice::MobileNetV2), Some(ModelChoice::CustomCNN)] {
            let resolved = r.resolve(Section::ConfusionMatrix, model).unwrap();
            assert_eq!(names(&resolved), vec!["confusion_matrix.png"]);
        }
    }

    #[test]
    fn gradcam_mobilenet_pair() {
        let r = resolver()
            .resolve(Section::GradCamViewer, Some(ModelChoice::MobileNetV2))
            .unwrap();
        assert_eq!(
            names(&r),
            vec!["gradcam_with_mask.jpg", "gradcam_without_mask.jpg"]
        );
    }

    #[test]
    fn gradcam_cnn_pair_is_distinct() {
        let r = resolver();
        let cnn = r
            .resolve(Section::GradCamViewer, Some(ModelChoice::CustomCNN))
            .unwrap();
        let mobilenet = r
            .resolve(Section::GradCamViewer, Some(ModelChoice::MobileNetV2))
            .unwrap();
        assert_eq!(
            names(&cnn),
            vec!["cnn_gradcam_with_mask.jpg", "cnn_gradcam_without_mask.jpg"]
        );
        for asset in cnn.asset_refs() {
            assert!(!mobilenet.asset_refs().contains(&asset));
        }
    }

    #[test]
    fn gradcam_without_model_fails() {
        assert_eq!(
            resolver().resolve(Section::GradCamViewer, None),
            Err(DashError::MissingModelChoice)
        );
    }

    #[test]
    fn comparison_returns_table() {
        match resolver().resolve(Section::ModelComparison, None).unwrap() {
            ResolvedAssets::Comparison { table } => {
                let row = table.row("MobileNetV2").unwrap();
                assert!((row.validation_accuracy - 0.9501).abs() < f64::EPSILON);
                assert_eq!(row.params, "~2.2M");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn report_returns_metrics() {
        let r = resolver()
            .resolve(Section::ClassificationReport, None)
            .unwrap();
        assert!(r.asset_refs().is_empty());
        assert!(matches!(r, ResolvedAssets::Report { .. }));
    }

    #[test]
    fn resolved_section_matches_request() {
        let r = resolver();
        for section in Section::ALL {
            let resolved = r.resolve_or_default(section, None);
            assert_eq!(resolved.section(), section);
        }
    }

    #[test]
    fn captions_cover_every_asset() {
        let r = resolver();
        for section in Section::ALL {
            let resolved = r.resolve_or_default(section, None);
            assert_eq!(
                resolved.captioned_assets().len(),
                resolved.asset_refs().len()
            );
        }
    }

    #[test]
    fn gradcam_captions() {
        let r = resolver().resolve_or_default(Section::GradCamViewer, None);
        let captions: Vec<_> = r.captioned_assets().iter().map(|(c, _)| *c).collect();
        assert_eq!(captions, vec!["With Mask", "Without Mask"]);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let r = resolver().resolve(Section::ConfusionMatrix, None).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "confusion_matrix");
        assert_eq!(json["image"], "confusion_matrix.png");
    }
}
