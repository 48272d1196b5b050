//! Navigation selector: dashboard sections and model choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashError;

/// A dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    #[default]
    ModelAccuracy,
    ConfusionMatrix,
    GradCamViewer,
    ModelComparison,
    ClassificationReport,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 5] = [
        Section::ModelAccuracy,
        Section::ConfusionMatrix,
        Section::GradCamViewer,
        Section::ModelComparison,
        Section::ClassificationReport,
    ];

    /// Human-readable label, as shown in the navigation list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::ModelAccuracy => "Model Accuracy",
            Section::ConfusionMatrix => "Confusion Matrix",
            Section::GradCamViewer => "Grad-CAM Viewer",
            Section::ModelComparison => "Model Comparison",
            Section::ClassificationReport => "Classification Report",
        }
    }

    /// Short command-line name.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::ModelAccuracy => "accuracy",
            Section::ConfusionMatrix => "confusion",
            Section::GradCamViewer => "gradcam",
            Section::ModelComparison => "comparison",
            Section::ClassificationReport => "report",
        }
    }

    /// One-line caption displayed under the section heading.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Section::ModelAccuracy => {
                "Training and validation accuracy per epoch for both models."
            }
            Section::ConfusionMatrix => {
                "Confusion matrix of MobileNetV2 predictions on the held-out test set."
            }
            Section::GradCamViewer => {
                "Visualizations generated using Grad-CAM. Highlighted regions indicate where \
                 the model focused when making predictions."
            }
            Section::ModelComparison => "Summary statistics for MobileNetV2 and the custom CNN.",
            Section::ClassificationReport => {
                "Per-class precision, recall and F1 score on the test set."
            }
        }
    }

    /// Whether resolving this section needs a [`ModelChoice`].
    #[must_use]
    pub fn requires_model(self) -> bool {
        matches!(self, Section::GradCamViewer)
    }

    /// Position in [`Section::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::ModelAccuracy => 0,
            Section::ConfusionMatrix => 1,
            Section::GradCamViewer => 2,
            Section::ModelComparison => 3,
            Section::ClassificationReport => 4,
        }
    }

    /// Section at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Next section, wrapping around.
    #[must_use]
    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around.
    #[must_use]
    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        select(s)
    }
}

/// A model whose artifacts the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelChoice {
    #[default]
    MobileNetV2,
    CustomCNN,
}

impl ModelChoice {
    /// All models in display order.
    pub const ALL: [ModelChoice; 2] = [ModelChoice::MobileNetV2, ModelChoice::CustomCNN];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ModelChoice::MobileNetV2 => "MobileNetV2",
            ModelChoice::CustomCNN => "Custom CNN",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ModelChoice::MobileNetV2 => "mobilenet",
            ModelChoice::CustomCNN => "cnn",
        }
    }

    /// The other model.
    #[must_use]
    pub fn toggle(self) -> ModelChoice {
        match self {
            ModelChoice::MobileNetV2 => ModelChoice::CustomCNN,
            ModelChoice::CustomCNN => ModelChoice::MobileNetV2,
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelChoice {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        select_model(s)
    }
}

/// Map a navigation label or slug to a [`Section`].
///
/// Matching ignores case and surrounding whitespace.
pub fn select(input: &str) -> Result<Section, DashError> {
    let wanted = input.trim();
    Section::ALL
        .into_iter()
        .find(|s| s.label().eq_ignore_ascii_case(wanted) || s.slug().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DashError::InvalidSection(input.to_string()))
}

/// Map a model label or slug to a [`ModelChoice`].
pub fn select_model(input: &str) -> Result<ModelChoice, DashError> {
    let wanted = input.trim();
    ModelChoice::ALL
        .into_iter()
        .find(|m| m.label().eq_ignore_ascii_case(wanted) || m.slug().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DashError::InvalidModel(input.to_string()))
}
