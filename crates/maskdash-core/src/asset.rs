//! Asset identifiers and the catalog of precomputed images.

use std::fmt;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::section::ModelChoice;

/// Path of a precomputed image, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path stays inside the asset root: relative, non-empty,
    /// and free of `..` components.
    #[must_use]
    pub fn is_contained(&self) -> bool {
        let path = Path::new(&self.0);
        !self.0.is_empty()
            && !path.has_root()
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Grad-CAM image pair for one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradCamPair {
    pub with_mask: AssetRef,
    pub without_mask: AssetRef,
}

/// File names of every precomputed image the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetCatalog {
    /// MobileNetV2 training-accuracy plot.
    pub mobilenet_accuracy: AssetRef,
    /// Custom CNN training-accuracy plot.
    pub cnn_accuracy: AssetRef,
    /// MobileNetV2 confusion matrix.
    pub confusion_matrix: AssetRef,
    /// MobileNetV2 Grad-CAM pair.
    pub mobilenet_gradcam: GradCamPair,
    /// Custom CNN Grad-CAM pair.
    pub cnn_gradcam: GradCamPair,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self {
            mobilenet_accuracy: constants::MOBILENET_ACCURACY_PLOT.into(),
            cnn_accuracy: constants::CNN_ACCURACY_PLOT.into(),
            confusion_matrix: constants::CONFUSION_MATRIX.into(),
            mobilenet_gradcam: GradCamPair {
                with_mask: constants::MOBILENET_GRADCAM_WITH_MASK.into(),
                without_mask: constants::MOBILENET_GRADCAM_WITHOUT_MASK.into(),
            },
            cnn_gradcam: GradCamPair {
                with_mask: constants::CNN_GRADCAM_WITH_MASK.into(),
                without_mask: constants::CNN_GRADCAM_WITHOUT_MASK.into(),
            },
        }
    }
}

impl AssetCatalog {
    /// Grad-CAM pair for `model`.
    #[must_use]
    pub fn gradcam(&self, model: ModelChoice) -> &GradCamPair {
        match model {
            ModelChoice::MobileNetV2 => &self.mobilenet_gradcam,
            ModelChoice::CustomCNN => &self.cnn_gradcam,
        }
    }

    /// Every asset in the catalog, in section order.
    #[must_use]
    pub fn all(&self) -> Vec<&AssetRef> {
        vec![
            &self.mobilenet_accuracy,
            &self.cnn_accuracy,
            &self.confusion_matrix,
            &self.mobilenet_gradcam.with_mask,
            &self.mobilenet_gradcam.without_mask,
            &self.cnn_gradcam.with_mask,
            &self.cnn_gradcam.without_mask,
        ]
    }

    /// Whether any two of the four Grad-CAM images are the same file.
    #[must_use]
    pub fn gradcam_aliased(&self) -> bool {
        let images = [
            &self.mobilenet_gradcam.with_mask,
            &self.mobilenet_gradcam.without_mask,
            &self.cnn_gradcam.with_mask,
            &self.cnn_gradcam.without_mask,
        ];
        images
            .iter()
            .enumerate()
            .any(|(i, a)| images[i + 1..].contains(a))
    }

    /// First asset whose path could escape the asset root.
    #[must_use]
    pub fn escaping_asset(&self) -> Option<&AssetRef> {
        self.all().into_iter().find(|a| !a.is_contained())
    }
}
