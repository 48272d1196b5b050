//! Default asset names, chart colors, and exit codes.

use crate::report::Rgb;

/// MobileNetV2 training-accuracy plot.
pub const MOBILENET_ACCURACY_PLOT: &str = "accuracy_plot.png";

/// Custom CNN training-accuracy plot.
pub const CNN_ACCURACY_PLOT: &str = "simple_cnn_accuracy.png";

/// MobileNetV2 confusion matrix. There is no Custom CNN counterpart.
pub const CONFUSION_MATRIX: &str = "confusion_matrix.png";

/// MobileNetV2 Grad-CAM on a masked face.
pub const MOBILENET_GRADCAM_WITH_MASK: &str = "gradcam_with_mask.jpg";

/// MobileNetV2 Grad-CAM on an unmasked face.
pub const MOBILENET_GRADCAM_WITHOUT_MASK: &str = "gradcam_without_mask.jpg";

/// Custom CNN Grad-CAM on a masked face.
pub const CNN_GRADCAM_WITH_MASK: &str = "cnn_gradcam_with_mask.jpg";

/// Custom CNN Grad-CAM on an unmasked face.
pub const CNN_GRADCAM_WITHOUT_MASK: &str = "cnn_gradcam_without_mask.jpg";

/// Row label for the masked class.
pub const LABEL_WITH_MASK: &str = "with_mask";

/// Row label for the unmasked class.
pub const LABEL_WITHOUT_MASK: &str = "without_mask";

/// Precision series color.
pub const PRECISION_COLOR: Rgb = Rgb { r: 0x1f, g: 0x77, b: 0xb4 };
/// Recall series color.
pub const RECALL_COLOR: Rgb = Rgb { r: 0xff, g: 0x7f, b: 0x0e };
/// F1 series color.
pub const F1_COLOR: Rgb = Rgb { r: 0x2c, g: 0xa0, b: 0x2c };

/// Dashboard title shown in page chrome.
pub const DASHBOARD_TITLE: &str = "Face Mask Detection: Model Dashboard";

/// Exit codes for the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// One or more catalog assets could not be loaded.
    pub const ERROR_MISSING_ASSETS: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Unknown section or model on the command line.
    pub const ERROR_USAGE: i32 = 64;
}
