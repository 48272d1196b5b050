//! Error type for section routing and configuration.

/// Errors raised by the dashboard core.
///
/// All variants are caller contract violations or bad configuration.
/// Missing image files are not represented here; they belong to the
/// image store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashError {
    /// Input does not name one of the dashboard sections.
    #[error("unknown section: {0:?}")]
    InvalidSection(String),

    /// Input does not name one of the models.
    #[error("unknown model: {0:?}")]
    InvalidModel(String),

    /// The Grad-CAM viewer was asked to resolve without a model.
    #[error("the Grad-CAM viewer requires a model choice")]
    MissingModelChoice,

    /// The dashboard configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
