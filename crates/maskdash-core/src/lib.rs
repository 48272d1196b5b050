//! # maskdash-core
//!
//! Core library for the maskdash artifact dashboard.
//! Maps navigation choices to sections, resolves each section to its
//! precomputed assets or tables, and builds the classification-report chart.

pub mod asset;
pub mod config;
pub mod constants;
pub mod error;
pub mod presenter;
pub mod report;
pub mod resolver;
pub mod section;
pub mod tables;

// Re-exports
pub use asset::{AssetCatalog, AssetRef};
pub use config::{ConfigSource, DashboardConfig};
pub use constants::exit_codes;
pub use error::DashError;
pub use presenter::{SectionPresenter, SectionView};
pub use report::{build_chart, ChartSeries, ChartSpec, ReportChart, Rgb};
pub use resolver::{ArtifactResolver, ResolvedAssets};
pub use section::{select, select_model, ModelChoice, Section};
pub use tables::{ClassMetrics, ComparisonRow, ComparisonTable, MetricsTable};

/// Resolve a section against the built-in configuration.
///
/// Convenience wrapper for callers that never load a dashboard file.
///
/// # Example
/// ```
/// use maskdash_core::{resolve, ModelChoice, Section};
///
/// let assets = resolve(Section::ConfusionMatrix, Some(ModelChoice::CustomCNN)).unwrap();
/// assert_eq!(assets.asset_refs()[0].as_str(), "confusion_matrix.png");
/// ```
pub fn resolve(section: Section, model: Option<ModelChoice>) -> Result<ResolvedAssets, DashError> {
    ArtifactResolver::new(DashboardConfig::default()).resolve(section, model)
}
