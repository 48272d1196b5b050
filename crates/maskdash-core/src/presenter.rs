//! Section views and the presentation interface consumed by front ends.

use serde::Serialize;

use crate::error::DashError;
use crate::report::{build_chart, ReportChart};
use crate::resolver::{ArtifactResolver, ResolvedAssets};
use crate::section::{ModelChoice, Section};

/// Everything a front end needs to draw one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub section: Section,
    pub title: &'static str,
    pub caption: &'static str,
    pub resolved: ResolvedAssets,
    /// Present only for the classification report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ReportChart>,
}

impl SectionView {
    /// Resolve `section` and derive its chart, if it has one.
    pub fn build(
        resolver: &ArtifactResolver,
        section: Section,
        model: Option<ModelChoice>,
    ) -> Result<Self, DashError> {
        let resolved = resolver.resolve(section, model)?;
        Ok(Self::from_resolved(section, resolved))
    }

    /// Build with an explicit model; never fails.
    #[must_use]
    pub fn for_model(resolver: &ArtifactResolver, section: Section, model: ModelChoice) -> Self {
        Self::from_resolved(section, resolver.resolve_or_default(section, Some(model)))
    }

    fn from_resolved(section: Section, resolved: ResolvedAssets) -> Self {
        let chart = match &resolved {
            ResolvedAssets::Report { table } => Some(build_chart(table)),
            _ => None,
        };
        Self {
            section,
            title: section.label(),
            caption: section.caption(),
            resolved,
            chart,
        }
    }
}

/// Renders section views for a particular output.
pub trait SectionPresenter {
    /// Render one section.
    fn render(&self, view: &SectionView) -> String;

    /// Write one section to stdout.
    fn present(&self, view: &SectionView) {
        print!("{}", self.render(view));
    }
}
