//! Property-based tests for section resolution and the report chart.

use proptest::prelude::*;

use maskdash_core::{
    build_chart, select, ArtifactResolver, ClassMetrics, DashError, MetricsTable, ModelChoice,
    Section,
};

fn any_section() -> impl Strategy<Value = Section> {
    (0..Section::ALL.len()).prop_map(|i| Section::ALL[i])
}

fn any_model() -> impl Strategy<Value = Option<ModelChoice>> {
    prop_oneof![
        Just(None),
        Just(Some(ModelChoice::MobileNetV2)),
        Just(Some(ModelChoice::CustomCNN)),
    ]
}

fn any_row() -> impl Strategy<Value = ClassMetrics> {
    ("[a-z_]{1,12}", 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0u32..10_000).prop_map(
        |(label, precision, recall, f1_score, support)| ClassMetrics {
            label,
            precision,
            recall,
            f1_score,
            support,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every section resolves once a model is supplied, and only the
    /// Grad-CAM viewer refuses to resolve without one.
    #[test]
    fn resolution_is_total(section in any_section(), model in any_model()) {
        let resolver = ArtifactResolver::default();
        match (resolver.resolve(section, model), model) {
            (Ok(resolved), _) => prop_assert_eq!(resolved.section(), section),
            (Err(DashError::MissingModelChoice), None) => {
                prop_assert_eq!(section, Section::GradCamViewer);
            }
            (Err(e), _) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    /// Resolving twice yields the same value.
    #[test]
    fn resolution_is_idempotent(section in any_section(), model in any_model()) {
        let resolver = ArtifactResolver::default();
        prop_assert_eq!(resolver.resolve(section, model), resolver.resolve(section, model));
    }

    /// Image sections never return an empty asset list.
    #[test]
    fn image_sections_have_assets(section in any_section()) {
        let resolved = ArtifactResolver::default().resolve_or_default(section, None);
        let is_table = matches!(section, Section::ModelComparison | Section::ClassificationReport);
        prop_assert_eq!(resolved.asset_refs().is_empty(), is_table);
    }

    /// Labels and slugs always select their own section.
    #[test]
    fn selector_accepts_labels(section in any_section(), upper in any::<bool>()) {
        let label = if upper { section.label().to_uppercase() } else { section.slug().to_string() };
        prop_assert_eq!(select(&label).unwrap(), section);
    }

    /// The chart has one value per (metric, class) and copies values verbatim.
    #[test]
    fn chart_shape_follows_table(rows in prop::collection::vec(any_row(), 1..6), accuracy in 0.0..=1.0f64) {
        let table = MetricsTable { rows, accuracy };
        let report = build_chart(&table);
        prop_assert_eq!(report.chart.series.len(), 3);
        prop_assert_eq!(report.chart.point_count(), 3 * table.rows.len());
        prop_assert_eq!(report.support.len(), table.rows.len());
        for (i, row) in table.rows.iter().enumerate() {
            prop_assert_eq!(report.chart.series[0].values[i], row.precision);
            prop_assert_eq!(report.chart.series[1].values[i], row.recall);
            prop_assert_eq!(report.chart.series[2].values[i], row.f1_score);
            prop_assert_eq!(report.support[i].1, row.support);
        }
        prop_assert_eq!(build_chart(&table), report);
    }
}
